//! Mattermost client implementation.
//!
//! Provides the main entry point for interacting with the Mattermost
//! REST API.

use crate::auth::AuthManager;
use crate::config::MattermostConfig;
use crate::errors::MattermostResult;
use crate::services::{
    ChannelsService, PostsService, TeamsService, ThreadsService, UsersService,
};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

/// Trait defining the Mattermost client interface
pub trait MattermostClient: Send + Sync {
    /// Get the configuration
    fn config(&self) -> &MattermostConfig;

    /// Get the authentication manager
    fn auth_manager(&self) -> &AuthManager;

    /// Get the users service
    fn users(&self) -> &dyn crate::services::users::UsersServiceTrait;

    /// Get the teams service
    fn teams(&self) -> &dyn crate::services::teams::TeamsServiceTrait;

    /// Get the channels service
    fn channels(&self) -> &dyn crate::services::channels::ChannelsServiceTrait;

    /// Get the posts service
    fn posts(&self) -> &dyn crate::services::posts::PostsServiceTrait;

    /// Get the threads service
    fn threads(&self) -> &dyn crate::services::threads::ThreadsServiceTrait;
}

/// Main Mattermost client implementation
pub struct MattermostClientImpl {
    config: Arc<MattermostConfig>,
    auth: AuthManager,
    transport: Arc<dyn HttpTransport>,
    // Service instances
    users_service: UsersService,
    teams_service: TeamsService,
    channels_service: ChannelsService,
    posts_service: PostsService,
    threads_service: ThreadsService,
}

impl MattermostClientImpl {
    /// Create a new Mattermost client with the given configuration
    pub fn new(config: MattermostConfig) -> MattermostResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Self::with_transport(config, transport)
    }

    /// Create a new Mattermost client with a custom transport
    pub fn with_transport(
        config: MattermostConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> MattermostResult<Self> {
        let config = Arc::new(config);
        let auth = AuthManager::new(config.clone());
        let api_url = config.api_url();

        // Initialize services. Channels composes over users for channel
        // reference resolution; posts and threads compose over channels.
        let users_service =
            UsersService::new(transport.clone(), auth.clone(), api_url.clone());
        let teams_service =
            TeamsService::new(transport.clone(), auth.clone(), api_url.clone());
        let channels_service = ChannelsService::new(
            transport.clone(),
            auth.clone(),
            api_url.clone(),
            users_service.clone(),
        );
        let posts_service = PostsService::new(
            transport.clone(),
            auth.clone(),
            api_url.clone(),
            channels_service.clone(),
        );
        let threads_service = ThreadsService::new(
            transport.clone(),
            auth.clone(),
            api_url,
            channels_service.clone(),
        );

        Ok(Self {
            config,
            auth,
            transport,
            users_service,
            teams_service,
            channels_service,
            posts_service,
            threads_service,
        })
    }

    /// Get a reference to the HTTP transport
    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// Get a reference to the base URL
    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }

    /// Build a full API URL for a route
    pub fn build_url(&self, route: &str) -> String {
        self.config.build_url(route)
    }

    /// Get the users service
    pub fn users(&self) -> &UsersService {
        &self.users_service
    }

    /// Get the teams service
    pub fn teams(&self) -> &TeamsService {
        &self.teams_service
    }

    /// Get the channels service
    pub fn channels(&self) -> &ChannelsService {
        &self.channels_service
    }

    /// Get the posts service
    pub fn posts(&self) -> &PostsService {
        &self.posts_service
    }

    /// Get the threads service
    pub fn threads(&self) -> &ThreadsService {
        &self.threads_service
    }
}

impl MattermostClient for MattermostClientImpl {
    fn config(&self) -> &MattermostConfig {
        &self.config
    }

    fn auth_manager(&self) -> &AuthManager {
        &self.auth
    }

    fn users(&self) -> &dyn crate::services::users::UsersServiceTrait {
        &self.users_service
    }

    fn teams(&self) -> &dyn crate::services::teams::TeamsServiceTrait {
        &self.teams_service
    }

    fn channels(&self) -> &dyn crate::services::channels::ChannelsServiceTrait {
        &self.channels_service
    }

    fn posts(&self) -> &dyn crate::services::posts::PostsServiceTrait {
        &self.posts_service
    }

    fn threads(&self) -> &dyn crate::services::threads::ThreadsServiceTrait {
        &self.threads_service
    }
}

impl std::fmt::Debug for MattermostClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MattermostClientImpl")
            .field("config", &self.config)
            .field("auth", &self.auth)
            .finish()
    }
}

impl Clone for MattermostClientImpl {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            auth: self.auth.clone(),
            transport: self.transport.clone(),
            users_service: self.users_service.clone(),
            teams_service: self.teams_service.clone(),
            channels_service: self.channels_service.clone(),
            posts_service: self.posts_service.clone(),
            threads_service: self.threads_service.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MattermostConfigBuilder;

    fn test_config() -> MattermostConfig {
        MattermostConfigBuilder::new()
            .base_url("https://mattermost.example.com")
            .unwrap()
            .token("xoxtest-token-123")
            .build()
    }

    #[test]
    fn test_client_creation() {
        let client = MattermostClientImpl::new(test_config()).unwrap();
        assert!(client.config().token().is_some());
    }

    #[test]
    fn test_build_url() {
        let client = MattermostClientImpl::new(test_config()).unwrap();
        assert_eq!(
            client.build_url("/users/me"),
            "https://mattermost.example.com/api/v4/users/me"
        );
    }

    #[test]
    fn test_client_clone() {
        let client = MattermostClientImpl::new(test_config()).unwrap();
        let cloned = client.clone();
        assert_eq!(client.base_url(), cloned.base_url());
    }

    #[test]
    fn test_service_accessors() {
        let client = MattermostClientImpl::new(test_config()).unwrap();

        let _ = client.users();
        let _ = client.teams();
        let _ = client.channels();
        let _ = client.posts();
        let _ = client.threads();
    }

    #[test]
    fn test_trait_service_accessors() {
        let client = MattermostClientImpl::new(test_config()).unwrap();
        let client_trait: &dyn MattermostClient = &client;

        let _ = client_trait.users();
        let _ = client_trait.teams();
        let _ = client_trait.channels();
        let _ = client_trait.posts();
        let _ = client_trait.threads();
    }
}
