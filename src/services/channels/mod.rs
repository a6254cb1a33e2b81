//! Channels service.
//!
//! Channel lookup, direct-channel creation, member listing, and resolution
//! of `@username` channel references.

use crate::auth::AuthManager;
use crate::errors::{MattermostResult, SerializationError};
use crate::routes;
use crate::services::users::{UsersService, UsersServiceTrait};
use crate::transport::{decode_response, ApiRequest, ClientResponse, HttpTransport};
use crate::types::{Channel, ChannelId, ChannelMember};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for channels service operations
#[async_trait]
pub trait ChannelsServiceTrait: Send + Sync {
    /// Get a channel by id
    async fn get_channel(
        &self,
        channel_id: &str,
        etag: &str,
    ) -> MattermostResult<ClientResponse<Channel>>;

    /// Create a direct-message channel between two users.
    ///
    /// The server idempotently returns the existing channel when one
    /// already exists for the pair.
    async fn create_direct_channel(
        &self,
        user_id1: &str,
        user_id2: &str,
    ) -> MattermostResult<ClientResponse<Channel>>;

    /// Get one channel membership
    async fn get_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
        etag: &str,
    ) -> MattermostResult<ClientResponse<ChannelMember>>;

    /// Get one page of channel members. No multi-page aggregation is
    /// performed; callers page manually.
    async fn get_channel_members(
        &self,
        channel_id: &str,
        page: u64,
        per_page: u64,
        etag: &str,
    ) -> MattermostResult<ClientResponse<Vec<ChannelMember>>>;

    /// Resolve a channel reference to a channel id.
    ///
    /// `@username` resolves to a direct-message channel between the
    /// authenticated user and the named user, created on demand. Anything
    /// else is returned verbatim with zero API calls.
    async fn resolve_channel_id(&self, reference: &str) -> MattermostResult<ChannelId>;
}

/// Channels service implementation
#[derive(Clone)]
pub struct ChannelsService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    api_url: String,
    users: UsersService,
}

impl ChannelsService {
    /// Create a new channels service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth: AuthManager,
        api_url: String,
        users: UsersService,
    ) -> Self {
        Self {
            transport,
            auth,
            api_url,
            users,
        }
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.api_url, route)
    }
}

#[async_trait]
impl ChannelsServiceTrait for ChannelsService {
    #[instrument(skip(self, etag), fields(channel_id = %channel_id))]
    async fn get_channel(
        &self,
        channel_id: &str,
        etag: &str,
    ) -> MattermostResult<ClientResponse<Channel>> {
        let headers = self.auth.headers()?;
        let request =
            ApiRequest::get(self.url(&routes::channel_route(channel_id)), headers).with_etag(etag);
        let raw = self.transport.send(request).await?;
        decode_response("GetChannel", raw)
    }

    #[instrument(skip(self))]
    async fn create_direct_channel(
        &self,
        user_id1: &str,
        user_id2: &str,
    ) -> MattermostResult<ClientResponse<Channel>> {
        let operation = "CreateDirectChannel";
        // The body is the ordered pair of user ids.
        let body = serde_json::to_string(&[user_id1, user_id2])
            .map_err(|e| SerializationError::encode(operation, e))?;
        let headers = self.auth.headers()?;
        let url = self.url(&format!("{}/direct", routes::channels_route()));
        let raw = self.transport.send(ApiRequest::post(url, headers, body)).await?;
        decode_response(operation, raw)
    }

    #[instrument(skip(self, etag), fields(channel_id = %channel_id, user_id = %user_id))]
    async fn get_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
        etag: &str,
    ) -> MattermostResult<ClientResponse<ChannelMember>> {
        let headers = self.auth.headers()?;
        let request = ApiRequest::get(
            self.url(&routes::channel_member_route(channel_id, user_id)),
            headers,
        )
        .with_etag(etag);
        let raw = self.transport.send(request).await?;
        decode_response("GetChannelMember", raw)
    }

    #[instrument(skip(self, etag), fields(channel_id = %channel_id, page, per_page))]
    async fn get_channel_members(
        &self,
        channel_id: &str,
        page: u64,
        per_page: u64,
        etag: &str,
    ) -> MattermostResult<ClientResponse<Vec<ChannelMember>>> {
        let headers = self.auth.headers()?;
        let route = format!(
            "{}?page={}&per_page={}",
            routes::channel_members_route(channel_id),
            page,
            per_page
        );
        let request = ApiRequest::get(self.url(&route), headers).with_etag(etag);
        let raw = self.transport.send(request).await?;
        decode_response("GetChannelMembers", raw)
    }

    #[instrument(skip(self), fields(reference = %reference))]
    async fn resolve_channel_id(&self, reference: &str) -> MattermostResult<ChannelId> {
        if !reference.starts_with('@') {
            return Ok(ChannelId::new(reference));
        }
        let username = reference.trim_start_matches('@');

        let me = self.users.get_me("").await?.require_body("GetMe")?;
        let other = self
            .users
            .get_user_by_username(username, "")
            .await?
            .require_body("GetUserByUsername")?;
        let channel = self
            .create_direct_channel(me.id.as_str(), other.id.as_str())
            .await?
            .require_body("CreateDirectChannel")?;
        Ok(channel.id)
    }
}

impl std::fmt::Debug for ChannelsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelsService")
            .field("api_url", &self.api_url)
            .finish()
    }
}
