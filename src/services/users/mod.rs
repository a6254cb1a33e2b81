//! Users service.
//!
//! Lookup operations for user accounts. All getters accept an optional
//! etag; pass an empty string to fetch unconditionally.

use crate::auth::AuthManager;
use crate::errors::MattermostResult;
use crate::routes;
use crate::transport::{decode_response, ApiRequest, ClientResponse, HttpTransport};
use crate::types::User;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for users service operations
#[async_trait]
pub trait UsersServiceTrait: Send + Sync {
    /// Get the authenticated user
    async fn get_me(&self, etag: &str) -> MattermostResult<ClientResponse<User>>;

    /// Get a user by id
    async fn get_user(&self, user_id: &str, etag: &str) -> MattermostResult<ClientResponse<User>>;

    /// Get a user by username
    async fn get_user_by_username(
        &self,
        username: &str,
        etag: &str,
    ) -> MattermostResult<ClientResponse<User>>;

    /// Get a user by email address
    async fn get_user_by_email(
        &self,
        email: &str,
        etag: &str,
    ) -> MattermostResult<ClientResponse<User>>;
}

/// Users service implementation
#[derive(Clone)]
pub struct UsersService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    api_url: String,
}

impl UsersService {
    /// Create a new users service
    pub fn new(transport: Arc<dyn HttpTransport>, auth: AuthManager, api_url: String) -> Self {
        Self {
            transport,
            auth,
            api_url,
        }
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.api_url, route)
    }

    async fn get_decoded(
        &self,
        operation: &str,
        route: String,
        etag: &str,
    ) -> MattermostResult<ClientResponse<User>> {
        let headers = self.auth.headers()?;
        let request = ApiRequest::get(self.url(&route), headers).with_etag(etag);
        let raw = self.transport.send(request).await?;
        decode_response(operation, raw)
    }
}

#[async_trait]
impl UsersServiceTrait for UsersService {
    #[instrument(skip(self, etag))]
    async fn get_me(&self, etag: &str) -> MattermostResult<ClientResponse<User>> {
        self.get_decoded("GetMe", routes::me_route(), etag).await
    }

    #[instrument(skip(self, etag), fields(user_id = %user_id))]
    async fn get_user(&self, user_id: &str, etag: &str) -> MattermostResult<ClientResponse<User>> {
        self.get_decoded("GetUser", routes::user_route(user_id), etag)
            .await
    }

    #[instrument(skip(self, etag), fields(username = %username))]
    async fn get_user_by_username(
        &self,
        username: &str,
        etag: &str,
    ) -> MattermostResult<ClientResponse<User>> {
        self.get_decoded(
            "GetUserByUsername",
            routes::user_by_username_route(username),
            etag,
        )
        .await
    }

    #[instrument(skip(self, etag))]
    async fn get_user_by_email(
        &self,
        email: &str,
        etag: &str,
    ) -> MattermostResult<ClientResponse<User>> {
        self.get_decoded("GetUserByEmail", routes::user_by_email_route(email), etag)
            .await
    }
}

impl std::fmt::Debug for UsersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersService")
            .field("api_url", &self.api_url)
            .finish()
    }
}
