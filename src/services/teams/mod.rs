//! Teams service.

use crate::auth::AuthManager;
use crate::errors::MattermostResult;
use crate::routes;
use crate::transport::{decode_response, ApiRequest, ClientResponse, HttpTransport};
use crate::types::Team;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for teams service operations
#[async_trait]
pub trait TeamsServiceTrait: Send + Sync {
    /// Get a team by its URL slug
    async fn get_team_by_name(
        &self,
        name: &str,
        etag: &str,
    ) -> MattermostResult<ClientResponse<Team>>;
}

/// Teams service implementation
#[derive(Clone)]
pub struct TeamsService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    api_url: String,
}

impl TeamsService {
    /// Create a new teams service
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
}

#[async_trait]
impl TeamsServiceTrait for TeamsService {
    #[instrument(skip(self, etag), fields(team_name = %name))]
    async fn get_team_by_name(
        &self,
        name: &str,
        etag: &str,
    ) -> MattermostResult<ClientResponse<Team>> {
        let headers = self.auth.headers()?;
        let request =
            ApiRequest::get(self.url(&routes::team_by_name_route(name)), headers).with_etag(etag);
        let raw = self.transport.send(request).await?;
        decode_response("GetTeamByName", raw)
    }
}

impl std::fmt::Debug for TeamsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamsService")
            .field("api_url", &self.api_url)
            .finish()
    }
}
