//! Authentication for Mattermost API requests.
//!
//! Builds the per-request header set: the bearer authorization header (when
//! a token is configured) plus any statically configured default headers.

use crate::config::MattermostConfig;
use crate::errors::{AppError, MattermostError, MattermostResult};
use http::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::sync::Arc;

/// Authentication manager for Mattermost API requests
#[derive(Clone)]
pub struct AuthManager {
    config: Arc<MattermostConfig>,
}

impl AuthManager {
    /// Create a new authentication manager
    pub fn new(config: Arc<MattermostConfig>) -> Self {
        Self { config }
    }

    /// Whether a token is configured
    pub fn has_token(&self) -> bool {
        self.config.token().is_some()
    }

    /// Build the header set for one request.
    ///
    /// The `Authorization: Bearer {token}` header is attached if and only if
    /// a token is configured.
    pub fn headers(&self) -> MattermostResult<HeaderMap> {
        let mut headers = self.config.default_headers.clone();

        if let Some(token) = self.config.token() {
            let auth_value = format!("Bearer {}", token);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&auth_value).map_err(|e| {
                    MattermostError::Api(
                        AppError::new(
                            "AuthManager.headers",
                            "api.context.invalid_token.app_error",
                            "token contains invalid header characters",
                            401,
                        )
                        .wrap(e),
                    )
                })?,
            );
        }

        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }

        Ok(headers)
    }
}

impl std::fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthManager")
            .field("has_token", &self.has_token())
            .finish()
    }
}
