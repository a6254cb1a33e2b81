//! Posts service.
//!
//! Message creation: raw posts, simple text posts, and posts carrying a
//! rich attachment payload addressed by channel reference.

use crate::auth::AuthManager;
use crate::errors::{MattermostResult, SerializationError};
use crate::routes;
use crate::services::channels::{ChannelsService, ChannelsServiceTrait};
use crate::transport::{decode_response, ApiRequest, ClientResponse, HttpTransport};
use crate::types::{ChannelId, MessageProperties, Post, PostId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Trait for posts service operations
#[async_trait]
pub trait PostsServiceTrait: Send + Sync {
    /// Submit a post and decode the stored post, including the
    /// server-assigned id and timestamps.
    async fn create_post(&self, post: &Post) -> MattermostResult<ClientResponse<Post>>;

    /// Create a plain text post. An empty `root_id` starts a new thread;
    /// a non-empty one replies into the thread.
    async fn create_simple_post(
        &self,
        channel_id: &str,
        message: &str,
        root_id: &str,
    ) -> MattermostResult<ClientResponse<Post>>;

    /// Create a post with a rich attachment payload.
    ///
    /// `channel` may be a literal channel id or an `@username` reference;
    /// when resolution of the reference fails the literal string is used
    /// as the channel id.
    async fn create_post_with_attachment(
        &self,
        channel: &str,
        message: &str,
        root_id: &str,
        properties: MessageProperties,
    ) -> MattermostResult<ClientResponse<Post>>;
}

/// Posts service implementation
#[derive(Clone)]
pub struct PostsService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    api_url: String,
    channels: ChannelsService,
}

impl PostsService {
    /// Create a new posts service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth: AuthManager,
        api_url: String,
        channels: ChannelsService,
    ) -> Self {
        Self {
            transport,
            auth,
            api_url,
            channels,
        }
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.api_url, route)
    }
}

#[async_trait]
impl PostsServiceTrait for PostsService {
    #[instrument(skip(self, post), fields(channel_id = %post.channel_id))]
    async fn create_post(&self, post: &Post) -> MattermostResult<ClientResponse<Post>> {
        let operation = "CreatePost";
        let body =
            serde_json::to_string(post).map_err(|e| SerializationError::encode(operation, e))?;
        let headers = self.auth.headers()?;
        let url = self.url(&routes::posts_route());
        let raw = self.transport.send(ApiRequest::post(url, headers, body)).await?;
        decode_response(operation, raw)
    }

    #[instrument(skip(self, message), fields(channel_id = %channel_id))]
    async fn create_simple_post(
        &self,
        channel_id: &str,
        message: &str,
        root_id: &str,
    ) -> MattermostResult<ClientResponse<Post>> {
        let post = Post {
            channel_id: ChannelId::new(channel_id),
            root_id: PostId::new(root_id),
            message: message.to_string(),
            ..Default::default()
        };
        self.create_post(&post).await
    }

    #[instrument(skip(self, message, properties), fields(channel = %channel))]
    async fn create_post_with_attachment(
        &self,
        channel: &str,
        message: &str,
        root_id: &str,
        properties: MessageProperties,
    ) -> MattermostResult<ClientResponse<Post>> {
        let channel_id = match self.channels.resolve_channel_id(channel).await {
            Ok(id) => id,
            Err(err) => {
                // Fall back to the literal reference and let the server
                // reject it if it is not a channel id.
                warn!(error = %err, "channel reference resolution failed");
                ChannelId::new(channel)
            }
        };
        let post = Post {
            channel_id,
            root_id: PostId::new(root_id),
            message: message.to_string(),
            properties,
            ..Default::default()
        };
        self.create_post(&post).await
    }
}

impl std::fmt::Debug for PostsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostsService")
            .field("api_url", &self.api_url)
            .finish()
    }
}
