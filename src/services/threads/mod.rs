//! Threads service.
//!
//! Per-user thread-follow state, including the bulk toggle across a
//! channel's membership.

use crate::auth::AuthManager;
use crate::errors::MattermostResult;
use crate::routes;
use crate::services::channels::{ChannelsService, ChannelsServiceTrait};
use crate::transport::{classify_response, ApiRequest, HttpTransport, ResponseMeta};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Page size used when listing members for the bulk follow toggle
pub const FOLLOW_MEMBERS_PER_PAGE: u64 = 200;

/// Failure policy for the bulk thread-follow toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FollowMode {
    /// Per-member failures are discarded; the operation succeeds as long
    /// as the channel and member-list fetches succeed.
    #[default]
    BestEffort,
    /// The first per-member failure aborts the operation.
    FailFast,
}

/// Trait for threads service operations
#[async_trait]
pub trait ThreadsServiceTrait: Send + Sync {
    /// Set whether a user follows a thread.
    ///
    /// `following = true` issues a PUT, `false` a DELETE against the
    /// thread's `/following` route. Only response metadata is returned.
    async fn update_thread_follow(
        &self,
        user_id: &str,
        team_id: &str,
        thread_id: &str,
        following: bool,
    ) -> MattermostResult<ResponseMeta>;

    /// Toggle thread-follow state for every member of a channel.
    ///
    /// Fetches the channel (for its owning team), lists the first page of
    /// members, then issues one follow call per member, strictly
    /// sequentially.
    async fn update_thread_follow_for_channel_members(
        &self,
        channel_id: &str,
        post_id: &str,
        following: bool,
        mode: FollowMode,
    ) -> MattermostResult<()>;
}

/// Threads service implementation
#[derive(Clone)]
pub struct ThreadsService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    api_url: String,
    channels: ChannelsService,
}

impl ThreadsService {
    /// Create a new threads service
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
impl ThreadsServiceTrait for ThreadsService {
    #[instrument(skip(self), fields(user_id = %user_id, thread_id = %thread_id, following))]
    async fn update_thread_follow(
        &self,
        user_id: &str,
        team_id: &str,
        thread_id: &str,
        following: bool,
    ) -> MattermostResult<ResponseMeta> {
        let headers = self.auth.headers()?;
        let url = self.url(&format!(
            "{}/following",
            routes::user_thread_route(user_id, team_id, thread_id)
        ));
        let request = if following {
            ApiRequest::put(url, headers, "")
        } else {
            ApiRequest::delete(url, headers)
        };
        let raw = self.transport.send(request).await?;
        classify_response("UpdateThreadFollow", raw)
    }

    #[instrument(skip(self), fields(channel_id = %channel_id, post_id = %post_id, following))]
    async fn update_thread_follow_for_channel_members(
        &self,
        channel_id: &str,
        post_id: &str,
        following: bool,
        mode: FollowMode,
    ) -> MattermostResult<()> {
        let channel = self
            .channels
            .get_channel(channel_id, "")
            .await?
            .require_body("GetChannel")?;
        let members = self
            .channels
            .get_channel_members(channel_id, 0, FOLLOW_MEMBERS_PER_PAGE, "")
            .await?
            .require_body("GetChannelMembers")?;

        for member in &members {
            let result = self
                .update_thread_follow(
                    member.user_id.as_str(),
                    channel.team_id.as_str(),
                    post_id,
                    following,
                )
                .await;
            if let Err(err) = result {
                match mode {
                    FollowMode::BestEffort => {
                        warn!(user_id = %member.user_id, error = %err, "thread follow update failed, continuing");
                    }
                    FollowMode::FailFast => return Err(err),
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ThreadsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadsService")
            .field("api_url", &self.api_url)
            .finish()
    }
}
