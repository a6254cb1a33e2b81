//! Post entity and message attachment payloads.

use super::{ChannelId, PostId, UserId};
use serde::{Deserialize, Serialize};

/// Wire value for a plain message post
pub const POST_TYPE_DEFAULT: &str = "";
/// Wire value for a post carrying Slack-compatible attachments
pub const POST_TYPE_SLACK_ATTACHMENT: &str = "slack_attachment";

const COLOR_CRITICAL: &str = "#FF0000";
const COLOR_INFO: &str = "#E0E0D1";
const COLOR_SUCCESS: &str = "#00FF00";
const COLOR_WARNING: &str = "#FF8000";
const COLOR_DEFAULT: &str = "#E0E0D1";

/// Map a severity level to its attachment color code.
///
/// Unknown levels get the default color.
pub fn attachment_color(level: &str) -> &'static str {
    match level {
        "critical" => COLOR_CRITICAL,
        "info" => COLOR_INFO,
        "success" => COLOR_SUCCESS,
        "warning" => COLOR_WARNING,
        _ => COLOR_DEFAULT,
    }
}

/// One field inside a message attachment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageAttachmentField {
    /// Whether the field renders side by side with others
    #[serde(default)]
    pub short: String,
    /// Field title
    #[serde(default)]
    pub title: String,
    /// Field value
    #[serde(default)]
    pub value: String,
}

/// A Slack-compatible rich attachment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageAttachment {
    /// Author line
    #[serde(rename = "author_name", default)]
    pub author: String,
    /// Left-border color code
    #[serde(default)]
    pub color: String,
    /// Attachment title
    #[serde(default)]
    pub title: String,
    /// Title hyperlink
    #[serde(default)]
    pub title_link: String,
    /// Thumbnail URL
    #[serde(default)]
    pub thumb_url: String,
    /// Body text
    #[serde(default)]
    pub text: String,
    /// Text shown above the attachment
    #[serde(default)]
    pub pretext: String,
    /// Footer line
    #[serde(default)]
    pub footer: String,
    /// Structured fields
    #[serde(default)]
    pub fields: Vec<MessageAttachmentField>,
}

/// Post properties: the attachment payload.
///
/// Decoded whole as an immutable value; there is no post-construction
/// mutation of props.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageProperties {
    /// Rich attachments carried by the post
    #[serde(default)]
    pub attachments: Vec<MessageAttachment>,
}

/// A single message.
///
/// An empty `root_id` marks a thread root; a non-empty one marks a reply
/// into that thread.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Post {
    /// Post id, server-assigned
    #[serde(default)]
    pub id: PostId,
    /// Creation timestamp (epoch ms), server-assigned
    #[serde(default)]
    pub create_at: i64,
    /// Last update timestamp (epoch ms)
    #[serde(default)]
    pub update_at: i64,
    /// Last edit timestamp (epoch ms)
    #[serde(default)]
    pub edit_at: i64,
    /// Deletion timestamp (epoch ms, 0 = live)
    #[serde(default)]
    pub delete_at: i64,
    /// Whether the post is pinned
    #[serde(default)]
    pub is_pinned: bool,
    /// Author user id
    #[serde(default)]
    pub user_id: UserId,
    /// Containing channel id
    #[serde(default)]
    pub channel_id: ChannelId,
    /// Thread parent id; empty for thread roots
    #[serde(default)]
    pub root_id: PostId,
    /// Original post id for edited posts
    #[serde(default)]
    pub original_id: PostId,
    /// Message text
    #[serde(default)]
    pub message: String,
    /// Message as submitted, when `message` was rewritten for presentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_source: Option<String>,
    /// Post type (empty for plain messages)
    #[serde(rename = "type", default)]
    pub post_type: String,
    /// Attachment payload
    #[serde(rename = "props", default)]
    pub properties: MessageProperties,
    /// Space-separated hashtags
    #[serde(default)]
    pub hashtags: String,
    /// Attached file ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_ids: Option<Vec<String>>,
    /// Client-assigned id for deduplication
    #[serde(default)]
    pub pending_post_id: String,
    /// Whether the post has reactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_reactions: Option<bool>,
    /// Remote cluster id for shared posts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    /// Reply count, populated by the server
    #[serde(default)]
    pub reply_count: i64,
    /// Newest reply timestamp (epoch ms)
    #[serde(default)]
    pub last_reply_at: i64,
    /// Whether the current user follows this thread (root posts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_following: Option<bool>,
}

impl Post {
    /// Whether this post anchors a thread rather than replying into one
    pub fn is_thread_root(&self) -> bool {
        self.root_id.is_empty()
    }
}
