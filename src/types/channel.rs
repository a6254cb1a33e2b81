//! Channel and channel-membership entities.

use super::{ChannelId, StringMap, TeamId, UserId};
use serde::{Deserialize, Serialize};

/// Name of the default channel every team starts with
pub const DEFAULT_CHANNEL_NAME: &str = "town-square";

/// Channel type: a closed enumeration of exactly four wire values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelType {
    /// Open (public) channel, wire value `O`
    #[default]
    #[serde(rename = "O")]
    Open,
    /// Private channel, wire value `P`
    #[serde(rename = "P")]
    Private,
    /// Direct message between two users, wire value `D`
    #[serde(rename = "D")]
    Direct,
    /// Group message, wire value `G`
    #[serde(rename = "G")]
    Group,
}

/// A conversation container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Channel {
    /// Channel id
    pub id: ChannelId,
    /// Creation timestamp (epoch ms)
    #[serde(default)]
    pub create_at: i64,
    /// Last update timestamp (epoch ms)
    #[serde(default)]
    pub update_at: i64,
    /// Deletion timestamp (epoch ms, 0 = live)
    #[serde(default)]
    pub delete_at: i64,
    /// Owning team id (empty for direct/group channels)
    #[serde(default)]
    pub team_id: TeamId,
    /// Channel type
    #[serde(rename = "type", default)]
    pub channel_type: ChannelType,
    /// Human-readable name
    #[serde(default)]
    pub display_name: String,
    /// URL slug
    #[serde(default)]
    pub name: String,
    /// Channel header text
    #[serde(default)]
    pub header: String,
    /// Channel purpose text
    #[serde(default)]
    pub purpose: String,
    /// Timestamp of the newest post (epoch ms)
    #[serde(default)]
    pub last_post_at: i64,
    /// Total message count
    #[serde(default)]
    pub total_msg_count: i64,
    /// Extra update timestamp (epoch ms)
    #[serde(default)]
    pub extra_update_at: i64,
    /// Creator user id
    #[serde(default)]
    pub creator_id: UserId,
    /// Permission scheme id
    #[serde(default)]
    pub scheme_id: Option<String>,
    /// Opaque channel properties, passed through uninterpreted
    #[serde(default)]
    pub props: Option<serde_json::Map<String, serde_json::Value>>,
    /// Whether membership is group-constrained
    #[serde(default)]
    pub group_constrained: Option<bool>,
    /// Whether the channel is shared across clusters
    #[serde(default)]
    pub shared: Option<bool>,
    /// Total root-message count
    #[serde(default)]
    pub total_msg_count_root: i64,
    /// Retention policy id
    #[serde(default)]
    pub policy_id: Option<String>,
    /// Timestamp of the newest root post (epoch ms)
    #[serde(default)]
    pub last_root_post_at: i64,
}

impl Channel {
    /// Whether this is a direct-message channel
    pub fn is_direct(&self) -> bool {
        self.channel_type == ChannelType::Direct
    }
}

/// Membership of a user in a channel.
///
/// Identity is the (channel id, user id) pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelMember {
    /// Channel id
    pub channel_id: ChannelId,
    /// Member user id
    pub user_id: UserId,
    /// Space-separated role names
    #[serde(default)]
    pub roles: String,
    /// Last viewed timestamp (epoch ms)
    #[serde(default)]
    pub last_viewed_at: i64,
    /// Messages seen by the member
    #[serde(default)]
    pub msg_count: i64,
    /// Unread mention count
    #[serde(default)]
    pub mention_count: i64,
    /// Unread root-message mention count
    #[serde(default)]
    pub mention_count_root: i64,
    /// Root messages seen by the member
    #[serde(default)]
    pub msg_count_root: i64,
    /// Per-channel notification preferences
    #[serde(default)]
    pub notify_props: StringMap,
    /// Last membership update (epoch ms)
    #[serde(default)]
    pub last_update_at: i64,
    /// Guest scheme flag
    #[serde(default)]
    pub scheme_guest: bool,
    /// User scheme flag
    #[serde(default)]
    pub scheme_user: bool,
    /// Admin scheme flag
    #[serde(default)]
    pub scheme_admin: bool,
    /// Roles granted outside the scheme
    #[serde(default)]
    pub explicit_roles: String,
}
