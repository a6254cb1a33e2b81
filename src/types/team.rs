//! Team entity.

use super::TeamId;
use serde::{Deserialize, Serialize};

/// A workspace grouping channels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Team {
    /// Team id
    pub id: TeamId,
    /// Creation timestamp (epoch ms)
    #[serde(default)]
    pub create_at: i64,
    /// Last update timestamp (epoch ms)
    #[serde(default)]
    pub update_at: i64,
    /// Deletion timestamp (epoch ms, 0 = live)
    #[serde(default)]
    pub delete_at: i64,
    /// Human-readable name
    #[serde(default)]
    pub display_name: String,
    /// URL slug
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Team type (`O` open, `I` invite-only)
    #[serde(rename = "type", default)]
    pub team_type: String,
    /// Company name
    #[serde(default)]
    pub company_name: String,
    /// Comma-separated allowed email domains
    #[serde(default)]
    pub allowed_domains: String,
    /// Invite id for join links
    #[serde(default)]
    pub invite_id: String,
    /// Whether anyone may join via link
    #[serde(default)]
    pub allow_open_invite: bool,
    /// Last team icon update (epoch ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_team_icon_update: Option<i64>,
    /// Permission scheme id
    #[serde(default)]
    pub scheme_id: Option<String>,
    /// Whether membership is group-constrained
    #[serde(default)]
    pub group_constrained: Option<bool>,
    /// Retention policy id
    #[serde(default)]
    pub policy_id: Option<String>,
    /// Whether cloud limits archived this team
    #[serde(default)]
    pub cloud_limits_archived: bool,
}
