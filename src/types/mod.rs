//! Entity types for the Mattermost API v4.
//!
//! Flat records mirroring the server's JSON contract. Every instance is a
//! disconnected snapshot produced by decoding a response; the client never
//! holds authoritative copies. Timestamps are opaque epoch milliseconds
//! passed through without interpretation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod channel;
pub mod post;
pub mod team;
pub mod user;

pub use channel::*;
pub use post::*;
pub use team::*;
pub use user::*;

/// String-to-string property bag (notify props, timezone, etc.)
pub type StringMap = HashMap<String, String>;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new id
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the id is the empty string
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type! {
    /// Mattermost user id
    UserId
}

id_type! {
    /// Mattermost team id
    TeamId
}

id_type! {
    /// Mattermost channel id
    ChannelId
}

id_type! {
    /// Mattermost post id
    PostId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serde_is_transparent() {
        let id = ChannelId::new("c1a2b3");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""c1a2b3""#);

        let back: ChannelId = serde_json::from_str(r#""c1a2b3""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_empty_id() {
        assert!(PostId::default().is_empty());
        assert!(!PostId::new("p1").is_empty());
    }
}
