//! Test fixtures for Mattermost API responses.
//!
//! Provides realistic test data for unit tests.

use crate::types::*;

/// Create a fixture user
pub fn user() -> User {
    User {
        id: UserId::new("ah7xszu5m3d93e3yzk9yijs1hw"),
        create_at: Some(1614600000000),
        update_at: Some(1614700000000),
        delete_at: 0,
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Doe".to_string(),
        roles: "system_user".to_string(),
        locale: "en".to_string(),
        ..Default::default()
    }
}

/// Create a fixture bot account
pub fn bot_user() -> User {
    User {
        id: UserId::new("b0tuser5m3d93e3yzk9yijs1hw"),
        username: "deploybot".to_string(),
        is_bot: Some(true),
        bot_description: Some("Posts deployment notices".to_string()),
        roles: "system_user".to_string(),
        ..user()
    }
}

/// Create a fixture team
pub fn team() -> Team {
    Team {
        id: TeamId::new("qe93kf8fg7y18k8rjebc6h5nhy"),
        create_at: 1614600000000,
        update_at: 1614600000000,
        display_name: "Core Team".to_string(),
        name: "core".to_string(),
        email: "admin@example.com".to_string(),
        team_type: "O".to_string(),
        invite_id: "inv123".to_string(),
        allow_open_invite: true,
        ..Default::default()
    }
}

/// Create a fixture open channel
pub fn channel() -> Channel {
    Channel {
        id: ChannelId::new("8a9f7sk3kjgezf4wp8bcdef123"),
        create_at: 1614600000000,
        update_at: 1614600000000,
        team_id: TeamId::new("qe93kf8fg7y18k8rjebc6h5nhy"),
        channel_type: ChannelType::Open,
        display_name: "Town Square".to_string(),
        name: DEFAULT_CHANNEL_NAME.to_string(),
        last_post_at: 1614800000000,
        total_msg_count: 42,
        total_msg_count_root: 40,
        last_root_post_at: 1614800000000,
        ..Default::default()
    }
}

/// Create a fixture direct-message channel
pub fn direct_channel() -> Channel {
    Channel {
        id: ChannelId::new("dm1f7sk3kjgezf4wp8bcdef123"),
        channel_type: ChannelType::Direct,
        display_name: String::new(),
        name: "ah7xszu5m3d93e3yzk9yijs1hw__b0tuser5m3d93e3yzk9yijs1hw".to_string(),
        team_id: TeamId::default(),
        ..channel()
    }
}

/// Create a fixture channel membership
pub fn channel_member() -> ChannelMember {
    ChannelMember {
        channel_id: ChannelId::new("8a9f7sk3kjgezf4wp8bcdef123"),
        user_id: UserId::new("ah7xszu5m3d93e3yzk9yijs1hw"),
        roles: "channel_user".to_string(),
        msg_count: 3,
        msg_count_root: 2,
        scheme_user: true,
        ..Default::default()
    }
}

/// Create a page of fixture channel memberships with distinct user ids
pub fn channel_members(count: usize) -> Vec<ChannelMember> {
    (0..count)
        .map(|i| ChannelMember {
            user_id: UserId::new(format!("member{:02}m3d93e3yzk9yijs1hw", i)),
            ..channel_member()
        })
        .collect()
}

/// Create a fixture post as stored by the server
pub fn post() -> Post {
    Post {
        id: PostId::new("p0stid5m3d93e3yzk9yijs1hw1"),
        create_at: 1614800000000,
        update_at: 1614800000000,
        user_id: UserId::new("ah7xszu5m3d93e3yzk9yijs1hw"),
        channel_id: ChannelId::new("8a9f7sk3kjgezf4wp8bcdef123"),
        message: "deploy finished".to_string(),
        pending_post_id: String::new(),
        ..Default::default()
    }
}

/// Create a fixture thread reply
pub fn thread_reply() -> Post {
    Post {
        id: PostId::new("p0stid5m3d93e3yzk9yijs1hw2"),
        root_id: PostId::new("p0stid5m3d93e3yzk9yijs1hw1"),
        message: "looks good".to_string(),
        ..post()
    }
}

/// Create a fixture post carrying a rich attachment
pub fn attachment_post() -> Post {
    Post {
        properties: MessageProperties {
            attachments: vec![attachment()],
        },
        ..post()
    }
}

/// Create a fixture attachment with fields
pub fn attachment() -> MessageAttachment {
    MessageAttachment {
        author: "deploybot".to_string(),
        color: attachment_color("success").to_string(),
        title: "Deployment".to_string(),
        title_link: "https://ci.example.com/builds/1842".to_string(),
        text: "Build 1842 rolled out".to_string(),
        footer: "ci".to_string(),
        fields: vec![
            MessageAttachmentField {
                short: "true".to_string(),
                title: "Environment".to_string(),
                value: "production".to_string(),
            },
            MessageAttachmentField {
                short: "true".to_string(),
                title: "Duration".to_string(),
                value: "4m12s".to_string(),
            },
        ],
        ..Default::default()
    }
}

/// Create a fixture API error envelope body
pub fn error_body(id: &str, message: &str, status_code: u16) -> String {
    format!(
        r#"{{"id":"{}","message":"{}","detailed_error":"","request_id":"req-fixture-1","status_code":{}}}"#,
        id, message, status_code
    )
}
