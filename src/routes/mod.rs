//! Route builders for the Mattermost REST API v4.
//!
//! Pure string formatting from resource identifiers to path fragments.
//! Identifiers are concatenated literally: no validation or percent-escaping
//! is performed, malformed identifiers are rejected by the server.

/// `/users`
pub fn users_route() -> String {
    "/users".to_string()
}

/// `/users/{user_id}`
pub fn user_route(user_id: &str) -> String {
    format!("{}/{}", users_route(), user_id)
}

/// `/users/me`
pub fn me_route() -> String {
    user_route(crate::ME)
}

/// `/users/username/{username}`
pub fn user_by_username_route(username: &str) -> String {
    format!("{}/username/{}", users_route(), username)
}

/// `/users/email/{email}`
pub fn user_by_email_route(email: &str) -> String {
    format!("{}/email/{}", users_route(), email)
}

/// `/teams`
pub fn teams_route() -> String {
    "/teams".to_string()
}

/// `/teams/{team_id}`
pub fn team_route(team_id: &str) -> String {
    format!("{}/{}", teams_route(), team_id)
}

/// `/teams/name/{team_name}`
pub fn team_by_name_route(team_name: &str) -> String {
    format!("{}/name/{}", teams_route(), team_name)
}

/// `/channels`
pub fn channels_route() -> String {
    "/channels".to_string()
}

/// `/channels/{channel_id}`
pub fn channel_route(channel_id: &str) -> String {
    format!("{}/{}", channels_route(), channel_id)
}

/// `/channels/{channel_id}/members`
pub fn channel_members_route(channel_id: &str) -> String {
    format!("{}/members", channel_route(channel_id))
}

/// `/channels/{channel_id}/members/{user_id}`
pub fn channel_member_route(channel_id: &str, user_id: &str) -> String {
    format!("{}/{}", channel_members_route(channel_id), user_id)
}

/// `/posts`
pub fn posts_route() -> String {
    "/posts".to_string()
}

/// `/users/{user_id}/teams/{team_id}/threads`
pub fn user_threads_route(user_id: &str, team_id: &str) -> String {
    format!("{}{}/threads", user_route(user_id), team_route(team_id))
}

/// `/users/{user_id}/teams/{team_id}/threads/{thread_id}`
pub fn user_thread_route(user_id: &str, team_id: &str, thread_id: &str) -> String {
    format!("{}/{}", user_threads_route(user_id, team_id), thread_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_routes() {
        assert_eq!(users_route(), "/users");
        assert_eq!(teams_route(), "/teams");
        assert_eq!(channels_route(), "/channels");
        assert_eq!(posts_route(), "/posts");
    }

    #[test]
    fn test_single_resource_routes() {
        assert_eq!(user_route("u1"), "/users/u1");
        assert_eq!(me_route(), "/users/me");
        assert_eq!(team_route("t1"), "/teams/t1");
        assert_eq!(channel_route("c1"), "/channels/c1");
        assert_eq!(user_by_username_route("alice"), "/users/username/alice");
        assert_eq!(user_by_email_route("a@b.c"), "/users/email/a@b.c");
        assert_eq!(team_by_name_route("core"), "/teams/name/core");
    }

    #[test]
    fn test_nested_routes() {
        assert_eq!(channel_members_route("c1"), "/channels/c1/members");
        assert_eq!(channel_member_route("c1", "u1"), "/channels/c1/members/u1");
        assert_eq!(
            user_thread_route("u1", "t1", "th1"),
            "/users/u1/teams/t1/threads/th1"
        );
    }

    #[test]
    fn test_identifiers_pass_through_literally() {
        // No escaping is performed; odd characters are the server's problem.
        assert_eq!(channel_route("a/b c"), "/channels/a/b c");
        assert_eq!(
            channel_member_route("c?x=1", "u&y"),
            "/channels/c?x=1/members/u&y"
        );
    }
}
