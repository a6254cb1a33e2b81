//! Service behavior tests against the mock transport.

use crate::config::MattermostConfigBuilder;
use crate::fixtures;
use crate::mocks::{MockHttpTransport, MockResponse};
use crate::services::channels::ChannelsServiceTrait;
use crate::services::posts::PostsServiceTrait;
use crate::services::teams::TeamsServiceTrait;
use crate::services::threads::{FollowMode, ThreadsServiceTrait};
use crate::types::MessageProperties;
use crate::MattermostClientImpl;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn client_with(transport: Arc<MockHttpTransport>) -> MattermostClientImpl {
    let config = MattermostConfigBuilder::new()
        .base_url("http://localhost:8065")
        .unwrap()
        .token("tok-123")
        .build();
    MattermostClientImpl::with_transport(config, transport).unwrap()
}

#[tokio::test]
async fn test_resolve_plain_reference_makes_no_requests() {
    let transport = Arc::new(MockHttpTransport::new());
    let client = client_with(transport.clone());

    let id = client
        .channels()
        .resolve_channel_id("8a9f7sk3kjgezf4wp8bcdef123")
        .await
        .unwrap();
    assert_eq!(id.as_str(), "8a9f7sk3kjgezf4wp8bcdef123");
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_resolve_username_reference_creates_direct_channel() {
    let transport = Arc::new(MockHttpTransport::new().add_responses([
        MockResponse::json(&fixtures::user()),
        MockResponse::json(&fixtures::bot_user()),
        MockResponse::json(&fixtures::direct_channel()),
    ]));
    let client = client_with(transport.clone());

    let id = client.channels().resolve_channel_id("@deploybot").await.unwrap();
    assert_eq!(id.as_str(), "dm1f7sk3kjgezf4wp8bcdef123");

    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].url, "http://localhost:8065/api/v4/users/me");
    assert_eq!(
        requests[1].url,
        "http://localhost:8065/api/v4/users/username/deploybot"
    );
    assert_eq!(requests[2].url, "http://localhost:8065/api/v4/channels/direct");
    assert_eq!(requests[2].method, "POST");

    // Body is the ordered pair: authenticated user first.
    let body = requests[2].body.clone().unwrap();
    assert_eq!(
        body,
        r#"["ah7xszu5m3d93e3yzk9yijs1hw","b0tuser5m3d93e3yzk9yijs1hw"]"#
    );
}

#[tokio::test]
async fn test_attachment_post_falls_back_to_literal_on_resolve_failure() {
    let transport = Arc::new(MockHttpTransport::new().add_responses([
        MockResponse::app_error(404, "app.user.missing_account.app_error", "no such user"),
        MockResponse::json(&fixtures::attachment_post()),
    ]));
    let client = client_with(transport.clone());

    let response = client
        .posts()
        .create_post_with_attachment("@ghost", "ping", "", MessageProperties::default())
        .await
        .unwrap();
    assert!(response.body.is_some());

    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].url, "http://localhost:8065/api/v4/posts");
    let body = requests[1].body.clone().unwrap();
    assert!(body.contains(r#""channel_id":"@ghost""#));
}

#[tokio::test]
async fn test_create_simple_post_carries_root_id() {
    let transport =
        Arc::new(MockHttpTransport::new().add_response(MockResponse::json(&fixtures::thread_reply())));
    let client = client_with(transport.clone());

    client
        .posts()
        .create_simple_post("c1", "on it", "p0stid5m3d93e3yzk9yijs1hw1")
        .await
        .unwrap();

    let body = transport.last_request().unwrap().body.unwrap();
    assert!(body.contains(r#""root_id":"p0stid5m3d93e3yzk9yijs1hw1""#));
    assert!(body.contains(r#""message":"on it""#));
}

#[tokio::test]
async fn test_get_channel_members_pagination_query() {
    let transport = Arc::new(
        MockHttpTransport::new().add_response(MockResponse::json(&fixtures::channel_members(2))),
    );
    let client = client_with(transport.clone());

    let response = client
        .channels()
        .get_channel_members("8a9f7sk3kjgezf4wp8bcdef123", 3, 50, "")
        .await
        .unwrap();
    assert_eq!(response.body.unwrap().len(), 2);

    let url = transport.last_request().unwrap().url;
    assert!(url.ends_with("/channels/8a9f7sk3kjgezf4wp8bcdef123/members?page=3&per_page=50"));
}

#[tokio::test]
async fn test_get_team_by_name_route() {
    let transport =
        Arc::new(MockHttpTransport::new().add_response(MockResponse::json(&fixtures::team())));
    let client = client_with(transport.clone());

    let team = client
        .teams()
        .get_team_by_name("core", "")
        .await
        .unwrap()
        .body
        .unwrap();
    assert_eq!(team.name, "core");
    assert_eq!(
        transport.last_request().unwrap().url,
        "http://localhost:8065/api/v4/teams/name/core"
    );
}

#[tokio::test]
async fn test_thread_follow_uses_put_and_delete() {
    let transport = Arc::new(
        MockHttpTransport::new()
            .add_responses([MockResponse::ok(""), MockResponse::ok("")]),
    );
    let client = client_with(transport.clone());

    client
        .threads()
        .update_thread_follow("u1", "t1", "p1", true)
        .await
        .unwrap();
    client
        .threads()
        .update_thread_follow("u1", "t1", "p1", false)
        .await
        .unwrap();

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(
        requests[0].url,
        "http://localhost:8065/api/v4/users/u1/teams/t1/threads/p1/following"
    );
}

#[tokio::test]
async fn test_bulk_follow_best_effort_continues_past_failures() {
    let transport = Arc::new(MockHttpTransport::new().add_responses([
        MockResponse::json(&fixtures::channel()),
        MockResponse::json(&fixtures::channel_members(3)),
        MockResponse::ok(""),
        MockResponse::app_error(403, "api.context.permissions.app_error", "denied"),
        MockResponse::ok(""),
    ]));
    let client = client_with(transport.clone());

    client
        .threads()
        .update_thread_follow_for_channel_members(
            "8a9f7sk3kjgezf4wp8bcdef123",
            "p0stid5m3d93e3yzk9yijs1hw1",
            true,
            FollowMode::BestEffort,
        )
        .await
        .unwrap();

    // channel + members + one follow call per member
    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 5);
    assert!(requests[1].url.contains("members?page=0&per_page=200"));
    assert!(requests[2]
        .url
        .contains("/users/member00m3d93e3yzk9yijs1hw/teams/qe93kf8fg7y18k8rjebc6h5nhy/threads/"));
}

#[tokio::test]
async fn test_bulk_follow_fail_fast_stops_at_first_failure() {
    let transport = Arc::new(MockHttpTransport::new().add_responses([
        MockResponse::json(&fixtures::channel()),
        MockResponse::json(&fixtures::channel_members(3)),
        MockResponse::ok(""),
        MockResponse::app_error(403, "api.context.permissions.app_error", "denied"),
        MockResponse::ok(""),
    ]));
    let client = client_with(transport.clone());

    let err = client
        .threads()
        .update_thread_follow_for_channel_members(
            "8a9f7sk3kjgezf4wp8bcdef123",
            "p0stid5m3d93e3yzk9yijs1hw1",
            true,
            FollowMode::FailFast,
        )
        .await
        .unwrap_err();
    assert!(err.is_api_error());

    // The third member is never attempted.
    assert_eq!(transport.request_count(), 4);
    assert_eq!(transport.remaining_responses(), 1);
}
