//! Service implementations for Mattermost API v4 endpoints.
//!
//! Each service module covers one resource family: users, teams, channels,
//! posts, and thread-follow state.

pub mod channels;
pub mod posts;
pub mod teams;
pub mod threads;
pub mod users;

pub use channels::ChannelsService;
pub use posts::PostsService;
pub use teams::TeamsService;
pub use threads::ThreadsService;
pub use users::UsersService;
