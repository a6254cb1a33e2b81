//! Tests for the Mattermost API client.


#[cfg(test)]
mod services_tests;
