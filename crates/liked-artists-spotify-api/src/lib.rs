pub mod bearer_token;
mod de;
pub mod endpoints;
pub mod fetch;
pub mod get_saved_tracks;
pub mod saved_tracks;
pub mod token;
pub mod token_source;
pub mod track;
pub mod auth {
    pub mod client_credentials;
}
#[cfg(any(test, feature = "test-server"))]
pub mod test_server;

