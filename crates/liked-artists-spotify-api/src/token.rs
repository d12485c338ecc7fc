use serde::Deserialize;
use serde::Serialize;

/// Body returned by the accounts service token endpoint.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
}
