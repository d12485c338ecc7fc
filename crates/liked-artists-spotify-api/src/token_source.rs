use crate::auth::client_credentials::ClientCredentials;
use crate::auth::client_credentials::get_bearer_token_via_client_credentials;
use crate::bearer_token::BearerToken;
use crate::endpoints::Endpoints;
use eyre::Result;
use eyre::WrapErr;
use eyre::eyre;
use tracing::debug;
use tracing::info;

pub const TOKEN: &str = "TOKEN";
pub const CLIENT_ID: &str = "CLIENT_ID";
pub const CLIENT_SECRET: &str = "CLIENT_SECRET";

/// Where the bearer token for the run comes from.
pub enum TokenSource {
    /// A token supplied as-is. No format validation.
    Direct(BearerToken),
    ClientCredentials(ClientCredentials),
}

impl TokenSource {
    /// A supplied token wins; otherwise both client id and secret are needed.
    pub fn select(
        token: Option<&str>,
        client_id: Option<&str>,
        client_secret: Option<&str>,
    ) -> Result<TokenSource> {
        if let Some(token) = token {
            return Ok(TokenSource::Direct(BearerToken(token.to_string())));
        }
        match (client_id, client_secret) {
            (Some(id), Some(secret)) => Ok(TokenSource::ClientCredentials(ClientCredentials::new(
                id, secret,
            ))),
            (id, secret) => {
                let missing: Vec<&str> = [(CLIENT_ID, id), (CLIENT_SECRET, secret)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(key, _)| key)
                    .collect();
                Err(eyre!(
                    "No {} secret, and client credentials are incomplete (missing {})",
                    TOKEN,
                    missing.join(", ")
                ))
            }
        }
    }

    pub async fn bearer_token(
        &self,
        client: &reqwest::Client,
        endpoints: &Endpoints,
    ) -> Result<BearerToken> {
        match self {
            TokenSource::Direct(token) => {
                debug!("Using supplied bearer token, len={}", token.0.len());
                Ok(token.clone())
            }
            TokenSource::ClientCredentials(credentials) => {
                info!("Requesting bearer token via client credentials");
                get_bearer_token_via_client_credentials(client, credentials, endpoints)
                    .await
                    .wrap_err("Failed to obtain bearer token via client credentials")
            }
        }
    }
}
