use crate::bearer_token::BearerToken;
use crate::endpoints::Endpoints;
use crate::token::Token;
use eyre::Result;
use tracing::debug;

/// An application's own id and secret, exchanged for an app-only token.
#[derive(Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> ClientCredentials {
        ClientCredentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

/// https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow
pub async fn get_bearer_token_via_client_credentials(
    client: &reqwest::Client,
    credentials: &ClientCredentials,
    endpoints: &Endpoints,
) -> Result<BearerToken> {
    debug!("Getting bearer token via client credentials");

    let resp = client
        .post(endpoints.token.as_str())
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?
        .json::<Token>()
        .await?;

    debug!("Access Token: len={}", resp.access_token.len());
    debug!("Token type: {}", resp.token_type);
    debug!("Expires in: {}s", resp.expires_in);

    Ok(BearerToken(resp.access_token))
}
