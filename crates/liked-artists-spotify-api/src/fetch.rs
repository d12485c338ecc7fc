use crate::bearer_token::BearerToken;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

/// Authenticated GET decoded as JSON. Non-2xx statuses are errors.
pub async fn fetch<T>(
    client: &reqwest::Client,
    url: &Url,
    bearer: &BearerToken,
) -> eyre::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let response = client
        .get(url.as_str())
        .bearer_auth(&bearer.0)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?;
    debug!("GET {} -> {}", url, response.status());

    let body = response.error_for_status()?.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| eyre::Error::new(e).wrap_err(format!("Failed to deserialize:\n{}", body)))
}
