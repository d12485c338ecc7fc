use crate::bearer_token::BearerToken;
use crate::endpoints::Endpoints;
use crate::fetch::fetch;
use crate::saved_tracks::PagedResponse;
use crate::saved_tracks::Song;
use eyre::WrapErr;
use tracing::debug;
use tracing::warn;

/// https://developer.spotify.com/documentation/web-api/reference/get-users-saved-tracks
///
/// Reads the first page only; `next` is reported, not followed.
pub async fn get_saved_tracks(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    bearer: &BearerToken,
) -> eyre::Result<Vec<Song>> {
    debug!("Fetching saved tracks from {}", endpoints.saved_tracks);
    let page: PagedResponse<Song> = fetch(client, &endpoints.saved_tracks, bearer)
        .await
        .wrap_err("Failed to fetch saved tracks")?;

    if let Some(next) = &page.next {
        warn!(
            "Read {} of {} saved tracks; the next page ({}) is not requested",
            page.items.len(),
            page.total,
            next
        );
    }
    debug!("Fetched {} saved tracks", page.items.len());

    Ok(page.items)
}
