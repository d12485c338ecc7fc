mod artists;
mod settings;

use liked_artists_init::init;
use liked_artists_init::secrets::Secrets;
use liked_artists_spotify_api::endpoints::Endpoints;
use liked_artists_spotify_api::get_saved_tracks::get_saved_tracks;
use liked_artists_spotify_api::token_source::CLIENT_ID;
use liked_artists_spotify_api::token_source::CLIENT_SECRET;
use liked_artists_spotify_api::token_source::TOKEN;
use liked_artists_spotify_api::token_source::TokenSource;
use settings::Settings;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    init()?;

    let settings = Settings::from_env();
    let output = run(&settings, &Endpoints::spotify()?, &reqwest::Client::new()).await?;
    println!("{}", output);

    Ok(())
}

/// Secrets, token, saved tracks, artists: returns the JSON to print.
async fn run(
    settings: &Settings,
    endpoints: &Endpoints,
    client: &reqwest::Client,
) -> eyre::Result<String> {
    let secrets = Secrets::load(&settings.secrets_path)?;
    let source = TokenSource::select(
        secrets.get(TOKEN),
        secrets.get(CLIENT_ID),
        secrets.get(CLIENT_SECRET),
    )?;

    let bearer = source.bearer_token(client, endpoints).await?;
    let songs = get_saved_tracks(client, endpoints, &bearer).await?;

    let names = artists::unique_artist_names(&songs);
    info!("{} saved tracks, {} distinct artists", songs.len(), names.len());
    artists::render_json(&names)
}
