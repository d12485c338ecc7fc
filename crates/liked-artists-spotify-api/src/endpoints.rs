use url::Url;

const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SPOTIFY_SAVED_TRACKS_URL: &str = "https://api.spotify.com/v1/me/tracks";

/// Where the token exchange and the saved-tracks request are sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub token: Url,
    pub saved_tracks: Url,
}

impl Endpoints {
    pub fn spotify() -> eyre::Result<Endpoints> {
        Ok(Endpoints {
            token: Url::parse(SPOTIFY_TOKEN_URL)?,
            saved_tracks: Url::parse(SPOTIFY_SAVED_TRACKS_URL)?,
        })
    }

    /// Serve both endpoints from a single origin, keeping Spotify's paths.
    pub fn at(base: &str) -> eyre::Result<Endpoints> {
        let base = Url::parse(base)?;
        Ok(Endpoints {
            token: base.join("/api/token")?,
            saved_tracks: base.join("/v1/me/tracks")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spotify_endpoints() -> eyre::Result<()> {
        let endpoints = Endpoints::spotify()?;
        assert_eq!(endpoints.token.as_str(), SPOTIFY_TOKEN_URL);
        assert_eq!(endpoints.saved_tracks.as_str(), SPOTIFY_SAVED_TRACKS_URL);
        Ok(())
    }

    #[test]
    fn endpoints_at_base_keep_spotify_paths() -> eyre::Result<()> {
        let endpoints = Endpoints::at("http://127.0.0.1:8888")?;
        assert_eq!(endpoints.token.as_str(), "http://127.0.0.1:8888/api/token");
        assert_eq!(
            endpoints.saved_tracks.as_str(),
            "http://127.0.0.1:8888/v1/me/tracks"
        );
        Ok(())
    }

    #[test]
    fn bad_base_is_rejected() {
        assert!(Endpoints::at("not a url").is_err());
    }
}
