use liked_artists_spotify_api::saved_tracks::Song;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeSet;

/// Every distinct artist name across the songs, in ascending byte order.
pub fn unique_artist_names(songs: &[Song]) -> Vec<String> {
    songs
        .iter()
        .flat_map(|song| &song.track.artists)
        .map(|artist| artist.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// JSON array of strings, indented by four spaces.
pub fn render_json(names: &[String]) -> eyre::Result<String> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    names.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use liked_artists_spotify_api::track::Artist;
    use liked_artists_spotify_api::track::Track;

    fn song(names: &[&str]) -> Song {
        Song {
            added_at: "2024-01-01T00:00:00Z".to_string(),
            track: Track {
                album: serde_json::Value::Null,
                artists: names
                    .iter()
                    .map(|name| Artist {
                        name: name.to_string(),
                        ..Default::default()
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn dedups_and_sorts() {
        let songs = vec![song(&["Bjork"]), song(&["Air"]), song(&["Air"])];
        assert_eq!(unique_artist_names(&songs), vec!["Air", "Bjork"]);
    }

    #[test]
    fn collects_every_artist_of_a_track() {
        let songs = vec![
            song(&["Massive Attack", "Elizabeth Fraser"]),
            song(&["Elizabeth Fraser", "Cocteau Twins"]),
        ];
        assert_eq!(
            unique_artist_names(&songs),
            vec!["Cocteau Twins", "Elizabeth Fraser", "Massive Attack"]
        );
    }

    #[test]
    fn empty_input() {
        assert!(unique_artist_names(&[]).is_empty());
    }

    #[test]
    fn track_without_artists_contributes_nothing() {
        let songs = vec![song(&[]), song(&["Air"]), song(&[])];
        assert_eq!(unique_artist_names(&songs), vec!["Air"]);
    }

    #[test]
    fn case_sensitive_byte_order() {
        let songs = vec![song(&["drake", "Drake", "Ólafur Arnalds", "ABBA", "abba"])];
        assert_eq!(
            unique_artist_names(&songs),
            vec!["ABBA", "Drake", "abba", "drake", "Ólafur Arnalds"]
        );
    }

    #[test]
    fn empty_name_sorts_first() {
        let songs = vec![song(&["Air", ""]), song(&[""])];
        assert_eq!(unique_artist_names(&songs), vec!["", "Air"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let songs = vec![song(&["Portishead", "Air"]), song(&["Air"])];
        assert_eq!(unique_artist_names(&songs), unique_artist_names(&songs));
    }

    #[test]
    fn renders_four_space_indented_array() -> eyre::Result<()> {
        let names = vec!["Air".to_string(), "Bjork".to_string()];
        assert_eq!(render_json(&names)?, "[\n    \"Air\",\n    \"Bjork\"\n]");
        Ok(())
    }

    #[test]
    fn renders_empty_array() -> eyre::Result<()> {
        assert_eq!(render_json(&[])?, "[]");
        Ok(())
    }

    #[test]
    fn rendered_json_parses_back_in_order() -> eyre::Result<()> {
        let songs = vec![song(&["Sigur Rós", "Air"]), song(&["\"Weird\" Al Yankovic"])];
        let names = unique_artist_names(&songs);

        let parsed: Vec<String> = serde_json::from_str(&render_json(&names)?)?;
        assert_eq!(parsed, names);
        Ok(())
    }
}
