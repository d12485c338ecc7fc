use crate::de::null_as_default;
use crate::track::Track;
use serde::Deserialize;
use serde::Serialize;

/// Spotify's paging object. Only `items` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(default)]
    pub href: String,
    pub items: Vec<T>,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub total: i64,
}

/// A saved-track object: when it was liked, and the track itself.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    #[serde(default, deserialize_with = "null_as_default")]
    pub added_at: String,
    /// Null for items that are no longer available.
    #[serde(default, deserialize_with = "null_as_default")]
    pub track: Track,
}
