use crate::de::null_as_default;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

/// The slice of a track object the saved-tracks listing needs.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    /// Never inspected, kept as raw JSON.
    pub album: serde_json::Value,
    #[serde(deserialize_with = "null_as_default")]
    pub artists: Vec<Artist>,
}

/// Simplified artist object. `href`, `id` and `uri` are null for local files.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    #[serde(deserialize_with = "null_as_default")]
    pub external_urls: HashMap<String, String>,
    pub href: Option<String>,
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub type_field: String,
    pub uri: Option<String>,
}
