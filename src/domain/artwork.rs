use serde::Serialize;

use crate::domain::types::{ArtworkId, MuseumId};

/// An artwork held by a museum.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: ArtworkId,
    pub museum_id: MuseumId,
    pub name: String,
    pub year: i32,
    pub description: String,
}
