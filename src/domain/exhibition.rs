use serde::Serialize;

use crate::domain::types::{ExhibitionId, MuseumId};

/// An exhibition hosted by a museum.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exhibition {
    pub id: ExhibitionId,
    pub museum_id: MuseumId,
    pub name: String,
    pub description: String,
}
