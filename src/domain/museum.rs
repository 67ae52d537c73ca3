use serde::Serialize;

use crate::domain::artwork::Artwork;
use crate::domain::exhibition::Exhibition;
use crate::domain::types::{CityName, FoundingYear, MuseumId, MuseumName};

/// A museum together with its eagerly loaded relations.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Museum {
    pub id: MuseumId,
    pub name: MuseumName,
    pub city: CityName,
    /// Founding year. The name mirrors the public API field.
    pub founded_before: FoundingYear,
    pub artworks: Vec<Artwork>,
    pub exhibitions: Vec<Exhibition>,
}

/// Data required to create a museum. Identity is assigned on insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMuseum {
    pub name: MuseumName,
    pub city: CityName,
    pub founded_before: FoundingYear,
}

impl NewMuseum {
    #[must_use]
    pub fn new(name: MuseumName, city: CityName, founded_before: FoundingYear) -> Self {
        Self {
            name,
            city,
            founded_before,
        }
    }
}

/// Partial update merged over a persisted museum. `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateMuseum {
    pub name: Option<MuseumName>,
    pub city: Option<CityName>,
    pub founded_before: Option<FoundingYear>,
}

impl UpdateMuseum {
    /// Returns `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.city.is_none() && self.founded_before.is_none()
    }

    /// Applies the supplied fields over `museum` in place.
    pub fn apply_to(&self, museum: &mut Museum) {
        if let Some(name) = &self.name {
            museum.name = name.clone();
        }
        if let Some(city) = &self.city {
            museum.city = city.clone();
        }
        if let Some(founded_before) = self.founded_before {
            museum.founded_before = founded_before;
        }
    }
}

/// Filters and raw paging input for the museum listing.
///
/// `page` and `limit` are kept unnormalized here; the listing service
/// replaces absent or non-positive values with the defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MuseumFilters {
    pub city: Option<String>,
    pub name: Option<String>,
    pub founded_before: Option<i32>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl MuseumFilters {
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn founded_before(mut self, year: i32) -> Self {
        self.founded_before = Some(year);
        self
    }

    pub fn paginate(mut self, page: i64, limit: i64) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }
}
