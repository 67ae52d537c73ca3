//! Query and body forms accepted by the `/museums` routes.

use serde::Deserialize;
use validator::Validate;

use crate::domain::museum::{MuseumFilters, NewMuseum, UpdateMuseum};
use crate::domain::types::{CityName, FoundingYear, MuseumName};
use crate::forms::{FieldErrors, not_blank};

/// Query string of `GET /museums`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MuseumsQuery {
    /// Substring the city must contain.
    pub city: Option<String>,
    /// Substring the name must contain.
    pub name: Option<String>,
    /// Only museums founded strictly before this year.
    #[validate(range(min = 0, message = "must not be negative"))]
    pub founded_before: Option<i32>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<i64>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub limit: Option<i64>,
}

impl MuseumsQuery {
    /// Validates the query and converts it into listing filters.
    ///
    /// Empty `city`/`name` values are treated as absent.
    pub fn parse(self) -> Result<MuseumFilters, FieldErrors> {
        self.validate()?;

        Ok(MuseumFilters {
            city: self.city.filter(|city| !city.is_empty()),
            name: self.name.filter(|name| !name.is_empty()),
            founded_before: self.founded_before,
            page: self.page,
            limit: self.limit,
        })
    }
}

/// Body of `POST /museums`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MuseumForm {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub city: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub founded_before: i32,
}

impl MuseumForm {
    pub fn parse(self) -> Result<NewMuseum, FieldErrors> {
        self.validate()?;

        let name = MuseumName::new(self.name)
            .map_err(|err| FieldErrors::single("name", err.to_string()))?;
        let city =
            CityName::new(self.city).map_err(|err| FieldErrors::single("city", err.to_string()))?;
        let founded_before = FoundingYear::new(self.founded_before)
            .map_err(|err| FieldErrors::single("foundedBefore", err.to_string()))?;

        Ok(NewMuseum::new(name, city, founded_before))
    }
}

/// Body of `PUT /museums/{id}`. Absent fields keep their stored values.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMuseumForm {
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub city: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub founded_before: Option<i32>,
}

impl UpdateMuseumForm {
    pub fn parse(self) -> Result<UpdateMuseum, FieldErrors> {
        self.validate()?;

        let name = self
            .name
            .map(MuseumName::new)
            .transpose()
            .map_err(|err| FieldErrors::single("name", err.to_string()))?;
        let city = self
            .city
            .map(CityName::new)
            .transpose()
            .map_err(|err| FieldErrors::single("city", err.to_string()))?;
        let founded_before = self
            .founded_before
            .map(FoundingYear::new)
            .transpose()
            .map_err(|err| FieldErrors::single("foundedBefore", err.to_string()))?;

        Ok(UpdateMuseum {
            name,
            city,
            founded_before,
        })
    }
}
