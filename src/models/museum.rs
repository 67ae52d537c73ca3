//! Diesel models representing museums.

use diesel::prelude::*;

use crate::domain::artwork::Artwork as DomainArtwork;
use crate::domain::exhibition::Exhibition as DomainExhibition;
use crate::domain::museum::{
    Museum as DomainMuseum, NewMuseum as DomainNewMuseum, UpdateMuseum as DomainUpdateMuseum,
};
use crate::domain::types::{CityName, FoundingYear, MuseumName, TypeConstraintError};
use crate::models::artwork::Artwork;
use crate::models::exhibition::Exhibition;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::museums)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::museum::Museum`].
pub struct Museum {
    pub id: String,
    pub name: String,
    pub city: String,
    pub founded_before: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::museums)]
/// Insertable form of [`Museum`].
pub struct NewMuseum<'a> {
    pub id: String,
    pub name: &'a str,
    pub city: &'a str,
    pub founded_before: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::museums)]
/// Partial update of a [`Museum`] row; `None` columns are left untouched.
pub struct UpdateMuseum<'a> {
    pub name: Option<&'a str>,
    pub city: Option<&'a str>,
    pub founded_before: Option<i32>,
}

impl Museum {
    /// Builds the domain museum from this row and its already loaded relations.
    pub fn into_domain(
        self,
        artworks: Vec<Artwork>,
        exhibitions: Vec<Exhibition>,
    ) -> Result<DomainMuseum, TypeConstraintError> {
        Ok(DomainMuseum {
            id: self.id.parse()?,
            name: MuseumName::new(self.name)?,
            city: CityName::new(self.city)?,
            founded_before: FoundingYear::new(self.founded_before)?,
            artworks: artworks
                .into_iter()
                .map(DomainArtwork::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            exhibitions: exhibitions
                .into_iter()
                .map(DomainExhibition::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl<'a> NewMuseum<'a> {
    pub fn new(id: String, museum: &'a DomainNewMuseum) -> Self {
        Self {
            id,
            name: museum.name.as_str(),
            city: museum.city.as_str(),
            founded_before: museum.founded_before.get(),
        }
    }
}

impl<'a> From<&'a DomainUpdateMuseum> for UpdateMuseum<'a> {
    fn from(updates: &'a DomainUpdateMuseum) -> Self {
        Self {
            name: updates.name.as_ref().map(|name| name.as_str()),
            city: updates.city.as_ref().map(|city| city.as_str()),
            founded_before: updates.founded_before.map(FoundingYear::get),
        }
    }
}
