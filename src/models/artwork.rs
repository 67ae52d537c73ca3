//! Diesel models representing artworks.

use diesel::prelude::*;

use crate::domain::artwork::Artwork as DomainArtwork;
use crate::domain::types::TypeConstraintError;
use crate::models::museum::Museum;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::artworks)]
#[diesel(belongs_to(Museum, foreign_key = museum_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::artwork::Artwork`].
pub struct Artwork {
    pub id: String,
    pub museum_id: String,
    pub name: String,
    pub year: i32,
    pub description: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::artworks)]
/// Insertable form of [`Artwork`].
pub struct NewArtwork<'a> {
    pub id: String,
    pub museum_id: String,
    pub name: &'a str,
    pub year: i32,
    pub description: &'a str,
}

impl TryFrom<Artwork> for DomainArtwork {
    type Error = TypeConstraintError;

    fn try_from(artwork: Artwork) -> Result<Self, Self::Error> {
        Ok(Self {
            id: artwork.id.parse()?,
            museum_id: artwork.museum_id.parse()?,
            name: artwork.name,
            year: artwork.year,
            description: artwork.description,
        })
    }
}
