//! Diesel models representing exhibitions.

use diesel::prelude::*;

use crate::domain::exhibition::Exhibition as DomainExhibition;
use crate::domain::types::TypeConstraintError;
use crate::models::museum::Museum;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::exhibitions)]
#[diesel(belongs_to(Museum, foreign_key = museum_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::exhibition::Exhibition`].
pub struct Exhibition {
    pub id: String,
    pub museum_id: String,
    pub name: String,
    pub description: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::exhibitions)]
/// Insertable form of [`Exhibition`].
pub struct NewExhibition<'a> {
    pub id: String,
    pub museum_id: String,
    pub name: &'a str,
    pub description: &'a str,
}

impl TryFrom<Exhibition> for DomainExhibition {
    type Error = TypeConstraintError;

    fn try_from(exhibition: Exhibition) -> Result<Self, Self::Error> {
        Ok(Self {
            id: exhibition.id.parse()?,
            museum_id: exhibition.museum_id.parse()?,
            name: exhibition.name,
            description: exhibition.description,
        })
    }
}
