//! Repository implementation for museums.

use diesel::sqlite::{Sqlite, SqliteConnection};
use diesel::{Connection, prelude::*};

use crate::{
    domain::{
        museum::{Museum, NewMuseum, UpdateMuseum},
        types::MuseumId,
    },
    models::{
        artwork::Artwork as DbArtwork,
        exhibition::Exhibition as DbExhibition,
        museum::{Museum as DbMuseum, NewMuseum as DbNewMuseum, UpdateMuseum as DbUpdateMuseum},
    },
    repository::{
        DieselRepository, MuseumListQuery, MuseumReader, MuseumWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{artworks, exhibitions, museums},
};

/// Builds a `LIKE` pattern matching any value that contains `value` literally.
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Applies the query's filters as a conjunction. Paging is left to the caller.
fn filtered(query: &MuseumListQuery) -> museums::BoxedQuery<'static, Sqlite> {
    let mut items = museums::table.into_boxed();

    if let Some(name) = &query.name {
        items = items.filter(museums::name.like(contains_pattern(name)).escape('\\'));
    }
    if let Some(city) = &query.city {
        items = items.filter(museums::city.like(contains_pattern(city)).escape('\\'));
    }
    if let Some(year) = query.founded_before {
        items = items.filter(museums::founded_before.lt(year));
    }

    items
}

fn to_sql_count(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Loads artworks and exhibitions for `rows` and assembles domain museums in the same order.
fn with_relations(
    conn: &mut SqliteConnection,
    rows: Vec<DbMuseum>,
) -> RepositoryResult<Vec<Museum>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let artworks = DbArtwork::belonging_to(&rows)
        .select(DbArtwork::as_select())
        .order(artworks::id.asc())
        .load::<DbArtwork>(conn)?
        .grouped_by(&rows);

    let exhibitions = DbExhibition::belonging_to(&rows)
        .select(DbExhibition::as_select())
        .order(exhibitions::id.asc())
        .load::<DbExhibition>(conn)?
        .grouped_by(&rows);

    rows.into_iter()
        .zip(artworks)
        .zip(exhibitions)
        .map(|((museum, artworks), exhibitions)| {
            museum
                .into_domain(artworks, exhibitions)
                .map_err(RepositoryError::from)
        })
        .collect()
}

impl MuseumReader for DieselRepository {
    fn get_museum_by_id(&self, id: &MuseumId) -> RepositoryResult<Option<Museum>> {
        let mut conn = self.conn()?;

        let row = museums::table
            .find(id.to_string())
            .first::<DbMuseum>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(with_relations(&mut conn, vec![row])?.pop()),
            None => Ok(None),
        }
    }

    fn list_museums(&self, query: MuseumListQuery) -> RepositoryResult<(u64, Vec<Museum>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered(&query).count().get_result(&mut conn)?;

        let mut items = filtered(&query).order(museums::id.asc());
        if let Some(pagination) = query.pagination {
            items = items
                .limit(to_sql_count(pagination.limit))
                .offset(to_sql_count(pagination.offset()));
        }
        let rows = items.load::<DbMuseum>(&mut conn)?;

        let museums = with_relations(&mut conn, rows)?;

        Ok((u64::try_from(total).unwrap_or_default(), museums))
    }
}

impl MuseumWriter for DieselRepository {
    fn create_museum(&self, new_museum: &NewMuseum) -> RepositoryResult<Museum> {
        let mut conn = self.conn()?;

        let insertable = DbNewMuseum::new(MuseumId::new().to_string(), new_museum);

        let row = diesel::insert_into(museums::table)
            .values(&insertable)
            .get_result::<DbMuseum>(&mut conn)?;

        Ok(row.into_domain(Vec::new(), Vec::new())?)
    }

    fn update_museum(&self, id: &MuseumId, updates: &UpdateMuseum) -> RepositoryResult<Museum> {
        // Diesel rejects an empty changeset, so a no-op update is a plain read.
        if updates.is_empty() {
            return self
                .get_museum_by_id(id)?
                .ok_or(RepositoryError::NotFound);
        }

        let mut conn = self.conn()?;
        let changes: DbUpdateMuseum = updates.into();

        let row = diesel::update(museums::table.find(id.to_string()))
            .set(&changes)
            .get_result::<DbMuseum>(&mut conn)?;

        with_relations(&mut conn, vec![row])?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    fn delete_museum(&self, id: &MuseumId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        let id = id.to_string();

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(artworks::table.filter(artworks::museum_id.eq(id.as_str())))
                .execute(conn)?;
            diesel::delete(exhibitions::table.filter(exhibitions::museum_id.eq(id.as_str())))
                .execute(conn)?;

            let deleted = diesel::delete(museums::table.find(id.as_str())).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}
