use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        museum::{Museum, NewMuseum, UpdateMuseum},
        types::MuseumId,
    },
    pagination::PageRequest,
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod museum;

/// Filter and paging options for [`MuseumReader::list_museums`].
///
/// Every supplied filter narrows the result; filters left as `None` add no
/// restriction.
#[derive(Debug, Clone, Default)]
pub struct MuseumListQuery {
    /// Substring the museum name must contain.
    pub name: Option<String>,
    /// Substring the museum city must contain.
    pub city: Option<String>,
    /// Exclusive upper bound on the stored founding year.
    pub founded_before: Option<i32>,
    pub pagination: Option<PageRequest>,
}

impl MuseumListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn founded_before(mut self, year: i32) -> Self {
        self.founded_before = Some(year);
        self
    }

    pub fn paginate(mut self, request: PageRequest) -> Self {
        self.pagination = Some(request);
        self
    }
}

pub trait MuseumReader {
    /// Loads a museum with its artworks and exhibitions.
    fn get_museum_by_id(&self, id: &MuseumId) -> RepositoryResult<Option<Museum>>;
    /// Returns the total number of matches and the requested page, ordered by id.
    fn list_museums(&self, query: MuseumListQuery) -> RepositoryResult<(u64, Vec<Museum>)>;
}

pub trait MuseumWriter {
    fn create_museum(&self, new_museum: &NewMuseum) -> RepositoryResult<Museum>;
    fn update_museum(&self, id: &MuseumId, updates: &UpdateMuseum) -> RepositoryResult<Museum>;
    /// Removes the museum together with its artworks and exhibitions.
    fn delete_museum(&self, id: &MuseumId) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
