//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::museum::{Museum, NewMuseum, UpdateMuseum};
use crate::domain::types::MuseumId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{MuseumListQuery, MuseumReader, MuseumWriter};

mock! {
    pub Repository {}

    impl MuseumReader for Repository {
        fn get_museum_by_id(&self, id: &MuseumId) -> RepositoryResult<Option<Museum>>;
        fn list_museums(&self, query: MuseumListQuery) -> RepositoryResult<(u64, Vec<Museum>)>;
    }

    impl MuseumWriter for Repository {
        fn create_museum(&self, new_museum: &NewMuseum) -> RepositoryResult<Museum>;
        fn update_museum(&self, id: &MuseumId, updates: &UpdateMuseum) -> RepositoryResult<Museum>;
        fn delete_museum(&self, id: &MuseumId) -> RepositoryResult<()>;
    }
}
