//! Museum listing and CRUD services.

use crate::domain::museum::{Museum, MuseumFilters};
use crate::domain::types::MuseumId;
use crate::forms::museum::{MuseumForm, UpdateMuseumForm};
use crate::pagination::{PageRequest, Paginated};
use crate::repository::errors::RepositoryError;
use crate::repository::{MuseumListQuery, MuseumReader, MuseumWriter};
use crate::services::{ServiceError, ServiceResult};

pub const MUSEUM_NOT_FOUND: &str = "The museum with the given id was not found";

fn not_found() -> ServiceError {
    ServiceError::NotFound(MUSEUM_NOT_FOUND.to_string())
}

/// Ids that are not valid UUIDs can never match a stored museum.
fn parse_id(raw_id: &str) -> ServiceResult<MuseumId> {
    raw_id.parse().map_err(|_| not_found())
}

fn museum_error(action: &str, err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::NotFound => not_found(),
        other => {
            log::error!("Failed to {action}: {other}");
            ServiceError::from(other)
        }
    }
}

/// Returns one page of museums matching every supplied filter.
///
/// Absent or non-positive `page`/`limit` fall back to 1 and 10. Requesting a
/// page past the end yields an empty page, never an error.
pub fn list_museums<R>(repo: &R, filters: MuseumFilters) -> ServiceResult<Paginated<Museum>>
where
    R: MuseumReader + ?Sized,
{
    let request = PageRequest::normalize(filters.page, filters.limit);

    let query = MuseumListQuery {
        name: filters.name,
        city: filters.city,
        founded_before: filters.founded_before,
        pagination: Some(request),
    };

    let (total, museums) = repo
        .list_museums(query)
        .map_err(|err| museum_error("list museums", err))?;

    Ok(Paginated::new(museums, total, request))
}

/// Fetches a museum with its artworks and exhibitions.
pub fn get_museum<R>(repo: &R, raw_id: &str) -> ServiceResult<Museum>
where
    R: MuseumReader + ?Sized,
{
    let id = parse_id(raw_id)?;

    repo.get_museum_by_id(&id)
        .map_err(|err| museum_error("load museum", err))?
        .ok_or_else(not_found)
}

/// Validates the form and persists a new museum.
pub fn create_museum<R>(repo: &R, form: MuseumForm) -> ServiceResult<Museum>
where
    R: MuseumWriter + ?Sized,
{
    let new_museum = form.parse()?;

    let museum = repo
        .create_museum(&new_museum)
        .map_err(|err| museum_error("create museum", err))?;

    log::info!("Created museum {}", museum.id);
    Ok(museum)
}

/// Merges the supplied fields over an existing museum.
pub fn update_museum<R>(repo: &R, raw_id: &str, form: UpdateMuseumForm) -> ServiceResult<Museum>
where
    R: MuseumReader + MuseumWriter + ?Sized,
{
    let id = parse_id(raw_id)?;
    let updates = form.parse()?;

    // The existence check and the write are separate statements; a concurrent
    // delete in between surfaces as NotFound from the write.
    let existing = repo
        .get_museum_by_id(&id)
        .map_err(|err| museum_error("load museum", err))?
        .ok_or_else(not_found)?;

    if updates.is_empty() {
        return Ok(existing);
    }

    repo.update_museum(&id, &updates)
        .map_err(|err| museum_error("update museum", err))
}

/// Deletes a museum together with its artworks and exhibitions.
pub fn delete_museum<R>(repo: &R, raw_id: &str) -> ServiceResult<()>
where
    R: MuseumReader + MuseumWriter + ?Sized,
{
    let id = parse_id(raw_id)?;

    repo.get_museum_by_id(&id)
        .map_err(|err| museum_error("load museum", err))?
        .ok_or_else(not_found)?;

    repo.delete_museum(&id)
        .map_err(|err| museum_error("delete museum", err))?;

    log::info!("Deleted museum {id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CityName, FoundingYear, MuseumName};
    use crate::repository::mock::MockRepository;

    fn museum(name: &str, city: &str, founded_before: i32) -> Museum {
        Museum {
            id: MuseumId::new(),
            name: MuseumName::new(name).expect("valid name"),
            city: CityName::new(city).expect("valid city"),
            founded_before: FoundingYear::new(founded_before).expect("valid year"),
            artworks: vec![],
            exhibitions: vec![],
        }
    }

    #[test]
    fn list_applies_default_paging() {
        let mut repo = MockRepository::new();
        repo.expect_list_museums()
            .withf(|query| {
                query.pagination == Some(PageRequest { page: 1, limit: 10 })
                    && query.name.is_none()
                    && query.city.is_none()
                    && query.founded_before.is_none()
            })
            .times(1)
            .returning(|_| Ok((0, vec![])));

        let page = list_museums(&repo, MuseumFilters::default()).expect("should list");

        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.limit, 10);
        assert_eq!(page.meta.pages, 1);
    }

    #[test]
    fn list_normalizes_non_positive_paging() {
        let mut repo = MockRepository::new();
        repo.expect_list_museums()
            .withf(|query| query.pagination == Some(PageRequest { page: 1, limit: 10 }))
            .times(1)
            .returning(|_| Ok((0, vec![])));

        let filters = MuseumFilters::default().paginate(0, -4);
        let page = list_museums(&repo, filters).expect("should list");

        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.limit, 10);
    }

    #[test]
    fn list_forwards_every_filter() {
        let mut repo = MockRepository::new();
        repo.expect_list_museums()
            .withf(|query| {
                query.name.as_deref() == Some("Art")
                    && query.city.as_deref() == Some("Chi")
                    && query.founded_before == Some(1900)
            })
            .times(1)
            .returning(|_| Ok((1, vec![museum("Art Institute", "Chicago", 1893)])));

        let filters = MuseumFilters::default()
            .name("Art")
            .city("Chi")
            .founded_before(1900)
            .paginate(1, 10);
        let page = list_museums(&repo, filters).expect("should list");

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name.as_str(), "Art Institute");
        assert_eq!(page.meta.total, 1);
        assert_eq!(page.meta.pages, 1);
    }

    #[test]
    fn list_reports_page_count_from_total() {
        let mut repo = MockRepository::new();
        repo.expect_list_museums()
            .withf(|query| query.pagination == Some(PageRequest { page: 3, limit: 10 }))
            .times(1)
            .returning(|_| {
                let museums = (0..5)
                    .map(|i| museum(&format!("Museum {i}"), "Paris", 1800 + i))
                    .collect();
                Ok((25, museums))
            });

        let page = list_museums(&repo, MuseumFilters::default().paginate(3, 10))
            .expect("should list");

        assert_eq!(page.data.len(), 5);
        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.pages, 3);
    }

    #[test]
    fn list_past_last_page_is_empty_not_an_error() {
        let mut repo = MockRepository::new();
        repo.expect_list_museums()
            .times(1)
            .returning(|_| Ok((3, vec![])));

        let page = list_museums(&repo, MuseumFilters::default().paginate(7, 10))
            .expect("should list");

        assert!(page.data.is_empty());
        assert_eq!(page.meta.page, 7);
        assert_eq!(page.meta.pages, 1);
    }

    #[test]
    fn list_surfaces_storage_failures() {
        let mut repo = MockRepository::new();
        repo.expect_list_museums()
            .times(1)
            .returning(|_| Err(RepositoryError::ConnectionError("down".to_string())));

        let result = list_museums(&repo, MuseumFilters::default());

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }

    #[test]
    fn get_returns_not_found_for_unknown_id() {
        let mut repo = MockRepository::new();
        repo.expect_get_museum_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = get_museum(&repo, &MuseumId::new().to_string());

        match result {
            Err(ServiceError::NotFound(message)) => assert_eq!(message, MUSEUM_NOT_FOUND),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn get_with_malformed_id_skips_repository() {
        let mut repo = MockRepository::new();
        repo.expect_get_museum_by_id().times(0);

        let result = get_museum(&repo, "not-a-uuid");

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn get_returns_stored_museum() {
        let stored = museum("Louvre", "Paris", 1793);
        let id = stored.id;
        let mut repo = MockRepository::new();
        repo.expect_get_museum_by_id()
            .withf(move |requested| *requested == id)
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let found = get_museum(&repo, &id.to_string()).expect("should load");

        assert_eq!(found.id, id);
        assert_eq!(found.city.as_str(), "Paris");
    }

    #[test]
    fn create_rejects_invalid_form() {
        let mut repo = MockRepository::new();
        repo.expect_create_museum().times(0);
        let form = MuseumForm {
            name: " ".to_string(),
            city: "Paris".to_string(),
            founded_before: -1,
        };

        let result = create_museum(&repo, form);

        match result {
            Err(ServiceError::Validation(errors)) => assert!(errors.contains("name")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn create_persists_valid_form() {
        let mut repo = MockRepository::new();
        repo.expect_create_museum()
            .withf(|new_museum| {
                new_museum.name.as_str() == "Louvre" && new_museum.founded_before.get() == 1793
            })
            .times(1)
            .returning(|new_museum| {
                Ok(Museum {
                    id: MuseumId::new(),
                    name: new_museum.name.clone(),
                    city: new_museum.city.clone(),
                    founded_before: new_museum.founded_before,
                    artworks: vec![],
                    exhibitions: vec![],
                })
            });
        let form = MuseumForm {
            name: "Louvre".to_string(),
            city: "Paris".to_string(),
            founded_before: 1793,
        };

        let created = create_museum(&repo, form).expect("should create");

        assert_eq!(created.name.as_str(), "Louvre");
        assert!(created.artworks.is_empty());
    }

    #[test]
    fn update_missing_museum_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_museum_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_update_museum().times(0);
        let form = UpdateMuseumForm {
            name: Some("Renamed".to_string()),
            ..UpdateMuseumForm::default()
        };

        let result = update_museum(&repo, &MuseumId::new().to_string(), form);

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn update_merges_supplied_fields() {
        let stored = museum("Science Center", "Boston", 1950);
        let id = stored.id;
        let mut repo = MockRepository::new();
        let existing = stored.clone();
        repo.expect_get_museum_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update_museum()
            .withf(move |requested, updates| {
                *requested == id
                    && updates.city.as_ref().map(|c| c.as_str()) == Some("Cambridge")
                    && updates.name.is_none()
                    && updates.founded_before.is_none()
            })
            .times(1)
            .returning(move |_, updates| {
                let mut merged = stored.clone();
                updates.apply_to(&mut merged);
                Ok(merged)
            });
        let form = UpdateMuseumForm {
            city: Some("Cambridge".to_string()),
            ..UpdateMuseumForm::default()
        };

        let updated = update_museum(&repo, &id.to_string(), form).expect("should update");

        assert_eq!(updated.city.as_str(), "Cambridge");
        assert_eq!(updated.name.as_str(), "Science Center");
        assert_eq!(updated.founded_before.get(), 1950);
    }

    #[test]
    fn update_without_fields_returns_existing_record() {
        let stored = museum("Prado", "Madrid", 1819);
        let id = stored.id;
        let mut repo = MockRepository::new();
        let existing = stored.clone();
        repo.expect_get_museum_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update_museum().times(0);

        let result = update_museum(&repo, &id.to_string(), UpdateMuseumForm::default())
            .expect("should return existing");

        assert_eq!(result, stored);
    }

    #[test]
    fn update_race_with_delete_reports_not_found() {
        let stored = museum("Tate", "London", 1897);
        let mut repo = MockRepository::new();
        let existing = stored.clone();
        repo.expect_get_museum_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update_museum()
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));
        let form = UpdateMuseumForm {
            founded_before: Some(1900),
            ..UpdateMuseumForm::default()
        };

        let result = update_museum(&repo, &stored.id.to_string(), form);

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn delete_missing_museum_leaves_store_untouched() {
        let mut repo = MockRepository::new();
        repo.expect_get_museum_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_delete_museum().times(0);

        let result = delete_museum(&repo, &MuseumId::new().to_string());

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn delete_removes_existing_museum() {
        let stored = museum("Rijksmuseum", "Amsterdam", 1800);
        let id = stored.id;
        let mut repo = MockRepository::new();
        repo.expect_get_museum_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_delete_museum()
            .withf(move |requested| *requested == id)
            .times(1)
            .returning(|_| Ok(()));

        delete_museum(&repo, &id.to_string()).expect("should delete");
    }
}
