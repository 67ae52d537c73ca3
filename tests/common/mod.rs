#![allow(dead_code)]

use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use museum_service::db::{DbPool, establish_connection_pool};
use museum_service::repository::DieselRepository;
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
///
/// The pool is dropped before the directory so no connection outlives the file.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 database path");
        let pool = establish_connection_pool(url).expect("create connection pool");

        {
            let mut pooled = pool.get().expect("get connection");
            let conn: &mut SqliteConnection = &mut pooled;
            conn.run_pending_migrations(MIGRATIONS)
                .expect("run migrations");
        }

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}
