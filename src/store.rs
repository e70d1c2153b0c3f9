//! Persistence gateway: a pooled SQLite handle that runs every unit of work
//! inside its own transaction.

use actix_web::web;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{debug, info};

use crate::error::StoreError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

// Database connection pool type
pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

/// Enables foreign-key enforcement on every connection handed out by the pool.
/// SQLite keeps this setting per connection, so it cannot live in a migration.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

/// Handle to the clinic database, shared by all handlers through `web::Data`.
#[derive(Clone)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    /// Opens a pool against `database_url` (a SQLite file path).
    pub fn connect(database_url: &str, max_size: u32) -> Result<Self, StoreError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = r2d2::Pool::builder()
            .max_size(max_size)
            .connection_customizer(Box::new(SqlitePragmas))
            .build(manager)?;
        info!("opened database {database_url} (pool size {max_size})");
        Ok(Self { pool })
    }

    /// Applies any embedded migrations that have not run yet.
    pub fn migrate(&self) -> Result<(), StoreError> {
        let mut pooled = self.pool.get()?;
        let conn: &mut SqliteConnection = &mut pooled;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        for version in applied {
            info!("applied migration {version}");
        }
        Ok(())
    }

    /// Runs `work` in a transaction on the calling thread.
    ///
    /// The transaction commits when `work` returns `Ok` and rolls back on any
    /// error, so a failed request never leaves partial writes behind.
    pub fn run_blocking<F, T>(&self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError>,
    {
        let mut pooled = self.pool.get()?;
        let conn: &mut SqliteConnection = &mut pooled;
        conn.transaction(work)
    }

    /// Same as [`Store::run_blocking`], moved onto actix's blocking thread pool.
    pub async fn run<F, T>(&self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.clone();
        web::block(move || store.run_blocking(work)).await?
    }
}

/// Turns an update/delete row count into `NotFound` when nothing matched.
pub fn expect_row(entity: &'static str, id: i32, affected: usize) -> Result<(), StoreError> {
    if affected == 0 {
        debug!("{entity} {id}: no row affected");
        return Err(StoreError::NotFound { entity, id });
    }
    Ok(())
}
