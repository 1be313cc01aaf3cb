//! Boundary between the view logic and whatever keeps the records.
//!
//! Core code only ever sees the [`BrewStore`] trait. [`SqliteStore`] is
//! the one production implementation; tests substitute an in-memory fake.

use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppResult, StoreError};
use crate::models::brew::{BrewRecord, NewBrew};
use std::path::Path;

pub trait BrewStore {
    /// Persist one brew, returning the id the store assigned to it.
    fn append(&mut self, brew: &NewBrew) -> Result<i64, StoreError>;

    /// Every stored brew, newest first.
    fn load_all(&mut self) -> Result<Vec<BrewRecord>, StoreError>;
}

/// Production store: a single SQLite file.
pub struct SqliteStore {
    pub pool: DbPool,
}

impl SqliteStore {
    /// Open an existing database. Does NOT create anything: `init` is the
    /// explicit setup step, a missing file here is a user-facing error.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        if !Path::new(path).exists() {
            return Err(StoreError::Unavailable(format!(
                "database not found at {path}, run `brewlogger init` first"
            )));
        }
        let pool = DbPool::new(path)?;
        Ok(Self { pool })
    }

    /// Create the database file (if needed) and its schema. Only `init`
    /// calls this.
    pub fn create(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Write a line into the internal audit log.
    pub fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::audit(&self.pool.conn, operation, target, message)
    }
}

impl BrewStore for SqliteStore {
    fn append(&mut self, brew: &NewBrew) -> Result<i64, StoreError> {
        Ok(queries::insert_brew(&self.pool.conn, brew)?)
    }

    fn load_all(&mut self) -> Result<Vec<BrewRecord>, StoreError> {
        queries::load_all_brews(&self.pool.conn).map_err(|e| match e {
            rusqlite::Error::FromSqlConversionFailure(idx, _, src) => {
                StoreError::Malformed(format!("column {idx}: {src}"))
            }
            other => StoreError::Backend(other),
        })
    }
}
