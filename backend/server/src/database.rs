//! # Case store
//!
//! One SQLite table of [`CaseReport`] rows, reached through a pooled handle owned by the
//! process entry point and passed to whoever needs it.
//!
//! - Append-only: rows are inserted and read, never updated.
//! - Every write is a single statement, so a report is either fully visible or absent.
//! - No locking beyond SQLite's own write serialization. [`CaseStore::wipe_all`] does not
//!   guard against inserts racing it.
//! - Dates are stored as `YYYY-MM-DD` text so lexical order is chronological order.
use std::{str::FromStr, time::Duration};

use chrono::NaiveDate;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
};
use tracing::info;

use crate::{error::StorageError, models::CaseReport};

const SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS cases (
        id TEXT PRIMARY KEY,
        disease TEXT NOT NULL,
        city TEXT NOT NULL,
        cases INTEGER NOT NULL,
        timestamp TEXT NOT NULL,
        lat REAL NOT NULL,
        lng REAL NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_timestamp ON cases(timestamp)",
    "CREATE INDEX IF NOT EXISTS idx_disease ON cases(disease)",
    "CREATE INDEX IF NOT EXISTS idx_city ON cases(city)",
];

const SELECT_CASES: &str = "SELECT id, disease, city, cases, timestamp, lat, lng, created_at FROM cases";

#[derive(Debug, Clone)]
pub struct CaseStore {
    pool: SqlitePool,
}

impl CaseStore {
    /// Opens the database, creating it if missing, and makes sure the schema exists.
    ///
    /// In-memory databases live inside a single connection, so their pool is pinned to one
    /// connection that is never recycled.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let in_memory = is_in_memory(database_url);

        let mut options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let mut pool_options = SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(3));

        if in_memory {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
            pool_options = pool_options.max_connections(max_connections.max(1));
        }

        let pool = pool_options.connect_with(options).await?;
        let store = Self { pool };
        store.migrate().await?;

        info!("Connected to {database_url}");
        Ok(store)
    }

    pub async fn in_memory() -> Result<Self, StorageError> {
        Self::connect("sqlite::memory:", 1).await
    }

    async fn migrate(&self) -> Result<(), StorageError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        Ok(())
    }

    pub async fn insert(&self, report: &CaseReport) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO cases (id, disease, city, cases, timestamp, lat, lng, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&report.id)
        .bind(&report.disease)
        .bind(&report.city)
        .bind(report.cases)
        .bind(report.timestamp)
        .bind(report.lat)
        .bind(report.lng)
        .bind(report.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Snapshot of every report, newest report date first.
    pub async fn list_all(&self) -> Result<Vec<CaseReport>, StorageError> {
        let query = format!("{SELECT_CASES} ORDER BY timestamp DESC, created_at DESC");

        Ok(sqlx::query_as::<_, CaseReport>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Reports dated within `[start, end]`, both ends inclusive, newest first.
    pub async fn list_by_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CaseReport>, StorageError> {
        let query = format!(
            "{SELECT_CASES} WHERE timestamp BETWEEN ? AND ? ORDER BY timestamp DESC, created_at DESC"
        );

        Ok(sqlx::query_as::<_, CaseReport>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Largest numeric report id on disk, so id generation can resume past it after a restart.
    pub async fn latest_id(&self) -> Result<Option<i64>, StorageError> {
        Ok(
            sqlx::query_scalar::<_, Option<i64>>("SELECT MAX(CAST(id AS INTEGER)) FROM cases")
                .fetch_one(&self.pool)
                .await?,
        )
    }

    /// Irreversibly deletes every report and compacts the file.
    pub async fn wipe_all(&self) -> Result<u64, StorageError> {
        let deleted = sqlx::query("DELETE FROM cases")
            .execute(&self.pool)
            .await?
            .rows_affected();

        sqlx::query("VACUUM").execute(&self.pool).await?;

        info!("Database reset, {deleted} reports removed");
        Ok(deleted)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
