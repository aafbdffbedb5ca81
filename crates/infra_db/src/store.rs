//! PostgreSQL ledger store adapter
//!
//! Each ledger key is one row of `ledger_state`. Versions start at 1 and
//! increase by one per write. Conditional writes are single statements:
//! an insert that does nothing on conflict when the key must be absent,
//! and an update guarded by the expected version otherwise. Zero affected
//! rows means another writer got there first.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::{debug, instrument, warn};

use core_kernel::{
    DomainPort, HealthCheckResult, HealthCheckable, LedgerStore, PortError, StoredValue, Version,
};

use crate::error::DatabaseError;

const ADAPTER_ID: &str = "postgres-ledger-store";

/// PostgreSQL-backed implementation of the `LedgerStore` port
#[derive(Debug, Clone)]
pub struct PostgresLedgerStore {
    pool: PgPool,
}

impl PostgresLedgerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn current_version(&self, key: &str) -> Result<Option<Version>, DatabaseError> {
        let row = sqlx::query("SELECT version FROM ledger_state WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| to_version(key, row.try_get("version")?))
            .transpose()
    }
}

fn to_version(key: &str, raw: i64) -> Result<Version, DatabaseError> {
    Version::try_from(raw).map_err(|_| DatabaseError::InvalidVersion {
        key: key.to_string(),
        version: raw,
    })
}

fn to_db_version(key: &str, version: Version) -> Result<i64, DatabaseError> {
    i64::try_from(version).map_err(|_| DatabaseError::InvalidVersion {
        key: key.to_string(),
        version: i64::MAX,
    })
}

fn map_sqlx(err: sqlx::Error) -> PortError {
    DatabaseError::from(&err).into()
}

impl DomainPort for PostgresLedgerStore {}

#[async_trait]
impl HealthCheckable for PostgresLedgerStore {
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => HealthCheckResult::healthy(ADAPTER_ID, start.elapsed().as_millis() as u64),
            Err(e) => HealthCheckResult::unhealthy(ADAPTER_ID, format!("Database error: {}", e)),
        }
    }
}

#[async_trait]
impl LedgerStore for PostgresLedgerStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<StoredValue>, PortError> {
        let row = sqlx::query("SELECT value, version FROM ledger_state WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let Some(row) = row else {
            debug!("Key not present");
            return Ok(None);
        };

        let bytes: Vec<u8> = row.try_get("value").map_err(map_sqlx)?;
        let version = to_version(key, row.try_get("version").map_err(map_sqlx)?)?;
        Ok(Some(StoredValue { bytes, version }))
    }

    #[instrument(skip(self, value), fields(len = value.len()))]
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<Version, PortError> {
        let version: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO ledger_state (key, value, version, updated_at)
            VALUES ($1, $2, 1, now())
            ON CONFLICT (key) DO UPDATE
                SET value = EXCLUDED.value,
                    version = ledger_state.version + 1,
                    updated_at = now()
            RETURNING version
            "#,
        )
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(to_version(key, version)?)
    }

    #[instrument(skip(self, value), fields(len = value.len()))]
    async fn put_if_version(
        &self,
        key: &str,
        value: Vec<u8>,
        expected: Option<Version>,
    ) -> Result<Version, PortError> {
        let written: Option<i64> = match expected {
            None => sqlx::query_scalar(
                r#"
                INSERT INTO ledger_state (key, value, version, updated_at)
                VALUES ($1, $2, 1, now())
                ON CONFLICT (key) DO NOTHING
                RETURNING version
                "#,
            )
            .bind(key)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?,
            Some(version) => sqlx::query_scalar(
                r#"
                UPDATE ledger_state
                SET value = $2, version = version + 1, updated_at = now()
                WHERE key = $1 AND version = $3
                RETURNING version
                "#,
            )
            .bind(key)
            .bind(value)
            .bind(to_db_version(key, version)?)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?,
        };

        match written {
            Some(version) => Ok(to_version(key, version)?),
            None => {
                let actual = self.current_version(key).await?;
                warn!(?expected, ?actual, "Conditional write lost a race");
                Err(PortError::conflict(key, expected, actual))
            }
        }
    }
}
