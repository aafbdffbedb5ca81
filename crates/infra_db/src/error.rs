//! Database error types

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Check constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A stored version does not fit the store's version type
    #[error("Invalid version {version} stored for {key}")]
    InvalidVersion { key: String, version: i64 },

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Generic SQL error
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        match self {
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted => true,
            DatabaseError::SqlError(err) => matches!(
                err,
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            ),
            _ => false,
        }
    }
}

/// Maps SQLx errors to specific variants by PostgreSQL error code
impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                match db_err.code().as_deref() {
                    Some("23505") => DatabaseError::DuplicateEntry(db_err.message().to_string()),
                    Some("23514") => {
                        DatabaseError::ConstraintViolation(db_err.message().to_string())
                    }
                    _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                }
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

impl From<DatabaseError> for PortError {
    fn from(err: DatabaseError) -> Self {
        let message = err.to_string();
        if err.is_connection_error() {
            PortError::Connection {
                message,
                source: Some(Box::new(err)),
            }
        } else {
            PortError::Internal {
                message,
                source: Some(Box::new(err)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_maps_to_connection() {
        let err = DatabaseError::from(&sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DatabaseError::PoolExhausted));

        let port: PortError = err.into();
        assert!(port.is_transient());
    }

    #[test]
    fn test_query_failure_maps_to_internal() {
        let port: PortError = DatabaseError::QueryFailed("syntax error".to_string()).into();
        assert!(matches!(port, PortError::Internal { .. }));
        assert!(!port.is_conflict());
    }
}
