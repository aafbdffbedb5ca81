//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types shared by every port in the
//! workspace. The only port today is the [`LedgerStore`](crate::store::LedgerStore),
//! with an in-memory adapter in this crate and a PostgreSQL adapter in
//! `infra_db`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Dispatch Layer                           │
//! │               (interface_api named operations)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │        AccountManager / PaymentProcessor / ClaimProcessor    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    LedgerStore port                          │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │  InMemoryLedger   │     │ PostgresLedger  │
//!         │      Store        │     │     Store       │
//!         └───────────────────┘     └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for port operations
///
/// Provides a unified error type that all store adapters must use.
#[derive(Debug, Error)]
pub enum PortError {
    /// A conditional write found a different version than expected
    #[error("Conflict on {key}: expected version {expected:?}, found {actual:?}")]
    Conflict {
        key: String,
        expected: Option<u64>,
        actual: Option<u64>,
    },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backing system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a Conflict error
    pub fn conflict(key: impl Into<String>, expected: Option<u64>, actual: Option<u64>) -> Self {
        PortError::Conflict {
            key: key.into(),
            expected,
            actual,
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. } | PortError::ServiceUnavailable { .. }
        )
    }

    /// Returns true if a conditional write lost a race
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so they can be shared across tasks.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    /// Builds a healthy result stamped with the current time
    pub fn healthy(adapter_id: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Healthy,
            latency_ms,
            message: None,
            checked_at: chrono::Utc::now(),
        }
    }

    /// Builds an unhealthy result carrying the failure message
    pub fn unhealthy(adapter_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Unhealthy,
            latency_ms: 0,
            message: Some(message.into()),
            checked_at: chrono::Utc::now(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == AdapterHealth::Healthy
    }
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_conflict() {
        let error = PortError::conflict("acct:alice", Some(1), Some(2));
        assert!(error.is_conflict());
        assert!(!error.is_transient());
        assert!(error.to_string().contains("acct:alice"));
    }

    #[test]
    fn test_port_error_transient() {
        let unavailable = PortError::ServiceUnavailable {
            service: "postgres".to_string(),
        };
        assert!(unavailable.is_transient());
        assert!(PortError::connection("refused").is_transient());
        assert!(!PortError::internal("boom").is_transient());
    }

    #[test]
    fn test_health_check_result_constructors() {
        assert!(HealthCheckResult::healthy("memory", 0).is_healthy());

        let down = HealthCheckResult::unhealthy("postgres", "timeout");
        assert_eq!(down.status, AdapterHealth::Unhealthy);
        assert_eq!(down.message.as_deref(), Some("timeout"));
    }
}
