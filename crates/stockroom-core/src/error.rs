//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError         - What a use case returns                       │
//! │  ├── ValidationError   - Opt-in input rule failures                    │
//! │  └── PersistenceError  - What the ProductGateway port returns          │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── DbError           - sqlx failures, converted into PersistenceError│
//! │                                                                         │
//! │  Flow: DbError → PersistenceError → CoreError::Persistence → caller    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Propagation
//! Use cases never retry and never swallow a [`PersistenceError`]. It reaches
//! the caller wrapped in [`CoreError::Persistence`] with its payload intact.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced by the entity's strict operations and by the use cases.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A strict quantity adjustment would drive the counter below zero.
    ///
    /// ## When This Occurs
    /// - `Product::adjust_quantity` under `QuantityPolicy::NonNegative`
    /// - The requested decrease is larger than the current quantity
    ///
    /// The permissive mutators never produce this error.
    #[error("Insufficient stock for {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        available: i64,
        requested: i64,
    },

    /// Input rejected by opt-in validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The persistence port failed. The inner error is the port's own.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

// =============================================================================
// Persistence Error
// =============================================================================

/// Failure reported by a [`ProductGateway`](crate::ProductGateway)
/// implementation.
///
/// ## Variant Guide
/// ```text
/// store unreachable, pool closed, timeout   → Unavailable
/// constraint violation (duplicate id, ...)  → Rejected
/// stored row cannot become a Product        → Corrupted
/// anything else                             → Internal
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("write rejected: {0}")]
    Rejected(String),

    #[error("stored record is corrupted: {0}")]
    Corrupted(String),

    #[error("internal store error: {0}")]
    Internal(String),
}

impl PersistenceError {
    /// Returns true when retrying later could succeed.
    ///
    /// The core never retries; this is for callers that want to.
    pub fn is_transient(&self) -> bool {
        matches!(self, PersistenceError::Unavailable(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only raised when a use case has validation switched on. By default the
/// core trusts its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value must be a finite number.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: ProductId::from("p-1"),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for p-1: available 3, requested 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_persistence_error_is_kept_intact() {
        let port_err = PersistenceError::Rejected("UNIQUE constraint failed: products.id".into());
        let core_err: CoreError = port_err.clone().into();

        match core_err {
            CoreError::Persistence(inner) => assert_eq!(inner, port_err),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_only_unavailable_is_transient() {
        assert!(PersistenceError::Unavailable("pool closed".into()).is_transient());
        assert!(!PersistenceError::Rejected("dup".into()).is_transient());
        assert!(!PersistenceError::Corrupted("bad row".into()).is_transient());
    }
}
