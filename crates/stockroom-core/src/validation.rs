//! # Validation Module
//!
//! Opt-in input rules for product creation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (CLI, transport adapter)                              │
//! │  └── Type validation (parsing, deserialization)                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: CreateProductUseCase                                         │
//! │  └── THIS MODULE, only when input validation is switched on            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store (SQLite)                                               │
//! │  ├── NOT NULL constraints                                              │
//! │  └── PRIMARY KEY on id                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The entity itself never calls into this module: `Product::create`
//! trusts its arguments.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{validate_price, validate_product_name};
//!
//! assert!(validate_product_name("Widget").is_ok());
//! assert!(validate_product_name("   ").is_err());
//! assert!(validate_price(9.99).is_ok());
//! assert!(validate_price(-1.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - At most [`MAX_PRODUCT_NAME_LEN`] characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
