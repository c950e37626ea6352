//! # Domain Types
//!
//! Small value types shared by the entity, the port and the use cases.
//!
//! ## Identity
//! A product's `id` is an opaque string. Fresh products get a UUID v4;
//! products rehydrated from storage keep whatever identifier the store
//! holds, even if it is not a UUID.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Product Id
// =============================================================================

/// Opaque, immutable product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Generates a fresh identifier (UUID v4).
    ///
    /// Uniqueness rests on UUID v4 collision resistance; nothing else
    /// deduplicates identifiers.
    pub fn generate() -> Self {
        ProductId(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the inner string.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        ProductId(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId(value.to_string())
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

// =============================================================================
// Quantity Policy
// =============================================================================

/// Rule applied by [`Product::adjust_quantity`](crate::Product::adjust_quantity).
///
/// ## Policies
/// ```text
/// Permissive   (default)  quantity may go negative, any delta accepted
/// NonNegative  (opt-in)   a decrease that leaves quantity < 0 is refused;
///                         increases are always accepted
/// ```
///
/// Chosen per call by the code doing the adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantityPolicy {
    #[default]
    Permissive,
    NonNegative,
}

// =============================================================================
// Unit Tests
// =============================================================================
