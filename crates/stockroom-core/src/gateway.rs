//! # Product Gateway (Persistence Port)
//!
//! The contract through which the use cases store and retrieve products.
//!
//! ## Dependency Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   CreateProductUseCase ──┐                                              │
//! │                          ├──► Arc<dyn ProductGateway>  (this trait)     │
//! │   ListProductUseCase ────┘            ▲                                 │
//! │                                       │ implements                      │
//! │              ┌────────────────────────┼───────────────────────┐         │
//! │              │                        │                       │         │
//! │   InMemoryProductGateway    stockroom_db::ProductRepository   mocks     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The core depends only on this trait, never on a concrete store. One
//! gateway instance is shared (read-only) by every use case in a process.

use async_trait::async_trait;

use crate::error::PersistenceError;
use crate::product::Product;

/// Storage capability for products.
///
/// ## Contract
/// - `save` persists the product's full state, once per call. Duplicate
///   identifiers are the caller's concern; a store may reject them with
///   [`PersistenceError::Rejected`].
/// - `list_all` returns every stored product, materialized through
///   [`Product::reconstruct`]. No ordering is promised.
/// - Both fail with a [`PersistenceError`] when the store cannot complete
///   the operation. Cancellation and timeouts are the implementation's own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Persists a product's full state.
    async fn save(&self, product: &Product) -> Result<(), PersistenceError>;

    /// Returns every stored product.
    async fn list_all(&self) -> Result<Vec<Product>, PersistenceError>;
}
