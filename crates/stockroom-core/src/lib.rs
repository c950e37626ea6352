//! # stockroom-core: Catalog Domain for Stockroom
//!
//! This crate owns the product catalog's behavioural contract: the
//! [`Product`] entity, the [`ProductGateway`] persistence port and the two
//! use cases that orchestrate them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stockroom-cli (wiring)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐   │   │
//! │  │   │   usecases   │──►│   product    │   │     gateway      │   │   │
//! │  │   │ CreateProduct│   │   Product    │   │  ProductGateway  │   │   │
//! │  │   │ ListProduct  │──────────────────────►│  (trait / port)  │   │   │
//! │  │   └──────────────┘   └──────────────┘   └────────▲─────────┘   │   │
//! │  │                                                  │             │   │
//! │  └──────────────────────────────────────────────────┼─────────────┘   │
//! │                                                     │ implements       │
//! │  ┌──────────────────────────────────────────────────┴─────────────┐   │
//! │  │          stockroom-db (SQLite) / InMemoryProductGateway        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Identifiers and policies (ProductId, QuantityPolicy)
//! - [`product`] - The Product entity and its factory operations
//! - [`gateway`] - The persistence port
//! - [`memory`] - In-memory port implementation
//! - [`usecases`] - CreateProduct and ListProduct
//! - [`validation`] - Opt-in input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use stockroom_core::{
//!     CreateProductInput, CreateProductUseCase, InMemoryProductGateway, ListProductUseCase,
//!     UseCase,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let gateway = Arc::new(InMemoryProductGateway::new());
//! let create = CreateProductUseCase::new(gateway.clone());
//! let list = ListProductUseCase::new(gateway);
//!
//! let created = create
//!     .execute(CreateProductInput::new("Widget", 9.99))
//!     .await
//!     .unwrap();
//!
//! let listed = list.execute(()).await.unwrap();
//! assert_eq!(listed.products[0].id, created.id);
//! assert_eq!(listed.products[0].quantity, 0);
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod gateway;
pub mod memory;
pub mod product;
pub mod types;
pub mod usecases;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, PersistenceError, ValidationError};
pub use gateway::ProductGateway;
pub use memory::InMemoryProductGateway;
pub use product::{Product, ProductProps};
pub use types::{ProductId, QuantityPolicy};
pub use usecases::create_product::{
    CreateProductInput, CreateProductOutput, CreateProductUseCase,
};
pub use usecases::list_product::{
    ListProductOutput, ListProductUseCase, ProductOutput, ProductSummary,
};
pub use usecases::UseCase;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name when input validation is enabled.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
