//! # Repository Module
//!
//! SQLite-backed implementations of the ports declared in `stockroom-core`.
//!
//! ```text
//! CreateProductUseCase / ListProductUseCase
//!       │
//!       │  Arc<dyn ProductGateway>
//!       ▼
//! ProductRepository
//! ├── save(&self, product)   → insert
//! └── list_all(&self)        → list
//!       │
//!       ▼
//! SQLite `products` table
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product storage

pub mod product;
