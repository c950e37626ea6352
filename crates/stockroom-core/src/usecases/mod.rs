//! # Use Cases
//!
//! Application operations that orchestrate the [`Product`](crate::Product)
//! entity through the [`ProductGateway`](crate::ProductGateway) port.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  caller ──► UseCase::execute(input)                                    │
//! │                  │                                                      │
//! │                  ├── CreateProduct: Product::create ──► gateway.save    │
//! │                  │                                                      │
//! │                  └── ListProduct:   gateway.list_all ──► ProductOutput  │
//! │                  │                                                      │
//! │  caller ◄── Output DTO  (or CoreError::Persistence, never retried)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Use cases keep no state between calls and take no locks. Two concurrent
//! `execute` calls may reach the gateway in any order.

pub mod create_product;
pub mod list_product;

use async_trait::async_trait;

use crate::error::CoreResult;

/// A single application operation with typed input and output.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send;
    type Output: Send;

    /// Runs the operation once.
    async fn execute(&self, input: Self::Input) -> CoreResult<Self::Output>;
}
