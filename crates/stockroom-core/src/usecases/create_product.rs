//! # CreateProduct Use Case
//!
//! Builds a fresh [`Product`] and persists it through the gateway.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CreateProductInput { name, price }                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validation enabled? ── yes ──► validate name / price                   │
//! │       │                            └── fails → CoreError::Validation    │
//! │       ▼                                (save is NOT called)             │
//! │  Product::create(name, price)   ← fresh id, quantity = 0               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  gateway.save(&product)         ← exactly once                         │
//! │       │                                                                 │
//! │       ├── Err(e) → CoreError::Persistence(e), no id returned           │
//! │       ▼                                                                 │
//! │  CreateProductOutput { id }                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No duplicate check against the existing catalog is performed.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::gateway::ProductGateway;
use crate::product::Product;
use crate::usecases::UseCase;
use crate::validation::{validate_price, validate_product_name};

/// Input for [`CreateProductUseCase`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    pub name: String,
    pub price: f64,
}

impl CreateProductInput {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        CreateProductInput {
            name: name.into(),
            price,
        }
    }
}

/// Output of [`CreateProductUseCase`]: the new product's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductOutput {
    pub id: String,
}

/// Creates a product and stores it.
#[derive(Clone)]
pub struct CreateProductUseCase {
    gateway: Arc<dyn ProductGateway>,
    validate_input: bool,
}

impl CreateProductUseCase {
    /// Creates the use case over a shared gateway. Input validation is off.
    pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
        CreateProductUseCase {
            gateway,
            validate_input: false,
        }
    }

    /// Switches name/price validation on or off.
    ///
    /// When on, an empty name or a negative / non-finite price is refused
    /// before anything reaches the gateway.
    pub fn with_input_validation(mut self, enabled: bool) -> Self {
        self.validate_input = enabled;
        self
    }

    fn present(product: &Product) -> CreateProductOutput {
        CreateProductOutput {
            id: product.id().to_string(),
        }
    }
}

#[async_trait]
impl UseCase for CreateProductUseCase {
    type Input = CreateProductInput;
    type Output = CreateProductOutput;

    #[instrument(name = "create_product", skip(self, input), fields(name = %input.name))]
    async fn execute(&self, input: CreateProductInput) -> CoreResult<CreateProductOutput> {
        if self.validate_input {
            validate_product_name(&input.name)?;
            validate_price(input.price)?;
        }

        let product = Product::create(input.name, input.price);

        if let Err(err) = self.gateway.save(&product).await {
            warn!(product_id = %product.id(), error = %err, "Saving new product failed");
            return Err(err.into());
        }

        info!(product_id = %product.id(), "Product created");
        Ok(Self::present(&product))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, PersistenceError, ValidationError};
    use crate::gateway::MockProductGateway;
    use crate::memory::InMemoryProductGateway;

    #[tokio::test]
    async fn test_creates_product_and_returns_its_id() {
        let gateway = Arc::new(InMemoryProductGateway::new());
        let use_case = CreateProductUseCase::new(gateway.clone());

        let output = use_case
            .execute(CreateProductInput::new("Widget", 9.99))
            .await
            .unwrap();

        assert!(!output.id.is_empty());

        let stored = gateway.list_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id().as_str(), output.id);
        assert_eq!(stored[0].name(), "Widget");
        assert_eq!(stored[0].price(), 9.99);
        assert_eq!(stored[0].quantity(), 0);
    }

    #[tokio::test]
    async fn test_repeated_creates_get_distinct_ids() {
        let gateway = Arc::new(InMemoryProductGateway::new());
        let use_case = CreateProductUseCase::new(gateway.clone());

        let first = use_case
            .execute(CreateProductInput::new("Product 1", 10.5))
            .await
            .unwrap();
        let second = use_case
            .execute(CreateProductInput::new("Product 2", 20.5))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(gateway.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_saves_exactly_once_with_zero_quantity() {
        let mut gateway = MockProductGateway::new();
        gateway
            .expect_save()
            .withf(|product: &Product| product.quantity() == 0 && product.name() == "Widget")
            .times(1)
            .returning(|_| Ok(()));
        gateway.expect_list_all().never();

        let use_case = CreateProductUseCase::new(Arc::new(gateway));
        let output = use_case
            .execute(CreateProductInput::new("Widget", 9.99))
            .await
            .unwrap();

        assert!(!output.id.is_empty());
    }

    #[tokio::test]
    async fn test_save_failure_is_surfaced_unchanged() {
        let mut gateway = MockProductGateway::new();
        gateway
            .expect_save()
            .times(1)
            .returning(|_| Err(PersistenceError::Unavailable("connection refused".into())));

        let use_case = CreateProductUseCase::new(Arc::new(gateway));
        let result = use_case
            .execute(CreateProductInput::new("Widget", 9.99))
            .await;

        match result {
            Err(CoreError::Persistence(PersistenceError::Unavailable(msg))) => {
                assert_eq!(msg, "connection refused");
            }
            other => panic!("expected persistence error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_input_is_trusted_by_default() {
        let gateway = Arc::new(InMemoryProductGateway::new());
        let use_case = CreateProductUseCase::new(gateway.clone());

        use_case
            .execute(CreateProductInput::new("", -5.0))
            .await
            .unwrap();

        assert_eq!(gateway.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_validation_rejects_before_saving() {
        let mut gateway = MockProductGateway::new();
        gateway.expect_save().never();

        let use_case = CreateProductUseCase::new(Arc::new(gateway)).with_input_validation(true);

        let err = use_case
            .execute(CreateProductInput::new("   ", 9.99))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));

        let err = use_case
            .execute(CreateProductInput::new("Widget", -1.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Negative { .. })
        ));
    }

    #[tokio::test]
    async fn test_validation_accepts_good_input() {
        let gateway = Arc::new(InMemoryProductGateway::new());
        let use_case = CreateProductUseCase::new(gateway.clone()).with_input_validation(true);

        use_case
            .execute(CreateProductInput::new("Widget", 0.0))
            .await
            .unwrap();

        assert_eq!(gateway.len().unwrap(), 1);
    }

    #[test]
    fn test_input_deserializes_from_json() {
        let input: CreateProductInput =
            serde_json::from_str(r#"{"name":"Widget","price":9.99}"#).unwrap();
        assert_eq!(input, CreateProductInput::new("Widget", 9.99));
    }
}
