//! # ListProduct Use Case
//!
//! Reads every product through the gateway and presents them as output
//! records.
//!
//! ## Projections
//! ```text
//! Product ──► ProductOutput  { id, name, price, quantity }   (use-case output)
//!                  │
//!                  └──► ProductSummary { id, name, price }   (transport edge)
//! ```
//!
//! An empty catalog yields an empty list, not an error. Records keep the
//! order the gateway returned them in.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::gateway::ProductGateway;
use crate::product::{Product, ProductProps};
use crate::usecases::UseCase;

/// One product as returned by [`ListProductUseCase`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductOutput {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl From<Product> for ProductOutput {
    fn from(product: Product) -> Self {
        let props = ProductProps::from(product);
        ProductOutput {
            id: props.id.into_inner(),
            name: props.name,
            price: props.price,
            quantity: props.quantity,
        }
    }
}

/// Reduced view for adapters that do not expose stock levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl From<&ProductOutput> for ProductSummary {
    fn from(output: &ProductOutput) -> Self {
        ProductSummary {
            id: output.id.clone(),
            name: output.name.clone(),
            price: output.price,
        }
    }
}

/// Output of [`ListProductUseCase`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListProductOutput {
    pub products: Vec<ProductOutput>,
}

impl ListProductOutput {
    /// Drops the quantity from every record.
    pub fn summaries(&self) -> Vec<ProductSummary> {
        self.products.iter().map(ProductSummary::from).collect()
    }
}

/// Lists the whole catalog.
#[derive(Clone)]
pub struct ListProductUseCase {
    gateway: Arc<dyn ProductGateway>,
}

impl ListProductUseCase {
    pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
        ListProductUseCase { gateway }
    }

    fn present(products: Vec<Product>) -> ListProductOutput {
        ListProductOutput {
            products: products.into_iter().map(ProductOutput::from).collect(),
        }
    }
}

#[async_trait]
impl UseCase for ListProductUseCase {
    type Input = ();
    type Output = ListProductOutput;

    #[instrument(name = "list_product", skip_all)]
    async fn execute(&self, _input: ()) -> CoreResult<ListProductOutput> {
        let products = match self.gateway.list_all().await {
            Ok(products) => products,
            Err(err) => {
                warn!(error = %err, "Listing products failed");
                return Err(err.into());
            }
        };

        debug!(count = products.len(), "Listed products");
        Ok(Self::present(products))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, PersistenceError};
    use crate::gateway::MockProductGateway;
    use crate::memory::InMemoryProductGateway;
    use crate::types::ProductId;

    fn stored(id: &str, name: &str, price: f64, quantity: i64) -> Product {
        Product::reconstruct(ProductProps {
            id: ProductId::from(id),
            name: name.to_string(),
            price,
            quantity,
        })
    }

    #[tokio::test]
    async fn test_empty_catalog_yields_empty_list() {
        let use_case = ListProductUseCase::new(Arc::new(InMemoryProductGateway::new()));

        let output = use_case.execute(()).await.unwrap();

        assert!(output.products.is_empty());
        assert_eq!(output, ListProductOutput::default());
    }

    #[tokio::test]
    async fn test_returns_all_fields_verbatim() {
        let gateway = InMemoryProductGateway::with_products([
            stored("a", "X", 1.0, 2),
            stored("b", "Y", 2.0, 3),
        ]);
        let use_case = ListProductUseCase::new(Arc::new(gateway));

        let output = use_case.execute(()).await.unwrap();

        assert_eq!(
            output.products,
            vec![
                ProductOutput {
                    id: "a".to_string(),
                    name: "X".to_string(),
                    price: 1.0,
                    quantity: 2,
                },
                ProductOutput {
                    id: "b".to_string(),
                    name: "Y".to_string(),
                    price: 2.0,
                    quantity: 3,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_keeps_negative_quantities_from_store() {
        let gateway = InMemoryProductGateway::with_products([stored("a", "X", 1.0, -7)]);
        let use_case = ListProductUseCase::new(Arc::new(gateway));

        let output = use_case.execute(()).await.unwrap();

        assert_eq!(output.products[0].quantity, -7);
    }

    #[tokio::test]
    async fn test_calls_list_all_exactly_once() {
        let mut gateway = MockProductGateway::new();
        gateway
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![stored("a", "X", 1.0, 2)]));
        gateway.expect_save().never();

        let use_case = ListProductUseCase::new(Arc::new(gateway));
        let output = use_case.execute(()).await.unwrap();

        assert_eq!(output.products.len(), 1);
    }

    #[tokio::test]
    async fn test_list_failure_is_surfaced_unchanged() {
        let mut gateway = MockProductGateway::new();
        gateway
            .expect_list_all()
            .times(1)
            .returning(|| Err(PersistenceError::Corrupted("price is not a number".into())));

        let use_case = ListProductUseCase::new(Arc::new(gateway));
        let err = use_case.execute(()).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Persistence(PersistenceError::Corrupted(ref msg)) if msg == "price is not a number"
        ));
    }

    #[tokio::test]
    async fn test_summaries_drop_quantity() {
        let gateway = InMemoryProductGateway::with_products([stored("a", "X", 1.5, 9)]);
        let use_case = ListProductUseCase::new(Arc::new(gateway));

        let output = use_case.execute(()).await.unwrap();

        assert_eq!(
            output.summaries(),
            vec![ProductSummary {
                id: "a".to_string(),
                name: "X".to_string(),
                price: 1.5,
            }]
        );
    }

    #[test]
    fn test_output_serializes_with_products_key() {
        let output = ListProductOutput {
            products: vec![ProductOutput {
                id: "a".to_string(),
                name: "X".to_string(),
                price: 1.0,
                quantity: 2,
            }],
        };

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "products": [{ "id": "a", "name": "X", "price": 1.0, "quantity": 2 }]
            })
        );
    }
}
