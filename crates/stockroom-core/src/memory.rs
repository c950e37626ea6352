//! # In-Memory Product Gateway
//!
//! A process-local [`ProductGateway`] backed by a `Vec`.
//!
//! Used as the swappable test double for the use cases and for runs that
//! do not need durable storage. It keeps the same duplicate-id rule as the
//! SQLite store so tests see the same failure shape.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::error::PersistenceError;
use crate::gateway::ProductGateway;
use crate::product::Product;

/// Thread-safe, insertion-ordered product store.
#[derive(Debug, Default)]
pub struct InMemoryProductGateway {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductGateway {
    /// Creates an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway pre-loaded with products, kept in the given order.
    ///
    /// Products are inserted as-is, without the duplicate check `save` does.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        InMemoryProductGateway {
            products: RwLock::new(products.into_iter().collect()),
        }
    }

    /// Number of stored products.
    pub fn len(&self) -> Result<usize, PersistenceError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, PersistenceError> {
        Ok(self.read()?.is_empty())
    }

    /// Removes every stored product.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Product>>, PersistenceError> {
        self.products
            .read()
            .map_err(|_| PersistenceError::Internal("product store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Product>>, PersistenceError> {
        self.products
            .write()
            .map_err(|_| PersistenceError::Internal("product store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ProductGateway for InMemoryProductGateway {
    async fn save(&self, product: &Product) -> Result<(), PersistenceError> {
        let mut products = self.write()?;

        if products.iter().any(|p| p.id() == product.id()) {
            return Err(PersistenceError::Rejected(format!(
                "duplicate product id: {}",
                product.id()
            )));
        }

        debug!(product_id = %product.id(), "Storing product in memory");
        products.push(product.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Product>, PersistenceError> {
        Ok(self.read()?.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::product::ProductProps;
    use crate::types::ProductId;

    fn stored(id: &str, quantity: i64) -> Product {
        Product::reconstruct(ProductProps {
            id: ProductId::from(id),
            name: format!("Product {id}"),
            price: 1.0,
            quantity,
        })
    }

    #[tokio::test]
    async fn test_save_then_list() {
        let gateway = InMemoryProductGateway::new();
        let product = Product::create("Widget", 9.99);

        gateway.save(&product).await.unwrap();

        let listed = gateway.list_all().await.unwrap();
        assert_eq!(listed, vec![product]);
        assert_eq!(gateway.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let gateway = InMemoryProductGateway::with_products([stored("a", 1)]);

        let err = gateway.save(&stored("a", 2)).await.unwrap_err();

        assert!(matches!(err, PersistenceError::Rejected(_)));
        assert_eq!(gateway.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let gateway = InMemoryProductGateway::with_products([stored("b", 1), stored("a", 2)]);

        let ids: Vec<_> = gateway
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id().to_string())
            .collect();

        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_clear() {
        let gateway = InMemoryProductGateway::with_products([stored("a", 1)]);
        gateway.clear().unwrap();

        assert!(gateway.is_empty().unwrap());
        assert!(gateway.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_poisoned_lock_is_reported_not_hidden() {
        let gateway = Arc::new(InMemoryProductGateway::with_products([stored("a", 1)]));

        let holder = gateway.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.products.write().unwrap();
            panic!("writer died while holding the lock");
        })
        .join();

        assert!(matches!(gateway.len(), Err(PersistenceError::Internal(_))));
        assert!(matches!(gateway.is_empty(), Err(PersistenceError::Internal(_))));
        assert!(matches!(
            gateway.list_all().await,
            Err(PersistenceError::Internal(_))
        ));
    }
}
