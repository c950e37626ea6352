//! # Product Repository
//!
//! SQLite implementation of the [`ProductGateway`] port.
//!
//! ## Row Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products table                         Product entity                  │
//! │  ──────────────                         ──────────────                  │
//! │  id        TEXT PRIMARY KEY   ◄──────►  ProductId                       │
//! │  name      TEXT               ◄──────►  String                          │
//! │  price     REAL               ◄──────►  f64                             │
//! │  quantity  INTEGER            ◄──────►  i64                             │
//! │  created_at TEXT              (storage only, used for diagnostics)     │
//! │                                                                         │
//! │  save()      → INSERT (an existing id is refused, never overwritten)   │
//! │  list_all()  → SELECT ... ORDER BY rowid (insertion order)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::{PersistenceError, Product, ProductGateway, ProductId, ProductProps};

/// One row of the `products` table.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: String,
    name: String,
    price: f64,
    quantity: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::reconstruct(ProductProps {
            id: ProductId::from(row.id),
            name: row.name,
            price: row.price,
            quantity: row.quantity,
        })
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// repo.insert(&Product::create("Widget", 9.99)).await?;
/// let all = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(())` - Row written
    /// * `Err(DbError::UniqueViolation)` - A product with this id exists
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id(), "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (id, name, price, quantity, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(product.id().as_str())
        .bind(product.name())
        .bind(product.price())
        .bind(product.quantity())
        .bind(Utc::now())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) => match DbError::from(err) {
                DbError::UniqueViolation { field, .. } => {
                    Err(DbError::duplicate(field, product.id().as_str()))
                }
                other => Err(other),
            },
        }
    }

    /// Lists every product in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, quantity
            FROM products
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded products");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn find_by_id(&self, id: &ProductId) -> DbResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, quantity
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Counts stored products (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProductGateway for ProductRepository {
    async fn save(&self, product: &Product) -> Result<(), PersistenceError> {
        self.insert(product).await.map_err(PersistenceError::from)
    }

    async fn list_all(&self) -> Result<Vec<Product>, PersistenceError> {
        self.list().await.map_err(PersistenceError::from)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
