//! # Product Entity
//!
//! The single entity of the catalog: identity, name, price and a mutable
//! quantity counter.
//!
//! ## Two Ways In
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Construction Paths                           │
//! │                                                                         │
//! │  Product::create(name, price)          Product::reconstruct(props)      │
//! │       │                                      │                          │
//! │       ▼                                      ▼                          │
//! │  id       = ProductId::generate()      id       = props.id              │
//! │  quantity = 0                          quantity = props.quantity        │
//! │       │                                      │    (NOT re-validated)    │
//! │       └──────────────┬───────────────────────┘                          │
//! │                      ▼                                                  │
//! │              Product (private fields)                                   │
//! │                                                                         │
//! │  Used by: CreateProduct use case       Used by: persistence adapters    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The struct has private fields and no `Default`, so code outside this
//! module can only obtain a `Product` through one of the two factories.
//!
//! ## Quantity
//! `increase_quantity` / `decrease_quantity` accept any amount and may leave
//! the counter negative. Callers that want a floor at zero use
//! [`Product::adjust_quantity`] with [`QuantityPolicy::NonNegative`].

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{ProductId, QuantityPolicy};

// =============================================================================
// Product Props
// =============================================================================

/// The complete property set of a product.
///
/// This is what a store hands to [`Product::reconstruct`] and what it gets
/// back from [`Product::to_props`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProps {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

// =============================================================================
// Product
// =============================================================================

/// An inventory item in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    quantity: i64,
}

impl Product {
    /// Creates a brand-new product with a fresh identifier and zero quantity.
    ///
    /// Name and price are taken as given. Input rules, when wanted, live in
    /// [`crate::validation`] and are applied by the use case.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::Product;
    ///
    /// let product = Product::create("Widget", 9.99);
    /// assert_eq!(product.quantity(), 0);
    /// assert!(!product.id().as_str().is_empty());
    /// ```
    pub fn create(name: impl Into<String>, price: f64) -> Self {
        Product {
            id: ProductId::generate(),
            name: name.into(),
            price,
            quantity: 0,
        }
    }

    /// Rehydrates a product from an already-stored property set.
    ///
    /// ## Trust Boundary
    /// Nothing is re-checked here: a negative quantity coming from the store
    /// is kept as-is. The persistence collaborator owns the integrity of
    /// what it stored.
    pub fn reconstruct(props: ProductProps) -> Self {
        Product {
            id: props.id,
            name: props.name,
            price: props.price,
            quantity: props.quantity,
        }
    }

    /// Unique identifier, fixed at creation.
    #[inline]
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Current quantity on hand. May be negative.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Adds `amount` to the quantity.
    ///
    /// No validation of sign or magnitude. Saturates at `i64::MAX` / `i64::MIN`.
    pub fn increase_quantity(&mut self, amount: i64) {
        self.quantity = self.quantity.saturating_add(amount);
    }

    /// Subtracts `amount` from the quantity.
    ///
    /// No validation: the result may be negative. Saturates at the `i64`
    /// limits.
    pub fn decrease_quantity(&mut self, amount: i64) {
        self.quantity = self.quantity.saturating_sub(amount);
    }

    /// Applies a signed quantity change under the given policy.
    ///
    /// ## Policies
    /// ```text
    /// Permissive:   same as increase_quantity(delta), never fails
    /// NonNegative:  delta < 0 and quantity + delta < 0
    ///                 → Err(InsufficientStock), unchanged
    /// ```
    ///
    /// Increases always go through, so a product stored with a negative
    /// quantity can be restocked in steps.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{CoreError, Product, QuantityPolicy};
    ///
    /// let mut product = Product::create("Widget", 9.99);
    /// product.adjust_quantity(5, QuantityPolicy::NonNegative).unwrap();
    ///
    /// let err = product.adjust_quantity(-8, QuantityPolicy::NonNegative).unwrap_err();
    /// assert!(matches!(err, CoreError::InsufficientStock { available: 5, requested: 8, .. }));
    /// assert_eq!(product.quantity(), 5);
    /// ```
    pub fn adjust_quantity(&mut self, delta: i64, policy: QuantityPolicy) -> CoreResult<()> {
        let next = self.quantity.saturating_add(delta);

        if policy == QuantityPolicy::NonNegative && delta < 0 && next < 0 {
            return Err(CoreError::InsufficientStock {
                product_id: self.id.clone(),
                available: self.quantity,
                requested: delta.saturating_neg(),
            });
        }

        self.quantity = next;
        Ok(())
    }

    /// Returns a copy of the full property set.
    pub fn to_props(&self) -> ProductProps {
        ProductProps {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }
}

impl From<Product> for ProductProps {
    fn from(product: Product) -> Self {
        ProductProps {
            id: product.id,
            name: product.name,
            price: product.price,
            quantity: product.quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
