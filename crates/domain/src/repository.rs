//! Repository ports consumed by the order workflow.
//!
//! Lookups either return the entity or fail; the workflow passes those
//! failures through untouched.

use async_trait::async_trait;
use common::OrderId;
use thiserror::Error;

use crate::order::{
    Customer, CustomerId, Discount, DiscountCode, Order, Product, ProductId, Store, StoreId,
};

/// Errors raised by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No entity is stored under the given key.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The backing store could not serve the request.
    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    /// Creates a not-found error for the given entity kind and key.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Resolves customers by identifier.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn get_by(&self, id: &CustomerId) -> Result<Customer>;
}

/// Resolves stores by identifier.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn get_by(&self, id: &StoreId) -> Result<Store>;
}

/// Resolves discounts by code.
#[async_trait]
pub trait DiscountRepository: Send + Sync {
    async fn get_by(&self, code: &DiscountCode) -> Result<Discount>;
}

/// Resolves products by identifier. Called once per line item.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by(&self, id: &ProductId) -> Result<Product>;
}

/// Loads and persists order aggregates.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Loads an existing order.
    async fn get_by(&self, id: &OrderId) -> Result<Order>;

    /// Stores an order.
    ///
    /// Adding an order whose identifier is already stored overwrites it.
    async fn add(&self, order: Order) -> Result<()>;
}
