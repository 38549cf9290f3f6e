//! Order aggregate and related types.

mod aggregate;
mod commands;
mod entities;
mod service;
mod value_objects;

pub use aggregate::Order;
pub use commands::{LineItem, OrderRequest};
pub use entities::{Customer, Discount, Product, Store};
pub use service::OrderService;
pub use value_objects::{CustomerId, DiscountCode, Money, ProductId, StoreId};

use thiserror::Error;

/// Business rules an order must satisfy.
///
/// The display text of each variant is the user-visible message; the fields
/// identify the offending entity for logs and callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The resolved customer is not active.
    #[error("Customer is deActivated")]
    InactiveCustomer { customer_id: CustomerId },

    /// The resolved store is not active.
    #[error("Store is deActivated")]
    InactiveStore { store_id: StoreId },

    /// A discount was supplied but is not active.
    #[error("Invalid discount code")]
    InvalidDiscount { code: DiscountCode },

    /// The product list is empty or holds a product priced at or below zero.
    #[error("AtLeast one product is required.")]
    NoValidProducts,
}

impl OrderError {
    /// Returns a stable, low-cardinality name for the violated rule.
    ///
    /// Used as a metrics label.
    pub fn reason(&self) -> &'static str {
        match self {
            OrderError::InactiveCustomer { .. } => "inactive_customer",
            OrderError::InactiveStore { .. } => "inactive_store",
            OrderError::InvalidDiscount { .. } => "invalid_discount",
            OrderError::NoValidProducts => "no_valid_products",
        }
    }
}
