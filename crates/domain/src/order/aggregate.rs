//! Order aggregate implementation.

use common::OrderId;
use serde::Serialize;

use super::{Customer, Discount, OrderError, Product, Store};

/// Order aggregate root.
///
/// An `Order` can only be obtained from [`Order::place`] or
/// [`Order::revise`], both of which enforce every business rule, so any
/// value of this type is valid. Fields are read-only once built.
///
/// Only `Serialize` is derived; there is no path from raw data to an `Order`
/// that skips the checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: OrderId,
    customer: Customer,
    store: Store,
    discount: Option<Discount>,
    products: Vec<Product>,
}

impl Order {
    /// Validates the resolved associations and builds an order from them.
    ///
    /// Rules are checked in a fixed order and the first violation is
    /// returned:
    /// 1. the customer must be active
    /// 2. the store must be active
    /// 3. a supplied discount must be active (no discount is always fine)
    /// 4. there must be at least one product, and every product must be
    ///    priced above zero
    ///
    /// On success the order holds exactly the supplied values.
    pub fn place(
        id: OrderId,
        customer: Customer,
        store: Store,
        discount: Option<Discount>,
        products: Vec<Product>,
    ) -> Result<Self, OrderError> {
        if !customer.is_active {
            return Err(OrderError::InactiveCustomer {
                customer_id: customer.id,
            });
        }

        if !store.is_active {
            return Err(OrderError::InactiveStore { store_id: store.id });
        }

        if let Some(discount) = &discount
            && !discount.is_active
        {
            return Err(OrderError::InvalidDiscount {
                code: discount.code.clone(),
            });
        }

        if products.is_empty() || products.iter().any(|p| !p.is_priced()) {
            return Err(OrderError::NoValidProducts);
        }

        Ok(Self {
            id,
            customer,
            store,
            discount,
            products,
        })
    }

    /// Replaces every association of this order, keeping its identifier.
    ///
    /// Runs the same checks as [`Order::place`]. Nothing from the current
    /// associations is carried over.
    pub fn revise(
        &self,
        customer: Customer,
        store: Store,
        discount: Option<Discount>,
        products: Vec<Product>,
    ) -> Result<Self, OrderError> {
        Self::place(self.id.clone(), customer, store, discount, products)
    }
}

// Query methods
impl Order {
    /// Returns the order identifier.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the customer who placed the order.
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Returns the store the order was placed with.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the applied discount, if any.
    pub fn discount(&self) -> Option<&Discount> {
        self.discount.as_ref()
    }

    /// Returns the ordered products, in line-item order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}
