//! Collaborator entities resolved by the order workflow.
//!
//! These are looked up by identifier and handed to the aggregate as-is; the
//! ordering domain never creates or mutates them.

use serde::{Deserialize, Serialize};

use super::{CustomerId, DiscountCode, Money, ProductId, StoreId};

/// A customer who can place orders while active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub is_active: bool,
}

impl Customer {
    pub fn new(id: impl Into<CustomerId>, is_active: bool) -> Self {
        Self {
            id: id.into(),
            is_active,
        }
    }
}

/// A store that accepts orders while active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub is_active: bool,
}

impl Store {
    pub fn new(id: impl Into<StoreId>, is_active: bool) -> Self {
        Self {
            id: id.into(),
            is_active,
        }
    }
}

/// A discount that may be attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub code: DiscountCode,
    pub is_active: bool,
}

impl Discount {
    pub fn new(code: impl Into<DiscountCode>, is_active: bool) -> Self {
        Self {
            code: code.into(),
            is_active,
        }
    }
}

/// A product with its unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub price: Money,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, price: Money) -> Self {
        Self {
            id: id.into(),
            price,
        }
    }

    /// Returns true if the product can be sold, i.e. its price is above zero.
    pub fn is_priced(&self) -> bool {
        self.price.is_positive()
    }
}
