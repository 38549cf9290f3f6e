//! Order requests.

use common::OrderId;
use serde::{Deserialize, Serialize};

use super::{CustomerId, DiscountCode, ProductId, StoreId};

/// A request to place or modify an order.
///
/// Carries identifiers only; [`OrderService`](super::OrderService) resolves
/// them into entities before the aggregate validates anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// The order to create, or the existing order to modify.
    pub id: OrderId,

    /// The customer placing the order.
    pub customer_id: CustomerId,

    /// The store the order is placed with.
    pub store_id: StoreId,

    /// Optional discount code. `None` and a blank code both mean no discount.
    #[serde(default)]
    pub discount_code: Option<DiscountCode>,

    /// Requested products, in order.
    #[serde(default)]
    pub products: Vec<LineItem>,
}

impl OrderRequest {
    /// Creates a request with no discount and no products.
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        store_id: impl Into<StoreId>,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            store_id: store_id.into(),
            discount_code: None,
            products: Vec::new(),
        }
    }

    /// Sets the discount code.
    pub fn with_discount(mut self, code: impl Into<DiscountCode>) -> Self {
        self.discount_code = Some(code.into());
        self
    }

    /// Appends a line item.
    pub fn with_product(mut self, product_id: impl Into<ProductId>, quantity: u32) -> Self {
        self.products.push(LineItem::new(product_id, quantity));
        self
    }

    /// Returns the discount code to resolve, skipping blank codes.
    pub fn effective_discount_code(&self) -> Option<&DiscountCode> {
        self.discount_code.as_ref().filter(|code| !code.is_blank())
    }
}

/// One requested product reference.
///
/// `quantity` travels with the request but plays no part in validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl LineItem {
    pub fn new(id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}

fn default_quantity() -> u32 {
    1
}
