//! Order service: resolves a request, validates it, and persists the result.

use std::sync::Arc;

use common::OrderId;

use crate::error::DomainError;
use crate::repository::{
    CustomerRepository, DiscountRepository, OrderRepository, ProductRepository, StoreRepository,
};

use super::{Customer, Discount, Order, OrderError, OrderRequest, Product, Store};

/// Entities resolved from the identifiers on an [`OrderRequest`].
struct Resolved {
    customer: Customer,
    store: Store,
    discount: Option<Discount>,
    products: Vec<Product>,
}

/// Service for placing and modifying orders.
///
/// Every call runs the same pipeline: resolve each referenced entity through
/// its repository, hand them to the aggregate for validation, then persist
/// the order. Failures from any stage are returned unchanged and nothing is
/// persisted after a failure.
pub struct OrderService {
    customers: Arc<dyn CustomerRepository>,
    stores: Arc<dyn StoreRepository>,
    discounts: Arc<dyn DiscountRepository>,
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl OrderService {
    /// Creates a new order service over the given repositories.
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        stores: Arc<dyn StoreRepository>,
        discounts: Arc<dyn DiscountRepository>,
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            customers,
            stores,
            discounts,
            products,
            orders,
        }
    }

    /// Places a new order.
    #[tracing::instrument(skip(self, request), fields(order_id = %request.id))]
    pub async fn create_order(&self, request: &OrderRequest) -> Result<Order, DomainError> {
        let resolved = self.resolve(request).await?;

        let order = Order::place(
            request.id.clone(),
            resolved.customer,
            resolved.store,
            resolved.discount,
            resolved.products,
        )
        .inspect_err(record_rejection)?;

        self.orders.add(order.clone()).await?;

        metrics::counter!("orders_placed_total").increment(1);
        tracing::info!(products = order.product_count(), "order placed");
        Ok(order)
    }

    /// Modifies an existing order.
    ///
    /// The order keeps its identifier; customer, store, discount and products
    /// are all replaced by the ones resolved from `request`.
    #[tracing::instrument(skip(self, request), fields(order_id = %request.id))]
    pub async fn update_order(&self, request: &OrderRequest) -> Result<Order, DomainError> {
        let existing = self.orders.get_by(&request.id).await?;
        let resolved = self.resolve(request).await?;

        let order = existing
            .revise(
                resolved.customer,
                resolved.store,
                resolved.discount,
                resolved.products,
            )
            .inspect_err(record_rejection)?;

        self.orders.add(order.clone()).await?;

        metrics::counter!("orders_modified_total").increment(1);
        tracing::info!(products = order.product_count(), "order modified");
        Ok(order)
    }

    /// Loads an order by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_id: &OrderId) -> Result<Order, DomainError> {
        Ok(self.orders.get_by(order_id).await?)
    }

    /// Resolves every identifier on the request, in request order.
    async fn resolve(&self, request: &OrderRequest) -> Result<Resolved, DomainError> {
        let customer = self.customers.get_by(&request.customer_id).await?;
        let store = self.stores.get_by(&request.store_id).await?;

        let discount = match request.effective_discount_code() {
            Some(code) => Some(self.discounts.get_by(code).await?),
            None => None,
        };

        let mut products = Vec::with_capacity(request.products.len());
        for item in &request.products {
            products.push(self.products.get_by(&item.id).await?);
        }

        Ok(Resolved {
            customer,
            store,
            discount,
            products,
        })
    }
}

fn record_rejection(err: &OrderError) {
    metrics::counter!("orders_rejected_total", "reason" => err.reason()).increment(1);
    tracing::warn!(reason = err.reason(), error = %err, "order rejected");
}
