//! Order endpoints.
//!
//! Handlers translate HTTP payloads into [`OrderRequest`]s and hand them to
//! the [`OrderService`]; on success they return only the order identifier.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use domain::{LineItem, Order, OrderId, OrderRequest, OrderService};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub order_service: OrderService,
}

// -- Request types --

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    /// Caller-chosen order ID; generated when omitted.
    pub id: Option<String>,
    pub customer_id: String,
    pub store_id: String,
    pub discount_code: Option<String>,
    #[serde(default)]
    pub products: Vec<OrderItemRequest>,
}

/// Body of a modify request. Any `id` in the body is ignored; the path ID
/// names the order.
#[derive(Deserialize)]
pub struct ModifyOrderRequest {
    pub customer_id: String,
    pub store_id: String,
    pub discount_code: Option<String>,
    #[serde(default)]
    pub products: Vec<OrderItemRequest>,
}

#[derive(Deserialize)]
pub struct OrderItemRequest {
    pub id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderIdResponse {
    pub order_id: String,
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub customer_id: String,
    pub store_id: String,
    pub discount_code: Option<String>,
    pub products: Vec<ProductResponse>,
}

#[derive(Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub price_cents: i64,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            customer_id: order.customer().id.to_string(),
            store_id: order.store().id.to_string(),
            discount_code: order.discount().map(|d| d.code.to_string()),
            products: order
                .products()
                .iter()
                .map(|p| ProductResponse {
                    id: p.id.to_string(),
                    price_cents: p.price.cents(),
                })
                .collect(),
        }
    }
}

fn build_request(
    id: OrderId,
    customer_id: String,
    store_id: String,
    discount_code: Option<String>,
    products: Vec<OrderItemRequest>,
) -> OrderRequest {
    OrderRequest {
        id,
        customer_id: customer_id.into(),
        store_id: store_id.into(),
        discount_code: discount_code.map(Into::into),
        products: products
            .into_iter()
            .map(|item| LineItem::new(item.id, item.quantity))
            .collect(),
    }
}

// -- Handlers --

/// POST /orders — place a new order.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderIdResponse>), ApiError> {
    let id = req.id.map(OrderId::from).unwrap_or_else(OrderId::generate);
    let request = build_request(
        id,
        req.customer_id,
        req.store_id,
        req.discount_code,
        req.products,
    );

    let order = state.order_service.create_order(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderIdResponse {
            order_id: order.id().to_string(),
        }),
    ))
}

/// PUT /orders/:id — modify an existing order.
#[tracing::instrument(skip(state, req))]
pub async fn modify(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ModifyOrderRequest>,
) -> Result<Json<OrderIdResponse>, ApiError> {
    let request = build_request(
        OrderId::from(id),
        req.customer_id,
        req.store_id,
        req.discount_code,
        req.products,
    );

    let order = state.order_service.update_order(&request).await?;

    Ok(Json(OrderIdResponse {
        order_id: order.id().to_string(),
    }))
}

/// GET /orders/:id — load an order by ID.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state.order_service.get_order(&OrderId::from(id)).await?;
    Ok(Json(OrderResponse::from(&order)))
}
