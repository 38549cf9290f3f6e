//! Domain layer for the ordering system.
//!
//! This crate provides:
//! - The `Order` aggregate, which only exists once its invariants hold
//! - Resolved collaborator entities (customers, stores, discounts, products)
//! - Repository ports and in-memory implementations
//! - `OrderService`, the resolve/validate/persist workflow

pub mod error;
pub mod memory;
pub mod order;
pub mod repository;

pub use common::OrderId;
pub use error::DomainError;
pub use memory::{InMemoryRepositories, InMemoryRepository, Keyed};
pub use order::{
    Customer, CustomerId, Discount, DiscountCode, LineItem, Money, Order, OrderError,
    OrderRequest, OrderService, Product, ProductId, Store, StoreId,
};
pub use repository::{
    CustomerRepository, DiscountRepository, OrderRepository, ProductRepository, RepositoryError,
    StoreRepository,
};
