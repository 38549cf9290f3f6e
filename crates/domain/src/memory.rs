//! In-memory repository implementations.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use common::OrderId;
use tokio::sync::RwLock;

use crate::order::{
    Customer, CustomerId, Discount, DiscountCode, Order, OrderService, Product, ProductId, Store,
    StoreId,
};
use crate::repository::{
    CustomerRepository, DiscountRepository, OrderRepository, ProductRepository, RepositoryError,
    Result, StoreRepository,
};

/// An entity that is stored under a string key.
pub trait Keyed {
    /// Entity name used in not-found errors.
    const ENTITY: &'static str;

    /// Returns the key the entity is stored under.
    fn key(&self) -> &str;
}

impl Keyed for Customer {
    const ENTITY: &'static str = "Customer";

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Keyed for Store {
    const ENTITY: &'static str = "Store";

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Keyed for Discount {
    const ENTITY: &'static str = "Discount";

    fn key(&self) -> &str {
        self.code.as_str()
    }
}

impl Keyed for Product {
    const ENTITY: &'static str = "Product";

    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Keyed for Order {
    const ENTITY: &'static str = "Order";

    fn key(&self) -> &str {
        self.id().as_str()
    }
}

/// In-memory repository keyed by entity identifier.
///
/// Clones share the same underlying storage.
#[derive(Clone)]
pub struct InMemoryRepository<T> {
    entries: Arc<RwLock<HashMap<String, T>>>,
    writes: Arc<AtomicUsize>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl<T: Keyed + Clone + Send + Sync> InMemoryRepository<T> {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an entity, replacing any entity with the same key.
    ///
    /// Seeding does not count as a write through the repository port.
    pub async fn insert(&self, entity: T) {
        self.entries
            .write()
            .await
            .insert(entity.key().to_string(), entity);
    }

    /// Returns a copy of the entity stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<T> {
        self.entries.read().await.get(key).cloned()
    }

    /// Returns the number of stored entities.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Returns how many times an entity was written through the repository port.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Clears all entities and resets the write counter.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
        self.writes.store(0, Ordering::SeqCst);
    }

    async fn find(&self, key: &str) -> Result<T> {
        self.get(key)
            .await
            .ok_or_else(|| RepositoryError::not_found(T::ENTITY, key))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryRepository<Customer> {
    async fn get_by(&self, id: &CustomerId) -> Result<Customer> {
        self.find(id.as_str()).await
    }
}

#[async_trait]
impl StoreRepository for InMemoryRepository<Store> {
    async fn get_by(&self, id: &StoreId) -> Result<Store> {
        self.find(id.as_str()).await
    }
}

#[async_trait]
impl DiscountRepository for InMemoryRepository<Discount> {
    async fn get_by(&self, code: &DiscountCode) -> Result<Discount> {
        self.find(code.as_str()).await
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository<Product> {
    async fn get_by(&self, id: &ProductId) -> Result<Product> {
        self.find(id.as_str()).await
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepository<Order> {
    async fn get_by(&self, id: &OrderId) -> Result<Order> {
        self.find(id.as_str()).await
    }

    async fn add(&self, order: Order) -> Result<()> {
        self.insert(order).await;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// The full set of in-memory repositories the order workflow needs.
#[derive(Clone, Default)]
pub struct InMemoryRepositories {
    pub customers: InMemoryRepository<Customer>,
    pub stores: InMemoryRepository<Store>,
    pub discounts: InMemoryRepository<Discount>,
    pub products: InMemoryRepository<Product>,
    pub orders: InMemoryRepository<Order>,
}

impl InMemoryRepositories {
    /// Creates an empty set of repositories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an order service backed by these repositories.
    pub fn service(&self) -> OrderService {
        OrderService::new(
            Arc::new(self.customers.clone()),
            Arc::new(self.stores.clone()),
            Arc::new(self.discounts.clone()),
            Arc::new(self.products.clone()),
            Arc::new(self.orders.clone()),
        )
    }
}
