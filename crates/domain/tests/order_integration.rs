//! Integration tests for the order placement workflow.
//!
//! These tests drive `OrderService` end to end against the in-memory
//! repositories and check the business-rule ordering, persistence behavior,
//! and update semantics.

use domain::{
    Customer, CustomerId, Discount, DiscountCode, DomainError, InMemoryRepositories, Money,
    OrderError, OrderId, OrderRequest, Product, Store, StoreId,
};

/// Seeds one customer, store, discount and product with the given flags.
async fn repositories(
    customer_active: bool,
    store_active: bool,
    discount_active: bool,
    price_cents: i64,
) -> InMemoryRepositories {
    let repos = InMemoryRepositories::new();
    repos
        .customers
        .insert(Customer::new("cust1", customer_active))
        .await;
    repos.stores.insert(Store::new("store1", store_active)).await;
    repos
        .discounts
        .insert(Discount::new("DISC10", discount_active))
        .await;
    repos
        .products
        .insert(Product::new("prod1", Money::from_cents(price_cents)))
        .await;
    repos
}

fn order_request() -> OrderRequest {
    OrderRequest::new("order123", "cust1", "store1")
        .with_discount("DISC10")
        .with_product("prod1", 1)
}

fn order_error(err: DomainError) -> OrderError {
    match err {
        DomainError::Order(err) => err,
        other => panic!("expected an order rule violation, got {other:?}"),
    }
}

mod rule_ordering {
    use super::*;

    #[tokio::test]
    async fn inactive_customer_fails_regardless_of_everything_else() {
        for (store_active, discount_active, price) in
            [(true, true, 100), (false, true, 100), (false, false, 0), (true, false, -5)]
        {
            let repos = repositories(false, store_active, discount_active, price).await;
            let service = repos.service();

            let err = order_error(service.create_order(&order_request()).await.unwrap_err());

            assert_eq!(
                err,
                OrderError::InactiveCustomer {
                    customer_id: CustomerId::new("cust1")
                }
            );
            assert_eq!(err.to_string(), "Customer is deActivated");
            assert_eq!(repos.orders.write_count(), 0);
        }
    }

    #[tokio::test]
    async fn inactive_store_fails_when_customer_active() {
        for (discount_active, price) in [(true, 100), (false, 0)] {
            let repos = repositories(true, false, discount_active, price).await;
            let service = repos.service();

            let err = order_error(service.create_order(&order_request()).await.unwrap_err());

            assert_eq!(
                err,
                OrderError::InactiveStore {
                    store_id: StoreId::new("store1")
                }
            );
        }
    }

    #[tokio::test]
    async fn inactive_present_discount_fails() {
        let repos = repositories(true, true, false, 100).await;
        let service = repos.service();

        let err = order_error(service.create_order(&order_request()).await.unwrap_err());

        assert_eq!(
            err,
            OrderError::InvalidDiscount {
                code: DiscountCode::new("DISC10")
            }
        );
        assert_eq!(err.to_string(), "Invalid discount code");
    }

    #[tokio::test]
    async fn absent_discount_never_fails_on_discount_rule() {
        let repos = repositories(true, true, false, 100).await;
        let service = repos.service();
        let request = OrderRequest::new("order123", "cust1", "store1").with_product("prod1", 1);

        let order = service.create_order(&request).await.unwrap();

        assert!(order.discount().is_none());
    }

    #[tokio::test]
    async fn non_positive_price_fails() {
        for price in [0, -1] {
            let repos = repositories(true, true, true, price).await;
            let service = repos.service();

            let err = order_error(service.create_order(&order_request()).await.unwrap_err());

            assert_eq!(err, OrderError::NoValidProducts);
        }
    }

    #[tokio::test]
    async fn one_bad_product_among_good_ones_fails() {
        let repos = repositories(true, true, true, 100).await;
        repos
            .products
            .insert(Product::new("free", Money::zero()))
            .await;
        let service = repos.service();

        let request = order_request().with_product("free", 1);
        let err = order_error(service.create_order(&request).await.unwrap_err());

        assert_eq!(err, OrderError::NoValidProducts);
    }
}

mod scenarios {
    use super::*;

    #[tokio::test]
    async fn valid_request_creates_order_and_persists_once() {
        let repos = repositories(true, true, true, 100).await;
        let service = repos.service();

        let order = service.create_order(&order_request()).await.unwrap();

        assert_eq!(order.id(), &OrderId::new("order123"));
        assert_eq!(order.store(), &Store::new("store1", true));
        assert_eq!(order.discount(), Some(&Discount::new("DISC10", true)));
        assert_eq!(order.customer(), &Customer::new("cust1", true));
        assert_eq!(order.product_count(), 1);
        assert_eq!(order.products()[0].price, Money::from_cents(100));
        assert_eq!(repos.orders.write_count(), 1);
        assert_eq!(repos.orders.get("order123").await, Some(order));
    }

    #[tokio::test]
    async fn inactive_store_is_reported_and_never_persisted() {
        let repos = repositories(true, false, true, 100).await;
        let service = repos.service();

        let err = service.create_order(&order_request()).await.unwrap_err();

        assert_eq!(err.to_string(), "Store is deActivated");
        assert_eq!(repos.orders.write_count(), 0);
    }

    #[tokio::test]
    async fn empty_product_list_is_rejected() {
        let repos = repositories(true, true, true, 100).await;
        let service = repos.service();
        let request = OrderRequest::new("order123", "cust1", "store1").with_discount("DISC10");

        let err = service.create_order(&request).await.unwrap_err();

        assert_eq!(err.to_string(), "AtLeast one product is required.");
        assert_eq!(repos.orders.write_count(), 0);
    }

    #[tokio::test]
    async fn line_item_order_is_preserved() {
        let repos = repositories(true, true, true, 100).await;
        repos
            .products
            .insert(Product::new("prod2", Money::from_cents(200)))
            .await;
        let service = repos.service();

        let request = OrderRequest::new("order123", "cust1", "store1")
            .with_product("prod2", 1)
            .with_product("prod1", 4)
            .with_product("prod2", 2);
        let order = service.create_order(&request).await.unwrap();

        let ids: Vec<_> = order.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["prod2", "prod1", "prod2"]);
    }
}

mod modification {
    use super::*;

    #[tokio::test]
    async fn update_reuses_id_and_replaces_associations() {
        let repos = repositories(true, true, true, 100).await;
        repos.customers.insert(Customer::new("cust2", true)).await;
        repos.stores.insert(Store::new("store2", true)).await;
        repos
            .products
            .insert(Product::new("prod2", Money::from_cents(300)))
            .await;
        let service = repos.service();
        service.create_order(&order_request()).await.unwrap();

        let request = OrderRequest::new("order123", "cust2", "store2").with_product("prod2", 1);
        let order = service.update_order(&request).await.unwrap();

        assert_eq!(order.id().as_str(), "order123");
        assert_eq!(order.customer().id.as_str(), "cust2");
        assert_eq!(order.store().id.as_str(), "store2");
        assert!(order.discount().is_none());
        assert_eq!(
            order.products(),
            &[Product::new("prod2", Money::from_cents(300))]
        );

        let stored = service.get_order(&OrderId::new("order123")).await.unwrap();
        assert_eq!(stored, order);
        assert_eq!(repos.orders.len().await, 1);
    }

    #[tokio::test]
    async fn rejected_update_leaves_stored_order_untouched() {
        let repos = repositories(true, true, true, 100).await;
        repos.customers.insert(Customer::new("gone", false)).await;
        let service = repos.service();
        let original = service.create_order(&order_request()).await.unwrap();

        let request = OrderRequest::new("order123", "gone", "store1").with_product("prod1", 1);
        let err = order_error(service.update_order(&request).await.unwrap_err());

        assert!(matches!(err, OrderError::InactiveCustomer { .. }));
        assert_eq!(repos.orders.write_count(), 1);
        assert_eq!(repos.orders.get("order123").await, Some(original));
    }

    #[tokio::test]
    async fn update_with_empty_products_is_rejected_and_not_persisted() {
        let repos = repositories(true, true, true, 100).await;
        let service = repos.service();
        let original = service.create_order(&order_request()).await.unwrap();

        let request = OrderRequest::new("order123", "cust1", "store1").with_discount("DISC10");
        let err = order_error(service.update_order(&request).await.unwrap_err());

        assert_eq!(err, OrderError::NoValidProducts);
        assert_eq!(err.to_string(), "AtLeast one product is required.");
        assert_eq!(repos.orders.write_count(), 1);
        assert_eq!(repos.orders.get("order123").await, Some(original));
    }

    #[tokio::test]
    async fn update_to_inactive_store_is_rejected_and_not_persisted() {
        let repos = repositories(true, true, true, 100).await;
        repos.stores.insert(Store::new("closed", false)).await;
        let service = repos.service();
        let original = service.create_order(&order_request()).await.unwrap();

        let request = OrderRequest::new("order123", "cust1", "closed").with_product("prod1", 1);
        let err = order_error(service.update_order(&request).await.unwrap_err());

        assert_eq!(
            err,
            OrderError::InactiveStore {
                store_id: StoreId::new("closed")
            }
        );
        assert_eq!(repos.orders.write_count(), 1);
        assert_eq!(repos.orders.get("order123").await, Some(original));
    }

    #[tokio::test]
    async fn update_of_missing_order_is_a_repository_failure() {
        let repos = repositories(true, true, true, 100).await;
        let service = repos.service();

        let err = service.update_order(&order_request()).await.unwrap_err();

        assert!(matches!(err, DomainError::Repository(_)));
        assert_eq!(err.to_string(), "Order not found: order123");
    }
}
