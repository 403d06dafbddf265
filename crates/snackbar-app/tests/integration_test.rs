//! Full-system integration tests over a mocked transport.

use rust_decimal_macros::dec;
use serde_json::json;
use snackbar_app::draft::SessionId;
use snackbar_app::lifecycle::SnackbarSystem;
use snackbar_app::model::{CustomerId, OrderId, ProductId};
use snackbar_gateway::mock::MockTransport;
use snackbar_gateway::{ApiClient, StatusCode};
use std::sync::Arc;

fn system_with_mock() -> (MockTransport, SnackbarSystem) {
    let mock = MockTransport::new();
    let system = SnackbarSystem::with_transport(Arc::new(mock.clone()), 32);
    (mock, system)
}

fn product_json(id: u32, price: f64) -> serde_json::Value {
    json!({
        "Id": id,
        "Name": format!("Product {id}"),
        "Price": price,
        "Discount": 0,
        "Stock": 10
    })
}

fn order_json(id: u32, favorited: bool) -> serde_json::Value {
    json!({
        "Id": id,
        "Cost": 2.5,
        "DateOfOrder": "2024-03-01T12:00:00Z",
        "IsFavorited": favorited,
        "Status": "Not Ordered",
        "CustomerId": 4,
        "Products": null
    })
}

#[tokio::test]
async fn orders_overview_splits_out_favorites() {
    let (mock, system) = system_with_mock();

    mock.expect_get("api/Customers/Authentication/auth-1").return_json(
        StatusCode::OK,
        json!({"Id": 4, "AuthenticationId": "auth-1", "FirstName": "Alice"}),
    );
    mock.expect_get("api/Orders/CustomerOrders/4").return_json(
        StatusCode::OK,
        json!([order_json(1, false), order_json(2, true), order_json(3, true)]),
    );

    let overview = system
        .workflow
        .orders_overview("auth-1")
        .await
        .expect("overview failed");

    assert_eq!(overview.customer.id, CustomerId(4));
    assert_eq!(overview.orders.len(), 3);
    let favorite_ids: Vec<_> = overview.favorites.iter().map(|o| o.id).collect();
    assert_eq!(favorite_ids, vec![OrderId(2), OrderId(3)]);

    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn create_order_view_combines_draft_and_catalog() {
    let (mock, system) = system_with_mock();
    let session = SessionId::new("session-1");

    mock.expect_get("api/Products/1")
        .return_json(StatusCode::OK, product_json(1, 2.5));
    mock.expect_get("api/Products/").return_json(
        StatusCode::OK,
        json!([product_json(1, 2.5), product_json(2, 1.0)]),
    );

    system.workflow.add_product(&session, ProductId(1)).await.unwrap();

    let view = system
        .workflow
        .create_order_view(&session)
        .await
        .expect("view failed");

    assert_eq!(view.draft.products.len(), 1);
    assert_eq!(view.catalog.len(), 2);

    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn order_details_resolve_customer_and_lines() {
    let (mock, system) = system_with_mock();

    mock.expect_get("api/Orders/SpecificOrder/7")
        .return_json(StatusCode::OK, order_json(7, false));
    mock.expect_get("api/OrderProducts/7").return_json(
        StatusCode::OK,
        json!([{"OrderId": 7, "ProductId": 1, "Amount": 1}]),
    );
    mock.expect_get("api/Products/1")
        .return_json(StatusCode::OK, product_json(1, 2.5));
    mock.expect_get("api/Customers/4").return_json(
        StatusCode::OK,
        json!({"Id": 4, "AuthenticationId": "auth-1"}),
    );

    let details = system
        .workflow
        .order_details(OrderId(7))
        .await
        .expect("details failed");

    assert_eq!(details.order.id, OrderId(7));
    assert_eq!(details.customer.as_ref().map(|c| c.id), Some(CustomerId(4)));
    assert_eq!(details.lines.len(), 1);
    assert_eq!(details.lines[0].product.id, ProductId(1));

    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn save_transaction_verifies_the_order_and_posts() {
    let (mock, system) = system_with_mock();

    mock.expect_get("api/Orders/SpecificOrder/7")
        .return_json(StatusCode::OK, order_json(7, false));
    mock.expect_get("api/Orders/SpecificOrder/7")
        .return_json(StatusCode::OK, order_json(7, false));
    mock.expect_post("api/Transactions/")
        .return_status(StatusCode::CREATED);

    let order = system
        .orders
        .get(&OrderId(7))
        .await
        .unwrap()
        .expect("order missing");
    let transaction = system.workflow.promote_to_transaction(&order);

    system
        .workflow
        .save_transaction(OrderId(7), transaction)
        .await
        .expect("save_transaction failed");

    let posted = mock
        .requests()
        .into_iter()
        .find(|r| r.path == "api/Transactions/")
        .expect("no transaction posted");
    let body = posted.body.unwrap();
    assert_eq!(body["Cost"], json!(2.5));
    assert_eq!(body["OrderId"], json!(7));

    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn save_transaction_for_missing_order_fails() {
    let (mock, system) = system_with_mock();

    mock.expect_get("api/Orders/SpecificOrder/7")
        .return_json(StatusCode::OK, order_json(7, false));
    let order = system
        .orders
        .get(&OrderId(7))
        .await
        .unwrap()
        .expect("order missing");
    let transaction = system.workflow.promote_to_transaction(&order);

    mock.expect_get("api/Orders/SpecificOrder/404")
        .return_status(StatusCode::NOT_FOUND);

    let result = system
        .workflow
        .save_transaction(OrderId(404), transaction)
        .await;
    assert!(result.is_err());

    system.shutdown().await.unwrap();
}

/// Two sessions drive the draft store in interleaved order and never see
/// each other's products.
#[tokio::test]
async fn concurrent_sessions_are_isolated() {
    let (mock, system) = system_with_mock();
    let alice = SessionId::new("alice");
    let bob = SessionId::new("bob");

    mock.expect_get("api/Products/1")
        .return_json(StatusCode::OK, product_json(1, 2.5));
    mock.expect_get("api/Products/2")
        .return_json(StatusCode::OK, product_json(2, 1.0));
    mock.expect_get("api/Products/1")
        .return_json(StatusCode::OK, product_json(1, 2.5));
    // Bob removes a product only Alice has: his draft must stay untouched.
    mock.expect_get("api/Products/1")
        .return_json(StatusCode::OK, product_json(1, 2.5));

    system.workflow.add_product(&alice, ProductId(1)).await.unwrap();
    system.workflow.add_product(&bob, ProductId(2)).await.unwrap();
    system.workflow.add_product(&alice, ProductId(1)).await.unwrap();
    system.workflow.remove_product(&bob, ProductId(1)).await.unwrap();

    let alice_draft = system.workflow.current_draft(&alice).await.unwrap();
    let bob_draft = system.workflow.current_draft(&bob).await.unwrap();

    let alice_ids: Vec<_> = alice_draft.products.iter().map(|p| p.id).collect();
    let bob_ids: Vec<_> = bob_draft.products.iter().map(|p| p.id).collect();
    assert_eq!(alice_ids, vec![ProductId(1), ProductId(1)]);
    assert_eq!(bob_ids, vec![ProductId(2)]);
    assert_eq!(alice_draft.cost(), dec!(5.00));
    assert_eq!(bob_draft.cost(), dec!(1.00));

    // Cancelling one session leaves the other intact.
    system.workflow.cancel(&alice).await.unwrap();
    assert!(system.workflow.current_draft(&alice).await.unwrap().is_empty());
    assert_eq!(
        system.workflow.current_draft(&bob).await.unwrap().products.len(),
        1
    );

    mock.verify();
    system.shutdown().await.unwrap();
}

/// Shutdown closes the draft actor cleanly even with unfinished drafts.
#[tokio::test]
async fn shutdown_is_graceful_with_open_drafts() {
    let (mock, system) = system_with_mock();
    let session = SessionId::new("session-1");

    mock.expect_get("api/Products/1")
        .return_json(StatusCode::OK, product_json(1, 2.5));
    system.workflow.add_product(&session, ProductId(1)).await.unwrap();

    system.shutdown().await.expect("shutdown failed");
}
