use serde::{Deserialize, Serialize};
use serde_json::json;
use snackbar_gateway::mock::MockTransport;
use snackbar_gateway::{ApiResource, Gateway, GatewayError, Method, StatusCode};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Snack {
    id: u32,
    name: String,
    price: f64,
}

impl ApiResource for Snack {
    type Id = u32;
    const COLLECTION: &'static str = "Snacks";
}

fn harness() -> (MockTransport, Gateway) {
    let mock = MockTransport::new();
    let gateway = Gateway::new(Arc::new(mock.clone()));
    (mock, gateway)
}

#[tokio::test]
async fn get_distinguishes_found_absent_and_failed() {
    let (mock, gateway) = harness();
    let snacks = gateway.endpoint::<Snack>();

    mock.expect_get("api/Snacks/1")
        .return_json(StatusCode::OK, json!({"Id": 1, "Name": "Cola", "Price": 1.5}));
    mock.expect_get("api/Snacks/2")
        .return_status(StatusCode::NOT_FOUND);
    mock.expect_get("api/Snacks/3")
        .return_status(StatusCode::INTERNAL_SERVER_ERROR);

    let found = snacks.get(&1).await.unwrap();
    assert_eq!(
        found,
        Some(Snack {
            id: 1,
            name: "Cola".to_string(),
            price: 1.5
        })
    );

    // Genuine absence is a value, not an error and not a default instance.
    assert_eq!(snacks.get(&2).await.unwrap(), None);

    // A failing remote is an error, never mistaken for absence.
    let failed = snacks.get(&3).await;
    assert!(matches!(
        failed,
        Err(GatewayError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            ..
        })
    ));
}

#[tokio::test]
async fn get_treats_null_body_as_absent() {
    let (mock, gateway) = harness();
    let snacks = gateway.endpoint::<Snack>();

    mock.expect_get("api/Snacks/9")
        .return_json(StatusCode::OK, json!(null));

    assert_eq!(snacks.get(&9).await.unwrap(), None);
}

#[tokio::test]
async fn list_returns_collection_and_propagates_failures() {
    let (mock, gateway) = harness();
    let snacks = gateway.endpoint::<Snack>();

    mock.expect_get("api/Snacks/").return_json(
        StatusCode::OK,
        json!([
            {"Id": 1, "Name": "Cola", "Price": 1.5},
            {"Id": 2, "Name": "Chips", "Price": 2.25}
        ]),
    );
    mock.expect_get("api/Snacks/").return_json(StatusCode::OK, json!(null));
    mock.expect_get("api/Snacks/")
        .return_error("connection refused");

    let items = snacks.list().await.unwrap();
    assert_eq!(items.len(), 2);

    // Null body is a legitimately empty collection.
    assert!(snacks.list().await.unwrap().is_empty());

    // An unreachable remote is not an empty collection.
    assert!(matches!(
        snacks.list().await,
        Err(GatewayError::Transport { .. })
    ));
}

#[tokio::test]
async fn create_posts_pascal_case_payload_and_parses_echo() {
    let (mock, gateway) = harness();
    let snacks = gateway.endpoint::<Snack>();

    mock.expect_post("api/Snacks/").return_json(
        StatusCode::CREATED,
        json!({"Id": 5, "Name": "Pretzel", "Price": 3.0}),
    );

    let draft = Snack {
        id: 0,
        name: "Pretzel".to_string(),
        price: 3.0,
    };
    let created = snacks.create(&draft).await.unwrap();
    assert_eq!(created.map(|s| s.id), Some(5));

    let log = mock.requests();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, Method::POST);
    assert_eq!(
        log[0].body,
        Some(json!({"Id": 0, "Name": "Pretzel", "Price": 3.0}))
    );
}

#[tokio::test]
async fn update_rereads_canonical_version() {
    let (mock, gateway) = harness();
    let snacks = gateway.endpoint::<Snack>();

    mock.expect_put("api/Snacks/5").return_status(StatusCode::OK);
    mock.expect_get("api/Snacks/5").return_json(
        StatusCode::OK,
        json!({"Id": 5, "Name": "Pretzel", "Price": 2.75}),
    );

    let input = Snack {
        id: 5,
        name: "Pretzel".to_string(),
        price: 3.0,
    };
    let canonical = snacks.update(&5, &input).await.unwrap();
    // The server's version wins, not the input we sent.
    assert_eq!(canonical.price, 2.75);
    mock.verify();
}

#[tokio::test]
async fn update_propagates_failure_instead_of_echoing_input() {
    let (mock, gateway) = harness();
    let snacks = gateway.endpoint::<Snack>();

    mock.expect_put("api/Snacks/5")
        .return_status(StatusCode::BAD_REQUEST);

    let input = Snack {
        id: 5,
        name: "Pretzel".to_string(),
        price: 3.0,
    };
    let result = snacks.update(&5, &input).await;
    assert!(matches!(
        result,
        Err(GatewayError::Status {
            status: StatusCode::BAD_REQUEST,
            ..
        })
    ));

    // Same for a vanished entity on the follow-up read.
    mock.expect_put("api/Snacks/5").return_status(StatusCode::OK);
    mock.expect_get("api/Snacks/5")
        .return_status(StatusCode::NOT_FOUND);
    let result = snacks.update(&5, &input).await;
    assert!(matches!(result, Err(GatewayError::NotFound(_))));
}

#[tokio::test]
async fn delete_propagates_failures() {
    let (mock, gateway) = harness();
    let snacks = gateway.endpoint::<Snack>();

    mock.expect_delete("api/Snacks/5")
        .return_status(StatusCode::NO_CONTENT);
    mock.expect_delete("api/Snacks/6")
        .return_status(StatusCode::NOT_FOUND);

    snacks.delete(&5).await.unwrap();
    assert!(matches!(
        snacks.delete(&6).await,
        Err(GatewayError::NotFound(_))
    ));
}

#[tokio::test]
async fn exists_reports_true_absence() {
    let (mock, gateway) = harness();
    let snacks = gateway.endpoint::<Snack>();

    mock.expect_get("api/Snacks/1").return_json(
        StatusCode::OK,
        json!({"Id": 1, "Name": "Cola", "Price": 1.5}),
    );
    mock.expect_get("api/Snacks/2")
        .return_status(StatusCode::NOT_FOUND);

    assert!(snacks.exists(&1).await.unwrap());
    assert!(!snacks.exists(&2).await.unwrap());
}
