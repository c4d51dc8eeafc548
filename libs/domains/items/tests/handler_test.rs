//! Handler tests for the Items domain

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use test_utils::assertions::assert_id_assigned;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = ItemService::new(InMemoryItemRepository::new());
    handlers::router(service, "labellaStoreAppItem")
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Repository that rejects every save the way Postgres reports a dangling
/// `item_type_id`.
struct ForeignKeyRejectingRepository;

#[async_trait]
impl ItemRepository for ForeignKeyRejectingRepository {
    async fn save(&self, item: Item) -> ItemResult<Item> {
        Err(ItemError::Validation(format!(
            "Unknown item type: {}",
            item.item_type_id.unwrap_or_default()
        )))
    }

    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: i64) -> ItemResult<Option<Item>> {
        Ok(None)
    }

    async fn delete_by_id(&self, _id: i64) -> ItemResult<()> {
        Ok(())
    }
}

async fn create(app: &Router, body: Value) -> Item {
    let response = app.clone().oneshot(request("POST", "/", Some(body))).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_item_returns_201() {
    let builder = TestDataBuilder::from_test_name("item_create");
    let name = builder.name("item", "drill");
    let price = builder.price();

    let response = app()
        .oneshot(request(
            "POST",
            "/",
            Some(json!({ "name": name, "price": price, "item_type_id": 3 })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()["location"], "/api/items/1");
    assert_eq!(
        response.headers()["x-labellastoreappitem-alert"],
        "A new labellaStoreAppItemItem is created with identifier 1"
    );

    let item: Item = json_body(response.into_body()).await;
    assert_id_assigned(item.id, "created item");
    assert_eq!(item.name, name);
    assert_eq!(item.price, Some(price));
    assert_eq!(item.item_type_id, Some(3));
}

#[tokio::test]
async fn test_create_with_id_is_rejected() {
    let response = app()
        .oneshot(request("POST", "/", Some(json!({ "id": 1, "name": "Drill" }))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["x-labellastoreappitem-error"], "error.idexists");
    assert_eq!(
        response.headers()["x-labellastoreappitem-params"],
        "labellaStoreAppItemItem"
    );

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "A new item cannot already have an ID");
}

#[tokio::test]
async fn test_create_rejects_negative_price() {
    let response = app()
        .oneshot(request("POST", "/", Some(json!({ "name": "Drill", "price": -1.0 }))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["price"].is_array());
}

#[tokio::test]
async fn test_update_without_id_is_rejected() {
    let response = app()
        .oneshot(request("PUT", "/", Some(json!({ "name": "Drill" }))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["x-labellastoreappitem-error"], "error.idnull");
}

#[tokio::test]
async fn test_update_then_get() {
    let app = app();
    let created = create(&app, json!({ "name": "Drill", "price": 10.0 })).await;
    let id = assert_id_assigned(created.id, "created item");

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            "/",
            Some(json!({ "id": id, "name": "Drill", "price": 12.5, "item_type_id": 2 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["x-labellastoreappitem-params"],
        id.to_string().as_str()
    );

    let response = app
        .oneshot(request("GET", &format!("/{}", id), None))
        .await
        .unwrap();
    let fetched: Item = json_body(response.into_body()).await;
    assert_eq!(fetched.price, Some(12.5));
    assert_eq!(fetched.item_type_id, Some(2));
}

#[tokio::test]
async fn test_update_unknown_id_saves_under_new_id() {
    let response = app()
        .oneshot(request("PUT", "/", Some(json!({ "id": 77, "name": "Drill" }))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-labellastoreappitem-params"], "77");
    let saved: Item = json_body(response.into_body()).await;
    assert_eq!(saved, Item::new("Drill").with_id(1));
}

#[tokio::test]
async fn test_unknown_item_type_is_400() {
    let service = ItemService::new(ForeignKeyRejectingRepository);
    let app = handlers::router(service, "labellaStoreAppItem");

    let response = app
        .oneshot(request(
            "POST",
            "/",
            Some(json!({ "name": "Drill", "item_type_id": 404 })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!response.headers().contains_key("x-labellastoreappitem-error"));
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "BAD_REQUEST");
    assert_eq!(body["message"], "Invalid input: Unknown item type: 404");
}

#[tokio::test]
async fn test_list_after_creates() {
    let app = app();
    for n in 0..4 {
        create(&app, json!({ "name": format!("item-{}", n) })).await;
    }

    let response = app.oneshot(request("GET", "/", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 4);
}

#[tokio::test]
async fn test_get_after_create_equals_created() {
    let app = app();
    let created = create(&app, json!({ "name": "Saw", "description": "Hand saw" })).await;
    let id = assert_id_assigned(created.id, "created item");

    let response = app
        .oneshot(request("GET", &format!("/{}", id), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Item = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = app();
    let created = create(&app, json!({ "name": "Saw" })).await;
    let id = assert_id_assigned(created.id, "created item");

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request("GET", &format!("/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_is_204() {
    let response = app().oneshot(request("DELETE", "/404", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_invalid_path_id_is_400() {
    let response = app().oneshot(request("DELETE", "/one", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
}
