use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(server::startup::build_app(db))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

fn price_of(v: &Value) -> Decimal {
    match v {
        Value::String(s) => s.parse().expect("decimal string"),
        other => other.to_string().parse().expect("decimal number"),
    }
}

/// Menu group and product the scenarios build on; returns their ids.
async fn seed(app: &Router) -> anyhow::Result<(i64, i64)> {
    let (status, group) = send(app, "POST", "/api/menu-groups", Some(json!({"name": "Sets"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let (status, product) = send(app, "POST", "/api/products", Some(json!({"name": "Burger", "price": "5.00"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    Ok((group["id"].as_i64().unwrap(), product["id"].as_i64().unwrap()))
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn test_create_menu_at_component_value() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (group_id, product_id) = seed(&app).await?;

    let (status, menu) = send(&app, "POST", "/api/menus", Some(json!({
        "name": "Set A",
        "price": "10.00",
        "menu_group_id": group_id,
        "menu_products": [{"product_id": product_id, "quantity": 2}]
    }))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(price_of(&menu["price"]), Decimal::new(1000, 2));
    assert_eq!(menu["menu_group_id"], json!(group_id));
    let items = menu["menu_products"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], json!(2));
    assert_eq!(items[0]["menu_id"], menu["id"]);
    assert_eq!(items[0]["product_id"], json!(product_id));
    Ok(())
}

#[tokio::test]
async fn test_price_over_component_value_is_rejected_without_writes() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (group_id, product_id) = seed(&app).await?;

    let (status, err) = send(&app, "POST", "/api/menus", Some(json!({
        "name": "Set A",
        "price": "10.01",
        "menu_group_id": group_id,
        "menu_products": [{"product_id": product_id, "quantity": 2}]
    }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], json!(1006));
    assert_eq!(err["error"], json!("Validation Error"));

    let (status, menus) = send(&app, "GET", "/api/menus", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(menus, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_unknown_references_are_rejected() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (group_id, product_id) = seed(&app).await?;

    let (status, err) = send(&app, "POST", "/api/menus", Some(json!({
        "name": "Ghost group", "price": "1.00", "menu_group_id": group_id + 1000,
        "menu_products": [{"product_id": product_id, "quantity": 1}]
    }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], json!(1004));

    let (status, err) = send(&app, "POST", "/api/menus", Some(json!({
        "name": "Ghost product", "price": "1.00", "menu_group_id": group_id,
        "menu_products": [{"product_id": product_id, "quantity": 1}, {"product_id": product_id + 1000, "quantity": 1}]
    }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], json!(1005));

    let (_, menus) = send(&app, "GET", "/api/menus", None).await?;
    assert_eq!(menus, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_list_returns_each_menu_with_its_items() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (group_id, product_id) = seed(&app).await?;
    let (_, fries) = send(&app, "POST", "/api/products", Some(json!({"name": "Fries", "price": "2.50"}))).await?;
    let fries_id = fries["id"].as_i64().unwrap();

    let (_, m1) = send(&app, "POST", "/api/menus", Some(json!({
        "name": "Single", "price": "5.00", "menu_group_id": group_id,
        "menu_products": [{"product_id": product_id, "quantity": 1}]
    }))).await?;
    let (_, m2) = send(&app, "POST", "/api/menus", Some(json!({
        "name": "Combo", "price": "7.00", "menu_group_id": group_id,
        "menu_products": [{"product_id": fries_id, "quantity": 1}, {"product_id": product_id, "quantity": 1}]
    }))).await?;

    let (status, menus) = send(&app, "GET", "/api/menus", None).await?;
    assert_eq!(status, StatusCode::OK);
    let menus = menus.as_array().unwrap();
    assert_eq!(menus.len(), 2);
    assert_eq!(menus[0]["id"], m1["id"]);
    assert_eq!(menus[1]["id"], m2["id"]);
    assert_eq!(menus[0]["menu_products"].as_array().unwrap().len(), 1);

    let combo: Vec<i64> = menus[1]["menu_products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["product_id"].as_i64().unwrap())
        .collect();
    assert_eq!(combo, vec![fries_id, product_id]);
    Ok(())
}

#[tokio::test]
async fn test_catalog_validation() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, _) = send(&app, "POST", "/api/menu-groups", Some(json!({"name": ""}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, err) = send(&app, "POST", "/api/products", Some(json!({"name": "Coupon", "price": "-1.00"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], json!(1002));

    let (_, products) = send(&app, "GET", "/api/products", None).await?;
    assert_eq!(products, json!([]));
    let (_, groups) = send(&app, "GET", "/api/menu-groups", None).await?;
    assert_eq!(groups, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_metrics_endpoint() -> anyhow::Result<()> {
    let app = build_app().await?;
    let req = Request::builder().uri("/metrics").body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let text = String::from_utf8(bytes.to_vec())?;
    assert!(text.contains("kitchenpos_menus_created_total"));
    Ok(())
}

#[tokio::test]
async fn test_malformed_bodies_get_json_errors() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (group_id, product_id) = seed(&app).await?;

    let (status, err) = send(&app, "POST", "/api/menus", Some(json!({
        "name": "Set A", "price": "abc", "menu_group_id": group_id,
        "menu_products": [{"product_id": product_id, "quantity": 1}]
    }))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["code"], json!(1000));
    assert_eq!(err["error"], json!("Invalid Request Body"));

    let (status, err) = send(&app, "POST", "/api/menus", Some(json!({"name": "Set A", "price": "1.00"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["code"], json!(1000));

    let (status, err) = send(&app, "POST", "/api/products", Some(json!({"name": "Fries"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["code"], json!(1000));
    Ok(())
}

#[tokio::test]
async fn test_prices_beyond_the_column_are_client_errors() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (group_id, product_id) = seed(&app).await?;

    let (status, err) = send(&app, "POST", "/api/products", Some(json!({"name": "Gold", "price": "1000000000000000000"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], json!(1008));

    let (status, err) = send(&app, "POST", "/api/menus", Some(json!({
        "name": "Set A", "price": "9.999", "menu_group_id": group_id,
        "menu_products": [{"product_id": product_id, "quantity": 2}]
    }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], json!(1008));

    let (_, menus) = send(&app, "GET", "/api/menus", None).await?;
    assert_eq!(menus, json!([]));
    Ok(())
}
