//! End-to-end tests for the storefront REST API
//!
//! These exercise the complete flow from HTTP request to response against
//! the seeded in-memory stores: catalog reads and filters, product creation,
//! order submission, and the error bodies of the API contract.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use storefront::prelude::*;

fn test_server() -> TestServer {
    let app = ServerBuilder::new().with_seed_catalog().build();
    TestServer::new(app)
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_status_and_version() {
    let server = test_server();

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["environment"], "development");
    assert!(body["timestamp"].is_string());
}

// =============================================================================
// Catalog reads
// =============================================================================

#[tokio::test]
async fn test_list_products_returns_full_seed() {
    let server = test_server();

    let response = server.get("/api/products").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 6);
    assert_eq!(body["products"].as_array().unwrap().len(), 6);
    assert_eq!(body["products"][0]["name"], "Wireless Bluetooth Headphones");
    assert_eq!(body["products"][0]["price"], json!(199.99));
}

#[tokio::test]
async fn test_category_filter_is_case_insensitive() {
    let server = test_server();

    let response = server.get("/api/products?category=electronics").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 3);
    for product in body["products"].as_array().unwrap() {
        assert_eq!(product["category"], "Electronics");
    }
}

#[tokio::test]
async fn test_featured_filter() {
    let server = test_server();

    let response = server.get("/api/products?featured=true").await;
    let body: Value = response.json();
    assert_eq!(body["total"], 3);

    let response = server.get("/api/products?featured=false").await;
    let body: Value = response.json();
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_search_matches_name_and_description() {
    let server = test_server();

    let response = server.get("/api/products?search=COFFEE").await;
    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["name"], "Premium Coffee Maker");

    // "noise cancellation" appears only in a description
    let response = server.get("/api/products?search=noise").await;
    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["id"], "1");
}

#[tokio::test]
async fn test_filters_apply_conjunctively() {
    let server = test_server();

    let response = server
        .get("/api/products?category=Electronics&featured=true&search=speaker")
        .await;
    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["name"], "Bluetooth Speaker");

    // Same predicates, contradictory combination
    let response = server
        .get("/api/products?category=Sports&featured=true")
        .await;
    let body: Value = response.json();
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_get_product_by_id() {
    let server = test_server();

    let response = server.get("/api/products/3").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Premium Coffee Maker");
    assert_eq!(body["stock"], 25);

    let response = server.get("/api/products/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "Product not found" }));
}

#[tokio::test]
async fn test_categories_are_distinct() {
    let server = test_server();

    let response = server.get("/api/categories").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body["categories"],
        json!(["Electronics", "Wearables", "Appliances", "Sports"])
    );
}

// =============================================================================
// Catalog writes
// =============================================================================

#[tokio::test]
async fn test_create_product_gets_fresh_id() {
    let server = test_server();

    let response = server
        .post("/api/products")
        .json(&json!({
            "name": "Mechanical Keyboard",
            "description": "Hot-swappable switches",
            "price": 129.50,
            "category": "Electronics",
            "stock": 15
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["id"], "7");
    assert_eq!(body["price"], json!(129.5));
    assert_eq!(body["featured"], false);
    assert!(body["createdAt"].is_string());

    // The new product is visible to subsequent reads
    let response = server.get("/api/products/7").await;
    response.assert_status_ok();

    let response = server.get("/api/products").await;
    let body: Value = response.json();
    assert_eq!(body["total"], 7);
}

#[tokio::test]
async fn test_create_product_missing_fields_is_400() {
    let server = test_server();

    for body in [
        json!({ "price": 10, "category": "Misc" }),
        json!({ "name": "Thing", "category": "Misc" }),
        json!({ "name": "Thing", "price": 10 }),
        json!({}),
    ] {
        let response = server.post("/api/products").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let error: Value = response.json();
        assert_eq!(
            error,
            json!({ "error": "Missing required fields: name, price, category" })
        );
    }
}

#[tokio::test]
async fn test_create_product_coerces_lenient_fields() {
    let server = test_server();

    let response = server
        .post("/api/products")
        .json(&json!({
            "name": "Mystery Box",
            "price": "19.99",
            "category": "Misc",
            "stock": "not a number"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["price"], json!(19.99));
    assert_eq!(body["stock"], 0);
    assert_eq!(body["description"], "");
    assert_eq!(body["imageUrl"], "/images/placeholder.jpg");
}

#[tokio::test]
async fn test_create_product_malformed_json_is_400() {
    let server = test_server();

    let response = server
        .post("/api/products")
        .content_type("application/json")
        .text("{not json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn test_submit_order_returns_created_pending_order() {
    let server = test_server();

    let response = server
        .post("/api/orders")
        .json(&json!({
            "items": [{ "productId": "1", "name": "X", "price": 100, "quantity": 2 }],
            "totalAmount": 200,
            "customerInfo": { "name": "John Doe", "email": "john@example.com" }
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["id"], "1");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["totalAmount"], json!(200.0));
    assert_eq!(body["items"][0]["productId"], "1");
    assert_eq!(body["customerInfo"]["name"], "John Doe");
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_submit_order_does_not_decrement_stock() {
    let server = test_server();

    let response = server
        .post("/api/orders")
        .json(&json!({
            "items": [{ "productId": "1", "name": "Wireless Bluetooth Headphones", "price": 199.99, "quantity": 9999 }],
            "totalAmount": 1999900.01,
            "customerInfo": { "name": "Bulk Buyer" }
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    // Documented demo behavior: overselling never touches the catalog
    let response = server.get("/api/products/1").await;
    let body: Value = response.json();
    assert_eq!(body["stock"], 50);
}

#[tokio::test]
async fn test_submit_order_validation_failures() {
    let server = test_server();

    let response = server
        .post("/api/orders")
        .json(&json!({ "items": [], "totalAmount": 200, "customerInfo": { "name": "J" } }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "Order must contain items" }));

    let response = server
        .post("/api/orders")
        .json(&json!({
            "items": [{ "productId": "1", "name": "X", "price": 100, "quantity": 2 }],
            "totalAmount": 200
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "Missing required order information" }));
}

#[tokio::test]
async fn test_list_and_get_orders() {
    let server = test_server();

    let response = server.get("/api/orders").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["orders"], json!([]));

    for _ in 0..2 {
        server
            .post("/api/orders")
            .json(&json!({
                "items": [{ "productId": "2", "name": "Smart Fitness Watch", "price": 299.99, "quantity": 1 }],
                "totalAmount": 323.99,
                "customerInfo": { "name": "Jane Doe", "email": "jane@example.com" }
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/api/orders").await;
    let body: Value = response.json();
    assert_eq!(body["orders"].as_array().unwrap().len(), 2);
    assert_eq!(body["orders"][1]["id"], "2");

    let response = server.get("/api/orders/2").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "pending");

    let response = server.get("/api/orders/42").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "Order not found" }));
}

// =============================================================================
// Checkout round trip
// =============================================================================

#[tokio::test]
async fn test_checkout_submission_round_trip() {
    let server = test_server();

    // Client side: pick products off the live catalog into a cart
    let response = server.get("/api/products/1").await;
    let headphones: Product = response.json();
    let response = server.get("/api/products/6").await;
    let yoga_mat: Product = response.json();

    let mut cart = Cart::new();
    cart.add(&headphones);
    cart.add(&headphones);
    cart.add(&yoga_mat);
    assert_eq!(cart.total_items(), 3);

    let form = CheckoutForm {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62704".to_string(),
        card_number: "4242424242424242".to_string(),
        expiry_date: "12/30".to_string(),
        cvv: "123".to_string(),
    };
    let submission = form.into_submission(&cart).expect("checkout should pass");

    let response = server.post("/api/orders").json(&submission).await;
    response.assert_status(StatusCode::CREATED);

    let order: Value = response.json();
    assert_eq!(order["status"], "pending");
    assert_eq!(order["items"].as_array().unwrap().len(), 2);
    // (2 * 199.99 + 49.99) * 1.08
    assert_eq!(order["totalAmount"], json!(485.9676));
    assert_eq!(order["customerInfo"]["address"]["zipCode"], "62704");

    // Payment fields never reach the server
    assert!(order["customerInfo"].get("cardNumber").is_none());

    // On submission success the client clears the cart
    cart.clear();
    assert!(cart.is_empty());
}

// =============================================================================
// Fallback
// =============================================================================

#[tokio::test]
async fn test_unmatched_route_is_generic_404() {
    let server = test_server();

    let response = server.get("/api/warehouse").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "API route not found" }));

    let response = server.get("/totally/elsewhere").await;
    response.assert_status(StatusCode::NOT_FOUND);
}
