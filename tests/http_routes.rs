//! Scenario: storefront routes driven in-process through the router.
//!
//! Each test starts a fresh actor system with the default catalog and calls
//! the router with `oneshot`; no socket is opened.

use axum::body::{Body, Bytes};
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use storefront::app_system::OrderSystem;
use storefront::domain::default_catalog;
use storefront::http::{build_router, AppState};
use storefront::order_actor::OrderCodeGenerator;
use tower::ServiceExt; // oneshot

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Harness {
    system: OrderSystem,
    router: axum::Router,
}

fn harness() -> Harness {
    let system = OrderSystem::start(16, default_catalog(), OrderCodeGenerator::seeded(100_000, 7))
        .expect("catalog seeds");
    let router = build_router(AppState::new(&system), "static");
    Harness { system, router }
}

struct Reply {
    status: StatusCode,
    location: Option<String>,
    body: Bytes,
}

async fn call(router: &axum::Router, req: Request<Body>) -> Reply {
    let resp = router.clone().oneshot(req).await.expect("oneshot failed");
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().expect("ascii location").to_string());
    let body = resp
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    Reply { status, location, body }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn parse_json(b: Bytes) -> serde_json::Value {
    serde_json::from_slice(&b).expect("body is not valid JSON")
}

async fn register(router: &axum::Router) {
    let reply = call(router, post_form("/agregarUsuario", "nombre=U1&ci=123")).await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn registration_redirects_to_inventory() {
    let h = harness();

    let reply = call(&h.router, post_form("/agregarUsuario", "nombre=U1&ci=123")).await;

    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some("/inventario?ci=123"));
    h.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn registration_without_fields_is_bad_request() {
    let h = harness();

    let reply = call(&h.router, post_form("/agregarUsuario", "nombre=U1")).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let json = parse_json(reply.body);
    assert_eq!(json["status"], "error");
    assert!(h.system.user_client.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn bodyless_registration_is_bad_request() {
    let h = harness();

    let reply = call(&h.router, post_empty("/agregarUsuario")).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(parse_json(reply.body)["status"], "error");
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inventory_lists_user_and_catalog() {
    let h = harness();
    register(&h.router).await;

    let reply = call(&h.router, get("/inventario?ci=123")).await;

    assert_eq!(reply.status, StatusCode::OK);
    let json = parse_json(reply.body);
    assert_eq!(json["usuario"]["ci"], "123");
    assert_eq!(json["usuario"]["nombres_completos"], "U1");
    let productos = json["productos"].as_array().expect("productos array");
    assert_eq!(productos.len(), 10);
    assert_eq!(productos[0]["nombre"], "Cerveza IPA");
    assert_eq!(productos[2]["cantidad"], 150);
}

#[tokio::test]
async fn inventory_for_unknown_user_is_not_found() {
    let h = harness();

    let reply = call(&h.router, get("/inventario?ci=999")).await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(parse_json(reply.body)["status"], "error");
}

// ---------------------------------------------------------------------------
// Ordering and payment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn order_then_detail_then_payment() {
    let h = harness();
    register(&h.router).await;

    let reply = call(
        &h.router,
        post_form("/inventario?ci=123", "cantidad_Cerveza+Lager=10&cantidad_Cerveza+Stout=0"),
    )
    .await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    let location = reply.location.expect("redirect location");
    assert!(location.starts_with("/detallePedido?codigo=ORD-"), "got {location}");

    let reply = call(&h.router, get(&location)).await;
    assert_eq!(reply.status, StatusCode::OK);
    let order = parse_json(reply.body);
    assert_eq!(order["pagado"], false);
    assert_eq!(order["usuario"]["ci"], "123");
    let lines = order["productos"].as_array().expect("productos array");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["nombre"], "Cerveza Lager");
    assert_eq!(lines[0]["cantidad"], 10);

    let code = order["codigo"].as_str().expect("codigo").to_string();
    let reply = call(&h.router, get(&format!("/pago?codigo={code}"))).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(parse_json(reply.body)["pagado"], true);

    let stock = h
        .system
        .catalog_client
        .check_stock("Cerveza Lager".into())
        .await
        .unwrap();
    assert_eq!(stock, 140);
}

#[tokio::test]
async fn order_for_unknown_user_is_not_found() {
    let h = harness();

    let reply = call(&h.router, post_form("/inventario?ci=999", "cantidad_Cerveza+Lager=1")).await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert!(h.system.ledger_client.list_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn bodyless_order_for_unknown_user_is_not_found() {
    let h = harness();

    let reply = call(&h.router, post_empty("/inventario?ci=999")).await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(parse_json(reply.body)["status"], "error");
}

#[tokio::test]
async fn bodyless_order_for_known_user_is_empty() {
    let h = harness();
    register(&h.router).await;

    let reply = call(&h.router, post_empty("/inventario?ci=123")).await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);

    let reply = call(&h.router, get(&reply.location.expect("redirect location"))).await;
    let order = parse_json(reply.body);
    assert!(order["productos"].as_array().expect("productos array").is_empty());
}

#[tokio::test]
async fn repeated_quantity_field_uses_first_value() {
    let h = harness();
    register(&h.router).await;

    let reply = call(
        &h.router,
        post_form("/inventario?ci=123", "cantidad_Cerveza+Lager=3&cantidad_Cerveza+Lager=7"),
    )
    .await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);

    let stock = h
        .system
        .catalog_client
        .check_stock("Cerveza Lager".into())
        .await
        .unwrap();
    assert_eq!(stock, 147);
}

#[tokio::test]
async fn unknown_order_code_is_not_found() {
    let h = harness();

    let reply = call(&h.router, get("/detallePedido?codigo=ORD-0")).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);

    let reply = call(&h.router, get("/pago?codigo=ORD-0")).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn index_describes_routes() {
    let h = harness();

    let reply = call(&h.router, get("/")).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(parse_json(reply.body)["service"], "storefront");
}
