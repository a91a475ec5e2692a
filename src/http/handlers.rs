use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::{Order, Product, RequestedQuantities, User};
use super::{error::HttpError, state::AppState};

/// Order form fields are named `cantidad_<product name>`.
pub const QUANTITY_FIELD_PREFIX: &str = "cantidad_";

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    #[serde(default)]
    pub ci: String,
}

#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    #[serde(default)]
    pub codigo: String,
}

#[derive(Debug, Serialize)]
pub struct InventoryView {
    pub usuario: User,
    pub productos: Vec<Product>,
}

fn location(path: &str, key: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("{path}?{query}")
}

/// Decodes an urlencoded body regardless of its content type. A missing or
/// unreadable body yields no fields; a repeated field keeps its first value.
fn form_fields(body: &[u8]) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for (key, value) in form_urlencoded::parse(body) {
        fields.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }
    fields
}

fn requested_quantities(form: HashMap<String, String>) -> RequestedQuantities {
    form.into_iter()
        .filter_map(|(field, raw)| {
            field
                .strip_prefix(QUANTITY_FIELD_PREFIX)
                .map(|name| (name.to_string(), raw))
        })
        .collect()
}

pub async fn index() -> Json<Value> {
    Json(json!({
        "service": "storefront",
        "routes": {
            "POST /agregarUsuario": "register a user (form: nombre, ci)",
            "GET /inventario?ci=": "catalog for a user",
            "POST /inventario?ci=": "place an order (form: cantidad_<product>)",
            "GET /detallePedido?codigo=": "order detail",
            "GET /pago?codigo=": "mark an order paid",
        }
    }))
}

pub async fn register_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Redirect, HttpError> {
    let mut form = form_fields(&body);
    let name = form.remove("nombre").unwrap_or_default();
    let identifier = form.remove("ci").unwrap_or_default();
    let user = state.users.register(name, identifier).await?;
    Ok(Redirect::to(&location("/inventario", "ci", &user.identifier)))
}

pub async fn show_inventory(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<InventoryView>, HttpError> {
    let usuario = state.users.find_by_identifier(query.ci).await?;
    let productos = state.catalog.list_products().await?;
    Ok(Json(InventoryView { usuario, productos }))
}

pub async fn place_order(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
    body: Bytes,
) -> Result<Redirect, HttpError> {
    let order = state
        .orders
        .place_order(query.ci, requested_quantities(form_fields(&body)))
        .await?;
    Ok(Redirect::to(&location("/detallePedido", "codigo", &order.code)))
}

pub async fn order_detail(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<Order>, HttpError> {
    let order = state.orders.find_order(query.codigo).await?;
    Ok(Json(order))
}

pub async fn pay_order(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<Order>, HttpError> {
    let order = state.orders.mark_paid(query.codigo).await?;
    Ok(Json(order))
}
