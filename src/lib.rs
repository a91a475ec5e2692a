//! # Storefront
//!
//! An order-taking storefront built from small tokio actors:
//!
//! - **Stores** - users, catalog and order ledger, each a [`ResourceActor`](actor_framework::ResourceActor)
//!   owning one insertion-ordered collection
//! - **Workflow** - [`OrderService`](order_actor::OrderService), a root actor that validates the user,
//!   reserves stock, and records the order as one serialized step
//! - **System** - [`OrderSystem`](app_system::OrderSystem) starts, wires and stops every actor
//! - **HTTP** - an axum router over the clients, see [`http::build_router`]
//!
//! All state lives in memory and is lost on restart.

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod http;
pub mod messages;
pub mod order_actor;
pub mod product_actor;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
