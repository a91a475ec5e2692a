use crate::app_system::OrderSystem;
use crate::clients::{CatalogClient, OrderClient, UserClient};

/// Handles the routes need. Cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    pub catalog: CatalogClient,
    pub orders: OrderClient,
}

impl AppState {
    pub fn new(system: &OrderSystem) -> Self {
        Self {
            users: system.user_client.clone(),
            catalog: system.catalog_client.clone(),
            orders: system.order_client.clone(),
        }
    }
}
