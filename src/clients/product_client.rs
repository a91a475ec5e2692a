use tracing::{debug, instrument};
use crate::domain::{OrderLine, Product};
use crate::product_actor::{CatalogError, ProductAction, ProductActionResult};
use crate::actor_framework::ResourceClient;

/// Client for the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(CatalogClient, Product, CatalogError, product);

fn unexpected(result: ProductActionResult) -> CatalogError {
    CatalogError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}

impl CatalogClient {
    #[instrument(skip(self))]
    pub async fn check_stock(&self, name: String) -> Result<u32, CatalogError> {
        debug!("Sending request");
        match self.inner.perform_action(name, ProductAction::CheckStock).await? {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Decrements stock and returns the order line snapshot. `Ok(None)` means
    /// zero was requested and nothing changed.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, name: String, quantity: i64) -> Result<Option<OrderLine>, CatalogError> {
        debug!("Sending request");
        match self.inner.perform_action(name, ProductAction::ReserveStock(quantity)).await? {
            ProductActionResult::ReserveStock(line) => Ok(line),
            other => Err(unexpected(other)),
        }
    }

    /// Compensation for a reservation whose order could not be recorded.
    #[instrument(skip(self))]
    pub async fn release_stock(&self, name: String, quantity: u32) -> Result<u32, CatalogError> {
        debug!("Sending request");
        match self.inner.perform_action(name, ProductAction::ReleaseStock(quantity)).await? {
            ProductActionResult::ReleaseStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }
}
