use tracing::{error, info, instrument};

use crate::actor_framework::{FrameworkError, ResourceActor};
use crate::clients::{CatalogClient, LedgerClient, OrderClient, UserClient};
use crate::domain::{Order, Product, ProductCreate, User};
use crate::order_actor::{OrderCodeGenerator, OrderService};
use crate::product_actor::CatalogError;
use super::Config;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub user_client: UserClient,
    pub catalog_client: CatalogClient,
    pub ledger_client: LedgerClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    pub fn new(config: &Config, catalog: Vec<ProductCreate>) -> Result<Self, CatalogError> {
        Self::start(
            config.actor_buffer,
            catalog,
            OrderCodeGenerator::new(config.order_code_range),
        )
    }

    /// Start sub-actors first, then the order workflow with their clients.
    #[instrument(name = "order_system", skip(catalog, codes), fields(products = catalog.len()))]
    pub fn start(
        buffer_size: usize,
        catalog: Vec<ProductCreate>,
        mut codes: OrderCodeGenerator,
    ) -> Result<Self, CatalogError> {
        let mut handles = Vec::new();

        info!("Starting order system");

        let (user_actor, user_resource_client) = ResourceActor::<User>::new(buffer_size);
        let user_client = UserClient::new(user_resource_client);
        handles.push(tokio::spawn(user_actor.run()));

        let (mut catalog_actor, catalog_resource_client) = ResourceActor::<Product>::new(buffer_size);
        for product in catalog {
            catalog_actor.seed(product)?;
        }
        let catalog_client = CatalogClient::new(catalog_resource_client);
        handles.push(tokio::spawn(catalog_actor.run()));

        let (ledger_actor, ledger_resource_client) = ResourceActor::<Order>::new(buffer_size);
        let ledger_actor = ledger_actor.with_id_minter(move || codes.generate());
        let ledger_client = LedgerClient::new(ledger_resource_client);
        handles.push(tokio::spawn(ledger_actor.run()));

        let (order_service, order_client) = OrderService::new(
            buffer_size,
            user_client.clone(),
            catalog_client.clone(),
            ledger_client.clone(),
        );
        handles.push(tokio::spawn(order_service.run()));

        info!("Order system started successfully");

        Ok(Self {
            order_client,
            user_client,
            catalog_client,
            ledger_client,
            handles,
        })
    }

    /// Gracefully shutdown the entire actor system
    ///
    /// The workflow actor stops first since it depends on the stores. Errors
    /// are logged and shutdown carries on so no task is left hanging.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), FrameworkError> {
        info!("Shutting down order system");

        let _ = self.order_client.shutdown().await;
        let _ = self.user_client.shutdown().await;
        let _ = self.catalog_client.shutdown().await;
        let _ = self.ledger_client.shutdown().await;

        let mut failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
                failure = Some(FrameworkError::TaskFailed(e.to_string()));
            }
        }

        match failure {
            Some(e) => Err(e),
            None => {
                info!("Order system shutdown complete");
                Ok(())
            }
        }
    }
}
