use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::clients::{CatalogClient, LedgerClient, OrderClient, UserClient};
use crate::domain::{Order, OrderLine, RequestedQuantities};
use crate::messages::{OrderRequest, ServiceResponse};
use crate::user_actor::UserError;
use super::OrderError;

/// Root actor for the order workflow.
///
/// It stores nothing itself: users, catalog and ledger each live in their own
/// actor. Requests are handled one at a time, so a placement, a payment and a
/// lookup never interleave, and stock checked for one order cannot be taken
/// by another before it is decremented.
pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    user_client: UserClient,
    catalog_client: CatalogClient,
    ledger: LedgerClient,
}

impl OrderService {
    pub fn new(
        buffer_size: usize,
        user_client: UserClient,
        catalog_client: CatalogClient,
        ledger: LedgerClient,
    ) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            user_client,
            catalog_client,
            ledger,
        };
        let client = OrderClient::new(sender);
        (service, client)
    }

    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!("OrderService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::PlaceOrder { user_identifier, requested, respond_to } => {
                    self.handle_place_order(user_identifier, requested, respond_to).await;
                }
                OrderRequest::FindOrder { code, respond_to } => {
                    self.handle_find_order(code, respond_to).await;
                }
                OrderRequest::MarkPaid { code, respond_to } => {
                    self.handle_mark_paid(code, respond_to).await;
                }
                OrderRequest::Shutdown => {
                    info!("OrderService shutting down");
                    break;
                }
            }
        }
        info!("OrderService stopped");
    }

    #[instrument(fields(user_id = %user_identifier), skip(self, requested, respond_to))]
    async fn handle_place_order(
        &self,
        user_identifier: String,
        requested: RequestedQuantities,
        respond_to: ServiceResponse<Order, OrderError>,
    ) {
        info!("Processing place_order request");
        let result = self.place_order(user_identifier, &requested).await;
        let _ = respond_to.send(result);
    }

    async fn place_order(
        &self,
        user_identifier: String,
        requested: &RequestedQuantities,
    ) -> Result<Order, OrderError> {
        // Step 1: Validate user
        let user = match self.user_client.find_by_identifier(user_identifier).await {
            Ok(user) => {
                info!(user_name = %user.name, "User validation successful");
                user
            }
            Err(UserError::NotFound(id)) => {
                error!("User not found");
                return Err(OrderError::UserNotFound(id));
            }
            Err(e) => {
                error!(error = %e, "User validation failed");
                return Err(OrderError::ActorCommunicationError(e.to_string()));
            }
        };

        // Step 2: Reserve stock, product by product in catalog order
        let catalog = self.catalog_client.list_products().await?;
        let mut lines = Vec::new();
        for product in &catalog {
            let Some(quantity) = requested.quantity_for(&product.name) else {
                debug!(product = %product.name, "No quantity requested");
                continue;
            };
            match self.catalog_client.reserve_stock(product.name.clone(), quantity).await {
                Ok(Some(line)) => lines.push(line),
                Ok(None) => debug!(product = %product.name, "Zero requested, skipped"),
                Err(e) if e.is_rejection() => {
                    warn!(product = %product.name, error = %e, "Line rejected, order continues without it");
                }
                Err(e) => {
                    error!(error = %e, "Stock reservation failed");
                    self.release(&lines).await;
                    return Err(e.into());
                }
            }
        }

        // Step 3: Record the order
        match self.ledger.record_order(user, lines.clone()).await {
            Ok(order) => {
                info!(order_code = %order.code, total = %order.total, lines = order.lines.len(), "Order placed");
                Ok(order)
            }
            Err(e) => {
                error!(error = %e, "Recording order failed, releasing reserved stock");
                self.release(&lines).await;
                Err(e)
            }
        }
    }

    /// Gives back every reserved line. Failures are logged; there is nothing
    /// further to roll back to.
    async fn release(&self, lines: &[OrderLine]) {
        for line in lines {
            if let Err(e) = self
                .catalog_client
                .release_stock(line.product_name.clone(), line.quantity)
                .await
            {
                error!(product = %line.product_name, quantity = line.quantity, error = %e, "Stock release failed");
            }
        }
    }

    #[instrument(fields(order_code = %code), skip(self, respond_to))]
    async fn handle_find_order(&self, code: String, respond_to: ServiceResponse<Order, OrderError>) {
        debug!("Processing find_order request");
        let result = match self.ledger.get_order(code.clone()).await {
            Ok(Some(order)) => {
                info!(total = %order.total, paid = order.paid, "Order found");
                Ok(order)
            }
            Ok(None) => {
                debug!("Order not found");
                Err(OrderError::NotFound(code))
            }
            Err(e) => Err(e),
        };
        let _ = respond_to.send(result);
    }

    #[instrument(fields(order_code = %code), skip(self, respond_to))]
    async fn handle_mark_paid(&self, code: String, respond_to: ServiceResponse<Order, OrderError>) {
        debug!("Processing mark_paid request");
        let result = self.ledger.mark_paid(code).await;
        match &result {
            Ok(order) => info!(total = %order.total, "Order marked paid"),
            Err(e) => warn!(error = %e, "Payment not recorded"),
        }
        let _ = respond_to.send(result);
    }
}
