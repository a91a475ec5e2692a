use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::domain::{Order, RequestedQuantities};
use crate::messages::OrderRequest;
use crate::order_actor::OrderError;

/// Client for the order workflow actor.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), OrderError> {
        debug!("Sending shutdown request");
        self.sender
            .send(OrderRequest::Shutdown)
            .await
            .map_err(|_| OrderError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(OrderClient => fn place_order(user_identifier: String, requested: RequestedQuantities) -> Order as OrderRequest::PlaceOrder, Error = OrderError);
client_method!(OrderClient => fn find_order(code: String) -> Order as OrderRequest::FindOrder, Error = OrderError);
client_method!(OrderClient => fn mark_paid(code: String) -> Order as OrderRequest::MarkPaid, Error = OrderError);
