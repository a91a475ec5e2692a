use tracing::{debug, instrument};
use crate::domain::{Order, OrderCreate, OrderLine, User};
use crate::order_actor::{OrderAction, OrderError};
use crate::actor_framework::ResourceClient;

/// Client for the order ledger actor.
#[derive(Clone)]
pub struct LedgerClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(LedgerClient, Order, OrderError, order);

impl LedgerClient {
    /// Appends an unpaid order under a freshly minted code.
    #[instrument(skip(self, user, lines), fields(user_id = %user.identifier, lines = lines.len()))]
    pub async fn record_order(&self, user: User, lines: Vec<OrderLine>) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(OrderCreate { user, lines }).await
    }

    #[instrument(skip(self))]
    pub async fn mark_paid(&self, code: String) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.perform_action(code, OrderAction::MarkPaid).await
    }
}
