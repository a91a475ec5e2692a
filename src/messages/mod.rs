use tokio::sync::oneshot;
use crate::domain::{Order, RequestedQuantities};
use crate::order_actor::OrderError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages understood by the order workflow actor. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum OrderRequest {
    PlaceOrder {
        user_identifier: String,
        requested: RequestedQuantities,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    FindOrder {
        code: String,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    MarkPaid {
        code: String,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    Shutdown,
}
