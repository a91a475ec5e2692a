//! Order ledger entity, order code minting, and the order workflow actor.

pub mod code;
pub mod entity;
pub mod error;
pub mod service;

pub use code::*;
pub use entity::OrderAction;
pub use error::*;
pub use service::OrderService;
