//! Typed handles for every actor in the system.

#[macro_use]
mod macros;

mod ledger_client;
mod order_client;
mod product_client;
mod user_client;

pub use ledger_client::LedgerClient;
pub use order_client::OrderClient;
pub use product_client::CatalogClient;
pub use user_client::UserClient;
