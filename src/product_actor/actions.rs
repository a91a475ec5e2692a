use crate::domain::OrderLine;

/// Custom actions for Product entities.
///
/// These are the only ways stock levels change once the catalog is seeded.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Checks the current stock level without modifying it.
    CheckStock,
    /// Reserves the requested amount of stock for an order line.
    ///
    /// The amount arrives signed because it comes straight from customer input.
    ///
    /// # Errors
    /// Fails for a negative amount or one that exceeds available stock.
    ReserveStock(i64),
    /// Returns stock taken by a reservation whose order was never recorded.
    ReleaseStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// Result from CheckStock action - returns the current stock level
    CheckStock(u32),
    /// Result from ReserveStock action - `None` when zero was requested
    ReserveStock(Option<OrderLine>),
    /// Result from ReleaseStock action - returns the new stock level
    ReleaseStock(u32),
}
