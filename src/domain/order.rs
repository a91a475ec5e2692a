use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::User;

/// One product of an order, with the price captured when the stock was reserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    #[serde(rename = "nombre")]
    pub product_name: String,
    #[serde(rename = "precio")]
    pub unit_price: Decimal,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

impl OrderLine {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "usuario")]
    pub user: User,
    #[serde(rename = "productos")]
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
    #[serde(rename = "pagado")]
    pub paid: bool,
}

/// Payload for recording a new order. The ledger mints the code.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user: User,
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn new(code: impl Into<String>, user: User, lines: Vec<OrderLine>) -> Self {
        let total = Self::total_of(&lines);
        Self {
            code: code.into(),
            user,
            lines,
            total,
            paid: false,
        }
    }

    pub fn total_of(lines: &[OrderLine]) -> Decimal {
        lines.iter().map(OrderLine::subtotal).sum()
    }
}

/// Quantities requested per product name, kept as the raw text the customer sent.
///
/// A field that is absent or does not parse as an integer reads as `None`.
#[derive(Debug, Clone, Default)]
pub struct RequestedQuantities {
    fields: HashMap<String, String>,
}

impl RequestedQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product_name: impl Into<String>, raw: impl Into<String>) {
        self.fields.insert(product_name.into(), raw.into());
    }

    pub fn with(mut self, product_name: impl Into<String>, quantity: i64) -> Self {
        self.insert(product_name, quantity.to_string());
        self
    }

    pub fn quantity_for(&self, product_name: &str) -> Option<i64> {
        self.fields.get(product_name)?.trim().parse().ok()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestedQuantities {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut quantities = Self::new();
        for (name, raw) in iter {
            quantities.insert(name, raw);
        }
        quantities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, cents: i64, quantity: u32) -> OrderLine {
        OrderLine {
            product_name: name.into(),
            unit_price: Decimal::new(cents, 2),
            quantity,
        }
    }

    #[test]
    fn total_is_sum_of_line_subtotals() {
        let order = Order::new(
            "ORD-1",
            User::new("U1", "123"),
            vec![line("Lager", 450, 10), line("Stout", 600, 3)],
        );
        assert_eq!(order.total, Decimal::new(6300, 2));
        assert!(!order.paid);
    }

    #[test]
    fn empty_order_totals_zero() {
        assert_eq!(Order::total_of(&[]), Decimal::ZERO);
    }

    #[test]
    fn malformed_and_absent_quantities_read_as_none() {
        let requested: RequestedQuantities =
            [("Lager", " 7 "), ("Stout", "seven"), ("Ale", ""), ("Porter", "-2")]
                .into_iter()
                .collect();
        assert_eq!(requested.quantity_for("Lager"), Some(7));
        assert_eq!(requested.quantity_for("Stout"), None);
        assert_eq!(requested.quantity_for("Ale"), None);
        assert_eq!(requested.quantity_for("Porter"), Some(-2));
        assert_eq!(requested.quantity_for("Dubbel"), None);
    }
}
