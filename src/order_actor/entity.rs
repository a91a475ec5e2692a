use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate};
use super::OrderError;

/// Custom actions for ledger entries.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Flips the paid flag. Harmless on an order that is already paid.
    MarkPaid,
}

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Error = OrderError;

    fn id(&self) -> &String {
        &self.code
    }

    /// Creates a new unpaid Order; the code comes from the ledger's minter.
    fn from_create(code: String, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order::new(code, params.user, params.lines))
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<Order, OrderError> {
        match action {
            OrderAction::MarkPaid => {
                self.paid = true;
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderLine, User};
    use rust_decimal::Decimal;

    #[test]
    fn mark_paid_is_idempotent() {
        let params = OrderCreate {
            user: User::new("U1", "123"),
            lines: vec![OrderLine {
                product_name: "Lager".into(),
                unit_price: Decimal::new(450, 2),
                quantity: 10,
            }],
        };
        let mut order = Order::from_create("ORD-1".into(), params).unwrap();
        let once = order.handle_action(OrderAction::MarkPaid).unwrap();
        let twice = order.handle_action(OrderAction::MarkPaid).unwrap();
        assert!(twice.paid);
        assert_eq!(once, twice);
        assert_eq!(twice.total, Decimal::new(4500, 2));
        assert_eq!(twice.lines.len(), 1);
    }
}
