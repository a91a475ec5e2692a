use crate::actor_framework::Entity;
use crate::domain::{OrderLine, Product, ProductCreate};
use super::actions::{ProductAction, ProductActionResult};
use super::CatalogError;

impl Entity for Product {
    type Id = String;
    type CreatePayload = ProductCreate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = CatalogError;

    fn id(&self) -> &String {
        &self.name
    }

    /// Products are keyed by name.
    fn requested_id(payload: &ProductCreate) -> Option<String> {
        Some(payload.name.clone())
    }

    fn from_create(id: String, params: ProductCreate) -> Result<Self, CatalogError> {
        Ok(Self {
            name: id,
            price: params.price,
            quantity: params.quantity,
            image: params.image,
        })
    }

    /// Handles product-specific actions.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `ReserveStock(amount)`: Decrements stock and snapshots an order line
    /// - `ReleaseStock(amount)`: Gives reserved stock back
    ///
    /// # Errors
    /// A rejected reservation leaves the stock unchanged.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, CatalogError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
            ProductAction::ReserveStock(amount) => {
                let Ok(requested) = u32::try_from(amount) else {
                    if amount < 0 {
                        return Err(CatalogError::InvalidQuantity(amount));
                    }
                    return Err(CatalogError::InsufficientStock {
                        requested: amount,
                        available: self.quantity,
                    });
                };
                if requested == 0 {
                    return Ok(ProductActionResult::ReserveStock(None));
                }
                if requested > self.quantity {
                    return Err(CatalogError::InsufficientStock {
                        requested: amount,
                        available: self.quantity,
                    });
                }
                self.quantity -= requested;
                Ok(ProductActionResult::ReserveStock(Some(OrderLine {
                    product_name: self.name.clone(),
                    unit_price: self.price,
                    quantity: requested,
                })))
            }
            ProductAction::ReleaseStock(amount) => {
                self.quantity = self.quantity.saturating_add(amount);
                Ok(ProductActionResult::ReleaseStock(self.quantity))
            }
        }
    }
}
