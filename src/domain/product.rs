use rust_decimal::Decimal;
use serde::Serialize;

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "imagen")]
    pub image: String,
}

/// Payload for seeding a product into the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: String,
}

impl ProductCreate {
    /// `price_cents` is the unit price in hundredths.
    pub fn new(name: impl Into<String>, price_cents: i64, quantity: u32, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: Decimal::new(price_cents, 2),
            quantity,
            image: image.into(),
        }
    }
}

/// The beer catalog the storefront opens with.
pub fn default_catalog() -> Vec<ProductCreate> {
    vec![
        ProductCreate::new("Cerveza IPA", 550, 100, "/static/img/ipa.jpg"),
        ProductCreate::new("Cerveza Stout", 600, 80, "/static/img/stout.jpg"),
        ProductCreate::new("Cerveza Lager", 450, 150, "/static/img/lager.jpg"),
        ProductCreate::new("Cerveza Pilsner", 350, 200, "/static/img/pilsner.jpg"),
        ProductCreate::new("Cerveza Porter", 650, 90, "/static/img/porter.jpg"),
        ProductCreate::new("Cerveza Ale", 700, 70, "/static/img/ale.jpg"),
        ProductCreate::new("Cerveza Blonde", 500, 110, "/static/img/blonde.jpg"),
        ProductCreate::new("Cerveza Amber", 575, 120, "/static/img/amber.jpg"),
        ProductCreate::new("Cerveza Wheat", 475, 140, "/static/img/wheat.jpg"),
        ProductCreate::new("Cerveza Dubbel", 850, 60, "/static/img/dubbel.jpg"),
    ]
}
