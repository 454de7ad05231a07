use serde::{Deserialize, Serialize};

/// One cart line.
///
/// At most one line exists per product id; repeated adds bump the quantity
/// instead of appending a duplicate row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product id.
    pub id: String,
    pub name: String,
    /// Unit price, non-negative.
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
