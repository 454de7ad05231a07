pub mod item;
pub mod store;

pub use item::CartItem;
pub use store::CartStore;
