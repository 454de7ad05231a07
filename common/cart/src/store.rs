use std::sync::{Arc, RwLock};

use common_storage::{keys, StorageBackend};
use tracing::{error, warn};

use crate::item::CartItem;

type Subscriber = Arc<dyn Fn(&[CartItem]) + Send + Sync>;

/// Observable cart state, kept in lockstep with the persisted `cart` entry.
///
/// Every mutation writes through to storage before it returns and then
/// notifies subscribers synchronously, so callers never observe the
/// in-memory list and the persisted entry disagreeing.
pub struct CartStore {
    backend: Arc<dyn StorageBackend>,
    items: RwLock<Vec<CartItem>>,
    subscribers: RwLock<Vec<Subscriber>>,
}

impl CartStore {
    /// Load the cart persisted under the bare `cart` key (not namespaced,
    /// for legacy script compatibility). Absent or unparsable data opens an
    /// empty cart.
    pub fn open(backend: Arc<dyn StorageBackend>) -> Self {
        let items = match backend.get_item(keys::CART) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(err) => {
                    warn!(%err, "persisted cart is unreadable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self {
            backend,
            items: RwLock::new(items),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the current line items.
    pub fn items(&self) -> Vec<CartItem> {
        self.items.read().expect("rwlock poisoned").clone()
    }

    /// Sum of quantities across all lines. Drives the navbar badge, which
    /// shows only while this is non-zero.
    pub fn item_count(&self) -> u32 {
        self.items
            .read()
            .expect("rwlock poisoned")
            .iter()
            .map(|item| item.quantity)
            .sum()
    }

    /// Sum of price times quantity across all lines. Derived, never
    /// persisted.
    pub fn total(&self) -> f64 {
        self.items
            .read()
            .expect("rwlock poisoned")
            .iter()
            .map(CartItem::line_total)
            .sum()
    }

    /// Register a callback invoked synchronously with the new list after
    /// every mutation. Callbacks may themselves subscribe or mutate the
    /// cart; they run against a snapshot of the subscriber list, outside
    /// its lock.
    pub fn subscribe(&self, subscriber: impl Fn(&[CartItem]) + Send + Sync + 'static) {
        self.subscribers
            .write()
            .expect("rwlock poisoned")
            .push(Arc::new(subscriber));
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the id has its quantity bumped by replacing the
    /// line; otherwise a new line with quantity 1 is appended.
    pub fn add_product(&self, id: &str, name: &str, price: f64) {
        let mut next = self.items();
        match next.iter_mut().find(|item| item.id == id) {
            Some(existing) => {
                *existing = CartItem {
                    quantity: existing.quantity + 1,
                    ..existing.clone()
                };
            }
            None => next.push(CartItem {
                id: id.to_string(),
                name: name.to_string(),
                price,
                quantity: 1,
            }),
        }
        self.replace(next);
    }

    /// Wholesale replacement, used for quantity edits, removals, and the
    /// post-purchase clear.
    pub fn update(&self, items: Vec<CartItem>) {
        self.replace(items);
    }

    fn replace(&self, next: Vec<CartItem>) {
        self.persist(&next);
        {
            let mut guard = self.items.write().expect("rwlock poisoned");
            *guard = next;
        }

        let items = self.items();
        let subscribers: Vec<Subscriber> =
            self.subscribers.read().expect("rwlock poisoned").clone();
        for subscriber in &subscribers {
            subscriber(&items);
        }
    }

    fn persist(&self, items: &[CartItem]) {
        let raw = match serde_json::to_string(items) {
            Ok(raw) => raw,
            Err(err) => {
                error!(%err, "failed to serialize cart");
                return;
            }
        };
        if let Err(err) = self.backend.set_item(keys::CART, &raw) {
            error!(%err, "failed to persist cart");
        }
    }
}
