//! Cart state container.

use souk_store::SnapshotStore;
use tracing::warn;

use crate::{cart::Cart, lines::ProductSnapshot};

/// Snapshot key under which the cart is persisted.
pub const CART_SNAPSHOT_KEY: &str = "souk_cart";

/// Explicitly owned cart container.
///
/// Hydrates once from the snapshot store on construction and persists after
/// every mutation. Mutations are total: persistence failures are logged and
/// the in-memory state stands, matching the best-effort contract of the
/// storefront. Construct one per consumer that needs isolation (tests build
/// theirs over a [`souk_store::MemoryStore`]).
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
    open: bool,
}

impl<S: SnapshotStore> CartStore<S> {
    /// Create a container hydrated from any prior snapshot.
    ///
    /// A missing, unreadable, or corrupt snapshot yields an empty cart; the
    /// failure is logged and never surfaced.
    #[must_use]
    pub fn load(storage: S) -> Self {
        let cart = match storage.read(CART_SNAPSHOT_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                warn!("discarding corrupt cart snapshot: {error}");

                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(error) => {
                warn!("failed to read cart snapshot: {error}");

                Cart::new()
            }
        };

        Self {
            cart,
            storage,
            open: false,
        }
    }

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// UI-visibility flag: whether the cart drawer should be shown.
    ///
    /// Not a domain invariant; [`CartStore::add`] raises it so a fresh
    /// addition is immediately visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Set the UI-visibility flag.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Add units of a product variant, then persist.
    ///
    /// Also raises the open flag so the cart is shown after an addition.
    pub fn add(&mut self, product: &ProductSnapshot, variant: Option<&str>, quantity: u32) {
        self.cart.add(product, variant, quantity);
        self.open = true;
        self.persist();
    }

    /// Remove the line matching the pair, then persist.
    pub fn remove(&mut self, product_id: u64, variant: Option<&str>) {
        self.cart.remove(product_id, variant);
        self.persist();
    }

    /// Replace the quantity of the matching line, then persist.
    pub fn update_quantity(&mut self, product_id: u64, quantity: u32, variant: Option<&str>) {
        self.cart.update_quantity(product_id, quantity, variant);
        self.persist();
    }

    /// Empty the cart and remove the persisted snapshot.
    pub fn clear(&mut self) {
        self.cart.clear();

        if let Err(error) = self.storage.remove(CART_SNAPSHOT_KEY) {
            warn!("failed to remove cart snapshot: {error}");
        }
    }

    fn persist(&self) {
        match serde_json::to_string(&self.cart) {
            Ok(raw) => {
                if let Err(error) = self.storage.write(CART_SNAPSHOT_KEY, &raw) {
                    warn!("failed to persist cart snapshot: {error}");
                }
            }
            Err(error) => warn!("failed to serialize cart snapshot: {error}"),
        }
    }
}
