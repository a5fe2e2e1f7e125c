//! Souk cart domain.
//!
//! A [`Cart`] is an ordered collection of [`CartLine`]s, each identified by a
//! `(product_id, variant)` pair. Totals are pure functions over the lines and
//! are recomputed on every read. The [`CartStore`] container adds snapshot
//! persistence around the pure model.

pub mod cart;
pub mod lines;
pub mod prices;
pub mod store;

pub use cart::{Cart, DELIVERY_FEE};
pub use lines::{CartLine, PriceInput, ProductSnapshot};
pub use store::{CART_SNAPSHOT_KEY, CartStore};
