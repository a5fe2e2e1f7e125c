//! Cart

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lines::{CartLine, ProductSnapshot};

/// Flat delivery charge in dirhams, applied whenever the cart is non-empty.
pub const DELIVERY_FEE: u32 = 45;

/// Ordered collection of cart lines.
///
/// Order is insertion order and only matters for display. All derived values
/// (`count`, `subtotal`, `total`) are recomputed from the lines on every read
/// and never cached, so they cannot drift from the line data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product variant.
    ///
    /// If a line with the same `(product_id, variant)` pair exists its
    /// quantity increases; otherwise a new line is appended with the unit
    /// price taken from the snapshot at this moment. Adding zero units is a
    /// no-op.
    pub fn add(&mut self, product: &ProductSnapshot, variant: Option<&str>, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(product.id, variant))
        {
            line.quantity += quantity;

            return;
        }

        self.lines.push(CartLine {
            product_id: product.id,
            variant: variant.map(str::to_owned),
            display_name: product.display_name.clone(),
            display_name_secondary: product.display_name_secondary.clone(),
            image_ref: product.image_ref.clone(),
            unit_price: product.price.amount(),
            quantity,
        });
    }

    /// Remove the line matching the pair. A missing pair is a silent no-op.
    pub fn remove(&mut self, product_id: u64, variant: Option<&str>) {
        self.lines
            .retain(|line| !line.matches(product_id, variant));
    }

    /// Replace the quantity of the matching line.
    ///
    /// Quantities below 1 are ignored; a line is only ever dropped through
    /// [`Cart::remove`]. A missing pair is a silent no-op.
    pub fn update_quantity(&mut self, product_id: u64, quantity: u32, variant: Option<&str>) {
        if quantity < 1 {
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(product_id, variant))
        {
            line.quantity = quantity;
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of per-line quantities.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Zero for an empty cart, the flat [`DELIVERY_FEE`] otherwise.
    #[must_use]
    pub fn delivery_fee(&self) -> Decimal {
        if self.is_empty() {
            Decimal::ZERO
        } else {
            Decimal::from(DELIVERY_FEE)
        }
    }

    /// Subtotal plus delivery fee.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.delivery_fee()
    }
}
