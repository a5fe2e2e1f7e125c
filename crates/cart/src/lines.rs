//! Cart lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::prices::normalize_price;

/// Price carried by a product reference: already numeric, or free text such
/// as `"120 DH"` that is normalized on entry.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceInput {
    /// An already-numeric amount.
    Amount(Decimal),
    /// Free text containing an amount.
    Text(String),
}

impl PriceInput {
    /// The normalized amount. Unparseable text is treated as zero.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Amount(amount) => *amount,
            Self::Text(text) => normalize_price(text).unwrap_or_else(|| {
                tracing::warn!("unparseable price text {text:?}, treating as zero");

                Decimal::ZERO
            }),
        }
    }
}

impl From<Decimal> for PriceInput {
    fn from(value: Decimal) -> Self {
        Self::Amount(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Presentation and pricing data captured from a catalog product at
/// add-time. Lines keep this snapshot; they never re-fetch the product.
#[derive(Debug, Clone)]
pub struct ProductSnapshot {
    /// Catalog identifier.
    pub id: u64,
    /// Primary display name.
    pub display_name: String,
    /// Optional localized display name.
    pub display_name_secondary: Option<String>,
    /// Image reference for display.
    pub image_ref: String,
    /// Price at this moment, numeric or numeric-as-text.
    pub price: PriceInput,
}

/// One product+variant+quantity entry in the shopping cart.
///
/// A line is uniquely identified by its `(product_id, variant)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog identifier of the product.
    pub product_id: u64,
    /// Optional sub-selector (e.g. a packaging weight such as `"250ml"`);
    /// `None` means the default variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Display name copied at insertion time.
    pub display_name: String,
    /// Optional localized display name copied at insertion time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name_secondary: Option<String>,
    /// Image reference copied at insertion time.
    pub image_ref: String,
    /// Unit price captured at insertion, not live-synced to the catalog.
    pub unit_price: Decimal,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Whether this line is identified by the given pair.
    #[must_use]
    pub fn matches(&self, product_id: u64, variant: Option<&str>) -> bool {
        self.product_id == product_id && self.variant.as_deref() == variant
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
