//! Catalog payloads.

use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::{Deserialize, Serialize};
use souk_cart::{PriceInput, ProductSnapshot};
use tracing::warn;

/// A product category.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub id: u64,
    /// Canonical name.
    pub name: String,
    /// French display name.
    #[serde(default)]
    pub name_fr: Option<String>,
    /// Arabic display name.
    #[serde(default)]
    pub name_ar: Option<String>,
}

impl Category {
    /// The name shown in listings; French when available.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name_fr.as_deref().unwrap_or(&self.name)
    }
}

/// Price fields arrive as JSON numbers or as display strings such as
/// `"120 DH"`; both forms are accepted.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PriceField {
    /// Numeric amount in MAD.
    Amount(f64),
    /// Display text to be normalized.
    Text(String),
}

impl PriceField {
    /// The numeric amount, falling back to zero when the value cannot be
    /// interpreted.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Amount(value) => Decimal::from_f64(*value).unwrap_or_else(|| {
                warn!("price {value} not representable, treating as zero");

                Decimal::ZERO
            }),
            Self::Text(text) => souk_cart::prices::normalize_price(text).unwrap_or_else(|| {
                warn!("unparseable price text {text:?}, treating as zero");

                Decimal::ZERO
            }),
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: u64,
    /// Canonical name.
    #[serde(default)]
    pub name: Option<String>,
    /// French display name.
    #[serde(default)]
    pub name_fr: Option<String>,
    /// Arabic display name.
    #[serde(default)]
    pub name_ar: Option<String>,
    /// Regular price.
    pub price: PriceField,
    /// Promotional price, meaningful only when [`Self::is_promo`] is set.
    #[serde(default)]
    pub discount_price: Option<PriceField>,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Variant label, e.g. a pack weight.
    #[serde(default)]
    pub weight: Option<String>,
    /// Whether the product is on promotion.
    #[serde(default)]
    pub is_promo: bool,
    /// Owning category identifier.
    #[serde(default)]
    pub category: Option<u64>,
}

impl Product {
    /// The name shown in listings; French when available, then canonical.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name_fr
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("")
    }

    /// The price a buyer pays right now. The promotional price applies only
    /// when the product is flagged as a promotion and the discount is
    /// strictly positive; otherwise the regular price stands.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        if self.is_promo {
            if let Some(discount) = &self.discount_price {
                let amount = discount.amount();

                if amount > Decimal::ZERO {
                    return amount;
                }
            }
        }

        self.price.amount()
    }

    /// Capture the product as a cart snapshot at its effective price.
    #[must_use]
    pub fn to_snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id,
            display_name: self.display_name().to_string(),
            display_name_secondary: self.name_ar.clone(),
            image_ref: self.image.clone(),
            price: PriceInput::Amount(self.effective_price()),
        }
    }
}

/// Catalog listing filters.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Restrict to a category.
    pub category: Option<u64>,
    /// Restrict to promoted products.
    pub promotions_only: bool,
}

/// Payload for creating a product.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    /// Canonical name.
    pub name: String,
    /// French display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_fr: Option<String>,
    /// Arabic display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    /// Regular price in MAD.
    pub price: Decimal,
    /// Promotional price in MAD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,
    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Variant label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Whether the product is on promotion.
    pub is_promo: bool,
    /// Owning category identifier.
    pub category: u64,
}

/// Partial update for a product; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductPatch {
    /// Canonical name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// French display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_fr: Option<String>,
    /// Arabic display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    /// Regular price in MAD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Promotional price in MAD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,
    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Variant label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Whether the product is on promotion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_promo: Option<bool>,
    /// Owning category identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn product(body: &str) -> Result<Product, serde_json::Error> {
        serde_json::from_str(body)
    }

    #[test]
    fn price_field_accepts_numbers_and_text() -> TestResult {
        let numeric: PriceField = serde_json::from_str("120.5")?;
        let text: PriceField = serde_json::from_str(r#""99.50 DH""#)?;
        let junk: PriceField = serde_json::from_str(r#""gratuit""#)?;

        assert_eq!(numeric.amount(), "120.5".parse::<Decimal>()?);
        assert_eq!(text.amount(), "99.50".parse::<Decimal>()?);
        assert_eq!(junk.amount(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn effective_price_prefers_a_positive_discount_when_promoted() -> TestResult {
        let promoted = product(
            r#"{"id": 1, "name": "Argan oil", "price": 120, "discount_price": 95, "is_promo": true}"#,
        )?;
        let zero_discount = product(
            r#"{"id": 2, "name": "Honey", "price": 80, "discount_price": 0, "is_promo": true}"#,
        )?;
        let not_promoted = product(
            r#"{"id": 3, "name": "Dates", "price": 60, "discount_price": 40, "is_promo": false}"#,
        )?;

        assert_eq!(promoted.effective_price(), Decimal::from(95));
        assert_eq!(zero_discount.effective_price(), Decimal::from(80));
        assert_eq!(not_promoted.effective_price(), Decimal::from(60));

        Ok(())
    }

    #[test]
    fn display_name_prefers_french() -> TestResult {
        let both = product(r#"{"id": 1, "name": "Argan oil", "name_fr": "Huile d'argan", "price": 120}"#)?;
        let bare = product(r#"{"id": 2, "name": "Honey", "price": 80}"#)?;
        let empty = product(r#"{"id": 3, "price": 80}"#)?;

        assert_eq!(both.display_name(), "Huile d'argan");
        assert_eq!(bare.display_name(), "Honey");
        assert_eq!(empty.display_name(), "");

        Ok(())
    }

    #[test]
    fn snapshot_captures_the_effective_price() -> TestResult {
        let promoted = product(
            r#"{"id": 7, "name_fr": "Amlou", "name_ar": "أملو", "price": 90, "discount_price": 75, "is_promo": true, "image": "amlou.jpg", "weight": "500g"}"#,
        )?;

        let snapshot = promoted.to_snapshot();

        assert_eq!(snapshot.id, 7);
        assert_eq!(snapshot.display_name, "Amlou");
        assert_eq!(snapshot.display_name_secondary.as_deref(), Some("أملو"));
        assert_eq!(snapshot.image_ref, "amlou.jpg");
        assert_eq!(snapshot.price.amount(), Decimal::from(75));

        Ok(())
    }

    #[test]
    fn patch_serializes_only_set_fields() -> TestResult {
        let patch = ProductPatch {
            price: Some(Decimal::from(110)),
            is_promo: Some(false),
            ..ProductPatch::default()
        };

        let value = serde_json::to_value(&patch)?;

        assert_eq!(value, serde_json::json!({ "price": "110", "is_promo": false }));

        Ok(())
    }
}
