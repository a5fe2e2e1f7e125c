//! Order payloads.

use std::{fmt, str::FromStr};

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed, awaiting confirmation.
    Pending,
    /// Confirmed by the shop.
    Confirmed,
    /// Handed to the courier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Cancelled.
    Cancelled,
    /// A status this client does not know about. Kept so listings keep
    /// working when the API grows new states.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        };

        f.write_str(label)
    }
}

/// Raised when a status label is not recognised.
#[derive(Debug, Error)]
#[error("unknown order status {0:?}")]
pub struct ParseOrderStatusError(String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "SHIPPED" => Ok(Self::Shipped),
            "DELIVERED" => Ok(Self::Delivered),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(ParseOrderStatusError(other.to_string())),
        }
    }
}

/// An order as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub id: u64,
    /// Buyer's name.
    pub customer_name: String,
    /// Buyer's phone number.
    pub phone: String,
    /// Delivery city.
    pub city: String,
    /// Delivery address or buyer note.
    #[serde(default)]
    pub address: String,
    /// Human-readable summary of the ordered items.
    #[serde(default)]
    pub items_description: String,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Placement time.
    pub created_at: Timestamp,
}

/// Payload for placing an order.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    /// Buyer's name.
    pub customer_name: String,
    /// Buyer's phone number.
    pub phone: String,
    /// Delivery city.
    pub city: String,
    /// Delivery address or buyer note.
    pub address: String,
    /// Human-readable summary of the ordered items.
    pub items_description: String,
    /// Initial status; always [`OrderStatus::Pending`] for new orders.
    pub status: OrderStatus,
}

/// One day's order count, for the dashboard chart.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyStat {
    /// Calendar day.
    pub date: Date,
    /// Orders placed that day.
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_round_trips_through_labels() -> TestResult {
        assert_eq!("SHIPPED".parse::<OrderStatus>()?, OrderStatus::Shipped);
        assert_eq!(OrderStatus::Cancelled.to_string(), "CANCELLED");
        assert_eq!("delivered".parse::<OrderStatus>()?, OrderStatus::Delivered);

        Ok(())
    }

    #[test]
    fn unrecognised_label_is_an_error() {
        assert!("MISPLACED".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn unknown_api_status_is_tolerated() -> TestResult {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 4,
                "customer_name": "Yasmine",
                "phone": "0600000000",
                "city": "Rabat",
                "status": "REFUNDED",
                "created_at": "2026-08-20T10:30:00Z"
            }"#,
        )?;

        assert_eq!(order.status, OrderStatus::Unknown);
        assert_eq!(order.items_description, "");

        Ok(())
    }

    #[test]
    fn daily_stat_decodes_a_calendar_date() -> TestResult {
        let stat: DailyStat = serde_json::from_str(r#"{"date": "2026-08-19", "count": 12}"#)?;

        assert_eq!(stat.date.year(), 2026);
        assert_eq!(stat.count, 12);

        Ok(())
    }
}
