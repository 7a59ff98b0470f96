//! Query criteria for [`find_by_filter`](crate::InventoryStore::find_by_filter).

use serde::{Deserialize, Serialize};

use crate::record::StockRecord;

/// A single query criterion. Exactly one is applied per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum InventoryFilter {
    /// Exact producer name.
    ProducerName { name: String },
    /// Exact origin (country/region) code.
    OriginCode { code: String },
    /// Exact vintage year.
    VintageYear { year: i32 },
    /// Unit price strictly inside `(min, max)`; the bounds themselves never match.
    PriceRange { min: i64, max: i64 },
    /// Exact quantity on hand.
    Quantity { quantity: i64 },
}

impl InventoryFilter {
    pub fn producer_name(name: impl Into<String>) -> Self {
        Self::ProducerName { name: name.into() }
    }

    pub fn origin_code(code: impl Into<String>) -> Self {
        Self::OriginCode { code: code.into() }
    }

    pub fn vintage_year(year: i32) -> Self {
        Self::VintageYear { year }
    }

    pub fn price_range(min: i64, max: i64) -> Self {
        Self::PriceRange { min, max }
    }

    pub fn quantity(quantity: i64) -> Self {
        Self::Quantity { quantity }
    }

    /// Whether `record` satisfies this criterion.
    pub fn matches(&self, record: &StockRecord) -> bool {
        match self {
            InventoryFilter::ProducerName { name } => record.producer_name() == name,
            InventoryFilter::OriginCode { code } => record.origin_code() == code,
            InventoryFilter::VintageYear { year } => record.vintage_year() == *year,
            InventoryFilter::PriceRange { min, max } => {
                record.unit_price() > *min && record.unit_price() < *max
            }
            InventoryFilter::Quantity { quantity } => record.quantity() == *quantity,
        }
    }
}
