use serde::{Deserialize, Serialize};

use cellar_core::{Entity, LotId};

/// One stock-keeping lot: a producer's vintage from a given origin, with its
/// unit price and the quantity currently on hand.
///
/// Descriptive fields are fixed at construction; only the store changes
/// `quantity`, and only through stock movements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockRecord {
    id: LotId,
    producer_name: String,
    origin_code: String,
    vintage_year: i32,
    unit_price: i64,
    quantity: i64,
}

impl StockRecord {
    pub fn new(
        id: impl Into<LotId>,
        producer_name: impl Into<String>,
        origin_code: impl Into<String>,
        vintage_year: i32,
        unit_price: i64,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            producer_name: producer_name.into(),
            origin_code: origin_code.into(),
            vintage_year,
            unit_price,
            quantity,
        }
    }

    pub fn id(&self) -> &LotId {
        &self.id
    }

    pub fn producer_name(&self) -> &str {
        &self.producer_name
    }

    pub fn origin_code(&self) -> &str {
        &self.origin_code
    }

    pub fn vintage_year(&self) -> i32 {
        self.vintage_year
    }

    pub fn unit_price(&self) -> i64 {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl Entity for StockRecord {
    type Id = LotId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_is_flat() {
        let record = StockRecord::new("1", "Chateau Margaux", "FR", 2015, 500, 10);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "producer_name": "Chateau Margaux",
                "origin_code": "FR",
                "vintage_year": 2015,
                "unit_price": 500,
                "quantity": 10,
            })
        );
    }

    #[test]
    fn entity_id_matches_accessor() {
        let record = StockRecord::new("lot-7", "Penfolds", "AU", 2018, 90, 3);
        assert_eq!(Entity::id(&record).as_str(), "lot-7");
        assert_eq!(record.id(), Entity::id(&record));
    }
}
