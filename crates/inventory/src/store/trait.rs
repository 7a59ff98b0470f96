use std::sync::Arc;

use crate::error::InventoryResult;
use crate::filter::InventoryFilter;
use crate::record::StockRecord;

/// Authoritative set of stock records and the rules for moving stock.
///
/// Every operation is all-or-nothing against a single record. Returned records
/// are owned snapshots; mutating them never affects the store.
pub trait InventoryStore: Send + Sync {
    /// Add a new lot. Returns `Ok(false)` (and changes nothing) if the id is taken.
    fn register(&self, record: StockRecord) -> InventoryResult<bool>;

    /// Remove a lot, returning the record as it was at removal.
    fn delete(&self, id: &str) -> InventoryResult<StockRecord>;

    /// Stock-in: add `quantity` units. Returns the new quantity on hand.
    fn store(&self, id: &str, quantity: i64) -> InventoryResult<i64>;

    /// Stock-out: remove `quantity` units. Returns the new quantity on hand.
    ///
    /// Fails with `InsufficientStock` (record untouched) if fewer units are on hand.
    fn retrieve(&self, id: &str, quantity: i64) -> InventoryResult<i64>;

    /// Records matching `filter`, in registration order.
    fn find_by_filter(&self, filter: &InventoryFilter) -> InventoryResult<Vec<StockRecord>>;

    /// Every record, in registration order.
    fn get_all(&self) -> InventoryResult<Vec<StockRecord>>;

    /// Snapshot of a single record.
    fn get(&self, id: &str) -> InventoryResult<Option<StockRecord>>;

    /// Number of registered lots.
    fn len(&self) -> InventoryResult<usize>;

    fn is_empty(&self) -> InventoryResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Units on hand across all lots (saturating).
    fn total_units(&self) -> InventoryResult<i64> {
        Ok(self
            .get_all()?
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.quantity())))
    }
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn register(&self, record: StockRecord) -> InventoryResult<bool> {
        (**self).register(record)
    }

    fn delete(&self, id: &str) -> InventoryResult<StockRecord> {
        (**self).delete(id)
    }

    fn store(&self, id: &str, quantity: i64) -> InventoryResult<i64> {
        (**self).store(id, quantity)
    }

    fn retrieve(&self, id: &str, quantity: i64) -> InventoryResult<i64> {
        (**self).retrieve(id, quantity)
    }

    fn find_by_filter(&self, filter: &InventoryFilter) -> InventoryResult<Vec<StockRecord>> {
        (**self).find_by_filter(filter)
    }

    fn get_all(&self) -> InventoryResult<Vec<StockRecord>> {
        (**self).get_all()
    }

    fn get(&self, id: &str) -> InventoryResult<Option<StockRecord>> {
        (**self).get(id)
    }

    fn len(&self) -> InventoryResult<usize> {
        (**self).len()
    }

    fn is_empty(&self) -> InventoryResult<bool> {
        (**self).is_empty()
    }

    fn total_units(&self) -> InventoryResult<i64> {
        (**self).total_units()
    }
}
