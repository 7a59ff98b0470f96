use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

use cellar_core::LotId;

use super::r#trait::InventoryStore;
use crate::config::StoreConfig;
use crate::error::{InventoryError, InventoryResult};
use crate::filter::InventoryFilter;
use crate::record::StockRecord;

/// Records in registration order plus an id index.
///
/// `records` is keyed by a monotonically increasing insertion sequence, so
/// iterating it yields registration order even after deletions.
#[derive(Debug, Default)]
struct Ledger {
    records: BTreeMap<u64, StockRecord>,
    index: HashMap<LotId, u64>,
    next_seq: u64,
}

impl Ledger {
    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn insert(&mut self, record: StockRecord) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(record.id().clone(), seq);
        self.records.insert(seq, record);
    }

    fn remove(&mut self, id: &str) -> Option<StockRecord> {
        let seq = self.index.remove(id)?;
        self.records.remove(&seq)
    }

    fn get(&self, id: &str) -> Option<&StockRecord> {
        self.index.get(id).and_then(|seq| self.records.get(seq))
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut StockRecord> {
        let seq = *self.index.get(id)?;
        self.records.get_mut(&seq)
    }

    fn iter(&self) -> impl Iterator<Item = &StockRecord> {
        self.records.values()
    }
}

/// In-memory inventory store.
///
/// One coarse `RwLock` guards the whole ledger: queries take the read side,
/// every mutation takes the write side, so a stock movement's read, check and
/// write-back form a single critical section. Lock waits are bounded by
/// [`StoreConfig::lock_timeout`].
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    ledger: RwLock<Ledger>,
    config: StoreConfig,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            ledger: RwLock::new(Ledger::default()),
            config,
        }
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read(&self, op: &'static str) -> InventoryResult<RwLockReadGuard<'_, Ledger>> {
        self.ledger
            .try_read_for(self.config.lock_timeout)
            .ok_or_else(|| self.lock_timeout(op))
    }

    fn write(&self, op: &'static str) -> InventoryResult<RwLockWriteGuard<'_, Ledger>> {
        self.ledger
            .try_write_for(self.config.lock_timeout)
            .ok_or_else(|| self.lock_timeout(op))
    }

    fn lock_timeout(&self, op: &'static str) -> InventoryError {
        warn!(op, timeout = ?self.config.lock_timeout, "inventory store lock not acquired");
        InventoryError::LockTimeout(self.config.lock_timeout)
    }
}

fn ensure_non_negative(quantity: i64) -> InventoryResult<()> {
    if quantity < 0 {
        return Err(InventoryError::InvalidQuantity(quantity));
    }
    Ok(())
}

impl InventoryStore for InMemoryInventoryStore {
    fn register(&self, record: StockRecord) -> InventoryResult<bool> {
        ensure_non_negative(record.quantity())?;

        let mut ledger = self.write("register")?;
        if ledger.contains(record.id().as_str()) {
            debug!(lot_id = %record.id(), "lot already registered");
            return Ok(false);
        }

        debug!(lot_id = %record.id(), quantity = record.quantity(), "lot registered");
        ledger.insert(record);
        Ok(true)
    }

    fn delete(&self, id: &str) -> InventoryResult<StockRecord> {
        let mut ledger = self.write("delete")?;
        let removed = ledger.remove(id).ok_or_else(|| InventoryError::not_found(id))?;

        debug!(lot_id = %id, "lot deleted");
        Ok(removed)
    }

    fn store(&self, id: &str, quantity: i64) -> InventoryResult<i64> {
        ensure_non_negative(quantity)?;

        let mut ledger = self.write("store")?;
        let record = ledger.get_mut(id).ok_or_else(|| InventoryError::not_found(id))?;

        let current = record.quantity();
        let updated = current
            .checked_add(quantity)
            .ok_or(InventoryError::QuantityOverflow {
                current,
                requested: quantity,
            })?;
        record.set_quantity(updated);

        debug!(lot_id = %id, added = quantity, quantity = updated, "stock in");
        Ok(updated)
    }

    fn retrieve(&self, id: &str, quantity: i64) -> InventoryResult<i64> {
        ensure_non_negative(quantity)?;

        let mut ledger = self.write("retrieve")?;
        let record = ledger.get_mut(id).ok_or_else(|| InventoryError::not_found(id))?;

        let current = record.quantity();
        if quantity > current {
            warn!(lot_id = %id, requested = quantity, stock_left = current, "stock out rejected");
            return Err(InventoryError::InsufficientStock { stock_left: current });
        }

        let updated = current - quantity;
        record.set_quantity(updated);

        debug!(lot_id = %id, removed = quantity, quantity = updated, "stock out");
        Ok(updated)
    }

    fn find_by_filter(&self, filter: &InventoryFilter) -> InventoryResult<Vec<StockRecord>> {
        let ledger = self.read("find_by_filter")?;
        Ok(ledger.iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    fn get_all(&self) -> InventoryResult<Vec<StockRecord>> {
        let ledger = self.read("get_all")?;
        Ok(ledger.iter().cloned().collect())
    }

    fn get(&self, id: &str) -> InventoryResult<Option<StockRecord>> {
        let ledger = self.read("get")?;
        Ok(ledger.get(id).cloned())
    }

    fn len(&self) -> InventoryResult<usize> {
        Ok(self.read("len")?.records.len())
    }

    fn total_units(&self) -> InventoryResult<i64> {
        let ledger = self.read("total_units")?;
        Ok(ledger
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.quantity())))
    }
}
