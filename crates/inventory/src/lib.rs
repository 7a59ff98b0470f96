//! Inventory store core.
//!
//! Holds the authoritative set of wine-lot stock records and enforces the
//! stock movement rules: unique lot ids, quantities that never go negative,
//! and stock-in/stock-out executed as single critical sections under
//! concurrent access. Front ends and persistence are callers of
//! [`InventoryStore`], not part of this crate.

pub mod config;
pub mod error;
pub mod filter;
pub mod record;
pub mod store;

pub use config::StoreConfig;
pub use error::{InventoryError, InventoryResult};
pub use filter::InventoryFilter;
pub use record::StockRecord;
pub use store::{InMemoryInventoryStore, InventoryStore};

pub use cellar_core::LotId;
