//! Inventory store boundary.
//!
//! Defines the operation surface front ends call into, plus the in-memory
//! implementation. A persistence-backed store can be added behind the same
//! trait without changing caller semantics.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryInventoryStore;
pub use r#trait::InventoryStore;
