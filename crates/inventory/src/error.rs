use std::time::Duration;

use thiserror::Error;

use cellar_core::{DomainError, LotId};

/// Result type returned by inventory store operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory store error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// No record is registered under the identifier.
    #[error("lot not found: {0}")]
    NotFound(LotId),

    /// A stock-out asked for more than is on hand; the record was left unchanged.
    #[error("not enough stock: only {stock_left} left")]
    InsufficientStock { stock_left: i64 },

    /// The store lock could not be acquired in time. Nothing was changed; retry later.
    #[error("store lock not acquired within {0:?}")]
    LockTimeout(Duration),

    /// Quantities (registered or moved) must not be negative.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("quantity overflow (current={current}, requested={requested})")]
    QuantityOverflow { current: i64, requested: i64 },
}

impl InventoryError {
    pub fn not_found(id: impl Into<LotId>) -> Self {
        Self::NotFound(id.into())
    }

    /// Only lock contention is transient; every other failure reflects store state or input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LockTimeout(_))
    }
}

impl From<InventoryError> for DomainError {
    fn from(err: InventoryError) -> Self {
        match &err {
            InventoryError::NotFound(id) => DomainError::not_found(format!("lot {id}")),
            InventoryError::InsufficientStock { .. } | InventoryError::QuantityOverflow { .. } => {
                DomainError::invariant(err.to_string())
            }
            InventoryError::InvalidQuantity(_) => DomainError::validation(err.to_string()),
            InventoryError::LockTimeout(_) => DomainError::unavailable(err.to_string()),
        }
    }
}
