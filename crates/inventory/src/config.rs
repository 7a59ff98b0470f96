//! Store configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the lock wait, in milliseconds.
pub const LOCK_TIMEOUT_ENV: &str = "CELLAR_LOCK_TIMEOUT_MS";

/// Default upper bound on how long an operation waits for the store lock.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(1);

/// Tunables for [`InMemoryInventoryStore`](crate::InMemoryInventoryStore).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Longest an operation waits for the store lock before failing with
    /// [`InventoryError::LockTimeout`](crate::InventoryError::LockTimeout).
    #[serde(rename = "lock_timeout_ms", with = "millis")]
    pub lock_timeout: Duration,
}

impl StoreConfig {
    pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }

    /// Read overrides from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOCK_TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.lock_timeout = Duration::from_millis(ms),
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "{LOCK_TIMEOUT_ENV} is not a number of milliseconds; using default"
                ),
            }
        }

        config
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
