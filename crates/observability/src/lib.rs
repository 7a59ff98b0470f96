//! Tracing and logging setup shared by every binary and test harness that
//! drives the inventory store.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Same as [`init`], with a caller-chosen default filter used when `RUST_LOG`
/// is unset. Returns `true` if this call installed the global subscriber.
pub fn init_with_default(default_filter: &str) -> bool {
    tracing::init_with_default(default_filter)
}

/// Tracing configuration (filters, layers).
pub mod tracing;
