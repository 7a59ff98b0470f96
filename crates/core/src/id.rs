//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Identifier of a stock-keeping lot.
///
/// Lot identifiers are free-form strings chosen by the caller (catalogue
/// numbers, bin labels, ...). `generate()` is available when the caller has no
/// natural key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LotId(String);

impl LotId {
    /// Wrap an existing identifier without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a fresh identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl core::fmt::Display for LotId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LotId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LotId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LotId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LotId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for LotId {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("LotId: empty identifier"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_rejects_blank() {
        let id: LotId = "  BDX-2015-01 ".parse().unwrap();
        assert_eq!(id.to_string(), "BDX-2015-01");
        assert_eq!(id.as_str(), "BDX-2015-01");

        let err = "   ".parse::<LotId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = LotId::generate();
        let b = LotId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = LotId::new("1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1\"");
        let back: LotId = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(back, id);
    }
}
