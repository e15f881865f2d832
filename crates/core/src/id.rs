//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum length of a UPC code, matching the catalog column width.
pub const UPC_MAX_LEN: usize = 30;

/// Identifier of a customer record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

/// Identifier of an order header.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(CustomerId, "CustomerId");
impl_uuid_newtype!(OrderId, "OrderId");

/// Universal Product Code. Natural key of a product record.
///
/// Codes are kept as strings because leading zeros are significant
/// (`"000000000001"` and `"1"` are different products).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Upc(String);

impl Upc {
    /// Validate and wrap a raw code.
    ///
    /// Rejects empty codes, codes with surrounding whitespace and codes
    /// longer than [`UPC_MAX_LEN`].
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.is_empty() {
            return Err(DomainError::invalid_id("UPC: empty code"));
        }
        if code.len() > UPC_MAX_LEN {
            return Err(DomainError::invalid_id(format!(
                "UPC: code exceeds {UPC_MAX_LEN} characters"
            )));
        }
        if code.trim() != code {
            return Err(DomainError::invalid_id("UPC: surrounding whitespace"));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Upc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Upc {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Upc> for String {
    fn from(value: Upc) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upc_accepts_codes_with_leading_zeros() {
        let upc = Upc::new("000000000001").unwrap();
        assert_eq!(upc.as_str(), "000000000001");
    }

    #[test]
    fn upc_rejects_empty_code() {
        let err = Upc::new("").unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn upc_rejects_overlong_code() {
        let err = Upc::new("0".repeat(UPC_MAX_LEN + 1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn upc_rejects_surrounding_whitespace() {
        let err = Upc::new(" 076174517163 ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }
}
