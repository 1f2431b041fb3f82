use std::str::FromStr;

use alloy::primitives::B256;

use crate::errors::ConfigError;

/// Serializes addresses in EIP-55 checksummed form; accepts any case on input.
pub mod checksummed {
    use alloy::primitives::Address;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&address.to_checksum(None))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Address, D::Error> {
        Address::deserialize(deserializer)
    }
}

pub fn b256_from_str(var: &'static str, s: &str) -> Result<B256, ConfigError> {
    B256::from_str(s.trim())
        .map_err(|e| ConfigError::Invalid { var, reason: format!("not a 32-byte hex value: {e}") })
}
