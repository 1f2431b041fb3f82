use std::fmt;

use alloy::{
    hex,
    primitives::{Address, B256},
    signers::local::PrivateKeySigner,
};

use crate::errors::KeyError;

const KEY_HEX_LEN: usize = 64;

/// A secp256k1 private key in canonical 32-byte form.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(B256);

impl PrivateKey {
    /// Normalizes hex key material: optional `0x` prefix, surrounding whitespace and missing
    /// leading zeros are all accepted.
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        let s = s.trim();
        let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);

        if digits.is_empty() {
            return Err(KeyError::Empty);
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(KeyError::InvalidHex);
        }
        if digits.len() > KEY_HEX_LEN {
            return Err(KeyError::TooLong(digits.len()));
        }

        let padded = format!("{:0>width$}", digits, width = KEY_HEX_LEN);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(padded, &mut bytes).map_err(|_| KeyError::InvalidHex)?;
        Ok(Self(B256::from(bytes)))
    }

    pub const fn as_b256(&self) -> &B256 {
        &self.0
    }

    /// 64 lowercase hex digits without prefix, the form Nitro expects.
    pub fn to_unprefixed_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// Derives the account address controlled by a private key.
pub trait AccountDeriver {
    fn address(&self, key: &PrivateKey) -> Result<Address, KeyError>;
}

/// Derivation through alloy's local signer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalKeyDeriver;

impl AccountDeriver for LocalKeyDeriver {
    fn address(&self, key: &PrivateKey) -> Result<Address, KeyError> {
        let signer = PrivateKeySigner::from_bytes(key.as_b256())
            .map_err(|e| KeyError::InvalidScalar(e.to_string()))?;
        Ok(signer.address())
    }
}
