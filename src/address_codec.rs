//! Cosmos Bech32 Address Re-encoding
//!
//! Cosmos SDK chains derive account addresses the same way and differ only in
//! the human-readable prefix (`cosmos`, `osmo`, `stride`, ...). Moving an
//! address between chains therefore means decoding the payload under the
//! source prefix and encoding the identical bytes under the target prefix.
//!
//! ## Address Format
//!
//! ```text
//! | prefix (hrp) | "1" | base32 payload | base32 checksum (6 chars) |
//! ```
//!
//! The payload length is whatever was encoded: 20 bytes for accounts, 32 for
//! contracts and module accounts, anything else is carried through untouched.

use bech32::{self, FromBase32, ToBase32, Variant};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::error::{ConversionError, Result};

/// Longest human-readable part permitted by BIP-173
pub const MAX_PREFIX_LEN: usize = 83;

// ============================================================================
// Decoded Address
// ============================================================================

/// A decoded bech32 address: its prefix and the raw payload bytes
///
/// The payload is fixed once decoded. Re-encoding never mutates it, it only
/// serializes a copy under a different prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bech32Address {
    prefix: String,
    payload: Vec<u8>,
}

impl Bech32Address {
    /// Build an address from a prefix and raw bytes, validating the prefix
    ///
    /// An all-uppercase prefix is stored lowercase.
    pub fn new(prefix: &str, payload: impl Into<Vec<u8>>) -> Result<Self> {
        validate_prefix(prefix)?;
        Ok(Self {
            prefix: prefix.to_ascii_lowercase(),
            payload: payload.into(),
        })
    }

    /// Decode a bech32 string (e.g., "cosmos1...")
    pub fn parse(addr: &str) -> Result<Self> {
        let (payload, prefix) = decode_bech32_address(addr)?;
        Ok(Self { prefix, payload })
    }

    /// Human-readable prefix the address was decoded with
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Raw payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Encode under the original prefix
    ///
    /// The prefix already passed bech32 decoding, so the target-prefix rules
    /// are not applied again (a decoded prefix may legally contain `1`).
    pub fn encode(&self) -> Result<String> {
        bech32::encode(&self.prefix, self.payload.to_base32(), Variant::Bech32)
            .map_err(|e| ConversionError::invalid_prefix(&self.prefix, e.to_string()))
    }

    /// Encode the same payload under another chain's prefix
    pub fn to_prefix(&self, prefix: &str) -> Result<String> {
        encode_bech32_address(&self.payload, prefix)
    }
}

impl fmt::Display for Bech32Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.encode().map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl FromStr for Bech32Address {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Re-encode a bech32 address under `target_prefix`
///
/// Decodes `address`, verifies its checksum against its own prefix, and
/// encodes the same payload bytes with the new prefix.
pub fn reencode(address: &str, target_prefix: &str) -> Result<String> {
    let (payload, source_prefix) = decode_bech32_address(address)?;
    let encoded = encode_bech32_address(&payload, target_prefix)?;

    debug!(
        from = %source_prefix,
        to = %target_prefix,
        payload_len = payload.len(),
        "Re-encoded bech32 address"
    );

    Ok(encoded)
}

/// Decode a bech32 address to its raw bytes (any length)
///
/// Returns (raw_bytes, hrp) where hrp is the human-readable prefix
pub fn decode_bech32_address(addr: &str) -> Result<(Vec<u8>, String)> {
    if addr.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ConversionError::invalid_address("address must be lowercase"));
    }

    let (hrp, data, variant) = bech32::decode(addr).map_err(map_decode_error)?;

    // Cosmos uses the original bech32 constant; a bech32m checksum was
    // computed with a different polynomial residue and does not match.
    if variant != Variant::Bech32 {
        return Err(ConversionError::ChecksumMismatch);
    }

    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| ConversionError::invalid_address(format!("invalid base32 data: {}", e)))?;

    trace!(hrp = %hrp, payload_len = bytes.len(), "Decoded bech32 address");

    Ok((bytes, hrp))
}

/// Encode raw bytes to a bech32 address with given prefix
///
/// An all-uppercase prefix is lowercased, so `STRIDE` encodes as `stride1...`.
pub fn encode_bech32_address(bytes: &[u8], hrp: &str) -> Result<String> {
    validate_prefix(hrp)?;

    bech32::encode(&hrp.to_ascii_lowercase(), bytes.to_base32(), Variant::Bech32)
        .map_err(|e| ConversionError::invalid_prefix(hrp, e.to_string()))
}

/// Check that `prefix` is usable as a bech32 human-readable part
///
/// Rejects empty or overlong prefixes, characters outside printable ASCII
/// (33..=126), the `1` separator, and mixed case.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(ConversionError::invalid_prefix(prefix, "prefix is empty"));
    }

    if prefix.len() > MAX_PREFIX_LEN {
        return Err(ConversionError::invalid_prefix(
            prefix,
            format!(
                "prefix is {} characters, maximum is {}",
                prefix.len(),
                MAX_PREFIX_LEN
            ),
        ));
    }

    for c in prefix.chars() {
        if !(33..=126).contains(&(c as u32)) {
            return Err(ConversionError::invalid_prefix(
                prefix,
                format!("character {:?} is not allowed", c),
            ));
        }
        if c == '1' {
            return Err(ConversionError::invalid_prefix(
                prefix,
                "prefix must not contain the '1' separator",
            ));
        }
    }

    let has_upper = prefix.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = prefix.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        return Err(ConversionError::invalid_prefix(prefix, "prefix has mixed case"));
    }

    Ok(())
}

fn map_decode_error(err: bech32::Error) -> ConversionError {
    match err {
        bech32::Error::InvalidChecksum => ConversionError::ChecksumMismatch,
        other => ConversionError::invalid_address(other.to_string()),
    }
}
