//! IBC denom derivation
//!
//! A token that crosses an IBC channel is known on the receiving chain by the
//! SHA-256 of its denom trace, rendered as `ibc/<UPPERCASE HEX>`. Other chains
//! and indexers recompute this identifier, so the byte layout is fixed:
//!
//! ```text
//! sha256("{port}/{channel}/.../{base_denom}")
//! ```
//!
//! See ICS-20 / ibc-go ADR-001 (coin source tracing).

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{ConversionError, Result};

/// Literal prefix of every hashed IBC denom
pub const IBC_DENOM_PREFIX: &str = "ibc/";

/// Prefix shared by ICS-24 channel identifiers
const CHANNEL_ID_PREFIX: &str = "channel-";

/// Compute SHA-256 hash of data
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let digest = Sha256::digest(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&digest);
    output
}

/// Derive the IBC denom for `base_denom` received over `channel_path`
///
/// `channel_path` is opaque (`transfer/channel-0`, or several hops joined
/// with `/`); it is hashed exactly as given.
pub fn derive_ibc_denom(channel_path: &str, base_denom: &str) -> Result<String> {
    let trace = DenomTrace::new(channel_path, base_denom)?;
    Ok(trace.ibc_denom().to_string())
}

// ============================================================================
// Denom Trace
// ============================================================================

/// Channel path plus base denomination of a transferred token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DenomTrace {
    path: String,
    base_denom: String,
}

impl DenomTrace {
    /// Create a trace from a channel path and base denom (both non-empty)
    pub fn new(channel_path: &str, base_denom: &str) -> Result<Self> {
        if channel_path.is_empty() {
            return Err(ConversionError::invalid_trace("channel path is empty"));
        }
        if base_denom.is_empty() {
            return Err(ConversionError::invalid_trace("base denom is empty"));
        }

        Ok(Self {
            path: channel_path.to_string(),
            base_denom: base_denom.to_string(),
        })
    }

    /// Split a full trace such as `transfer/channel-0/transfer/channel-5/uatom`
    ///
    /// Leading `{port}/channel-{n}` pairs form the path; the remainder is the
    /// base denom and may itself contain `/` (e.g. `gamm/pool/1`).
    pub fn parse(full_trace: &str) -> Result<Self> {
        let parts: Vec<&str> = full_trace.split('/').collect();

        let mut hops = 0;
        while hops * 2 + 2 < parts.len()
            && !parts[hops * 2].is_empty()
            && is_channel_id(parts[hops * 2 + 1])
        {
            hops += 1;
        }

        if hops == 0 {
            return Err(ConversionError::invalid_trace(format!(
                "'{}' has no port/channel hops",
                full_trace
            )));
        }

        let path = parts[..hops * 2].join("/");
        let base_denom = parts[hops * 2..].join("/");
        Self::new(&path, &base_denom)
    }

    /// Channel path, e.g. `transfer/channel-0`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base denomination, e.g. `uatom`
    pub fn base_denom(&self) -> &str {
        &self.base_denom
    }

    /// The exact string that is hashed: `{path}/{base_denom}`
    pub fn full_path(&self) -> String {
        format!("{}/{}", self.path, self.base_denom)
    }

    /// Trace of this token after it is sent again over `port/channel`
    ///
    /// The new hop is prepended, since the receiving chain sees it first.
    pub fn with_hop(&self, port: &str, channel: &str) -> Result<Self> {
        for (name, value) in [("port", port), ("channel", channel)] {
            if value.is_empty() || value.contains('/') {
                return Err(ConversionError::invalid_trace(format!(
                    "{} identifier '{}' must be non-empty and contain no '/'",
                    name, value
                )));
            }
        }

        Self::new(&format!("{}/{}/{}", port, channel, self.path), &self.base_denom)
    }

    /// Hash the trace into its `ibc/...` identifier
    pub fn ibc_denom(&self) -> IbcDenom {
        let full_path = self.full_path();
        let denom = IbcDenom(sha256(full_path.as_bytes()));

        debug!(trace = %full_path, denom = %denom, "Derived IBC denom");

        denom
    }
}

impl fmt::Display for DenomTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.path, self.base_denom)
    }
}

fn is_channel_id(s: &str) -> bool {
    s.strip_prefix(CHANNEL_ID_PREFIX)
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

// ============================================================================
// Hashed IBC Denom
// ============================================================================

/// `ibc/<HASH>` identifier: a 32-byte SHA-256 digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IbcDenom([u8; 32]);

impl IbcDenom {
    /// Wrap an already computed digest
    pub fn from_hash(hash: [u8; 32]) -> Self {
        IbcDenom(hash)
    }

    /// Raw digest bytes
    pub fn hash_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Uppercase hex digest without the `ibc/` prefix
    pub fn hash_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Display for IbcDenom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", IBC_DENOM_PREFIX, self.hash_hex())
    }
}

impl FromStr for IbcDenom {
    type Err = ConversionError;

    /// Accepts either hex case; output is always uppercase.
    fn from_str(s: &str) -> Result<Self> {
        let hash_hex = s.strip_prefix(IBC_DENOM_PREFIX).ok_or_else(|| {
            ConversionError::invalid_trace(format!("'{}' does not start with 'ibc/'", s))
        })?;

        if hash_hex.len() != 64 {
            return Err(ConversionError::invalid_trace(format!(
                "IBC denom hash must be 64 hex chars, got {}",
                hash_hex.len()
            )));
        }

        let bytes = hex::decode(hash_hex)
            .map_err(|e| ConversionError::invalid_trace(format!("invalid hex: {}", e)))?;

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&bytes);
        Ok(IbcDenom(hash))
    }
}

impl Serialize for IbcDenom {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
