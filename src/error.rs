//! Error taxonomy for address and denom conversions
//!
//! Every failure is returned to the caller as a value. Nothing is recovered
//! internally, so the presentation layer decides how to word each case.

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = ConversionError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    // ========================================================================
    // Address re-encoding
    // ========================================================================
    #[error("Invalid bech32 address: {reason}")]
    InvalidAddressFormat { reason: String },

    #[error("Bech32 checksum does not match the address prefix")]
    ChecksumMismatch,

    #[error("Invalid bech32 prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    // ========================================================================
    // IBC denom derivation
    // ========================================================================
    /// The hash primitive could not be used for this call.
    ///
    /// The in-process SHA-256 never fails; hosts that plug in an external
    /// digest backend report its failures through this variant.
    #[error("Hash primitive unavailable: {reason}")]
    HashUnavailable { reason: String },

    #[error("Invalid denom trace: {reason}")]
    InvalidDenomTrace { reason: String },
}

impl ConversionError {
    /// Whether the same call may succeed later without changing the input.
    ///
    /// Only platform failures qualify; input errors need corrected input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ConversionError::HashUnavailable { .. })
    }

    pub(crate) fn invalid_address(reason: impl Into<String>) -> Self {
        ConversionError::InvalidAddressFormat {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_prefix(prefix: &str, reason: impl Into<String>) -> Self {
        ConversionError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_trace(reason: impl Into<String>) -> Self {
        ConversionError::InvalidDenomTrace {
            reason: reason.into(),
        }
    }
}
