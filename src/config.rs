//! CLI configuration

use eyre::{eyre, Result, WrapErr};
use std::env;

use crate::address_codec::validate_prefix;

/// Default display width for re-encoded addresses
pub const DEFAULT_ADDRESS_DISPLAY_LIMIT: usize = 40;

/// Default display width for IBC denom hashes
pub const DEFAULT_DENOM_DISPLAY_LIMIT: usize = 35;

/// Default target prefix when none is given
pub const DEFAULT_PREFIX: &str = "stride";

/// Default channel path for denom derivation
pub const DEFAULT_CHANNEL: &str = "transfer/channel-0";

/// Presentation settings for the command-line front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Characters shown for a re-encoded address before truncation
    pub address_display_limit: usize,
    /// Characters of the hash shown after `ibc/` before truncation
    pub denom_display_limit: usize,
    /// Target prefix used when the `address` command omits one
    pub default_prefix: String,
    /// Channel path used when the `denom` command omits one
    pub default_channel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address_display_limit: DEFAULT_ADDRESS_DISPLAY_LIMIT,
            denom_display_limit: DEFAULT_DENOM_DISPLAY_LIMIT,
            default_prefix: DEFAULT_PREFIX.to_string(),
            default_channel: DEFAULT_CHANNEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded .env from {:?}", path);
        }

        Self::from_env()
    }

    /// Read configuration from process environment only
    pub fn from_env() -> Result<Self> {
        let default_prefix =
            env::var("IBC_TOOLS_DEFAULT_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());
        validate_prefix(&default_prefix).wrap_err("Invalid IBC_TOOLS_DEFAULT_PREFIX")?;

        let default_channel =
            env::var("IBC_TOOLS_DEFAULT_CHANNEL").unwrap_or_else(|_| DEFAULT_CHANNEL.to_string());
        if default_channel.is_empty() {
            return Err(eyre!("IBC_TOOLS_DEFAULT_CHANNEL must not be empty"));
        }

        Ok(Self {
            address_display_limit: parse_limit(
                "IBC_TOOLS_ADDRESS_DISPLAY_LIMIT",
                DEFAULT_ADDRESS_DISPLAY_LIMIT,
            )?,
            denom_display_limit: parse_limit(
                "IBC_TOOLS_DENOM_DISPLAY_LIMIT",
                DEFAULT_DENOM_DISPLAY_LIMIT,
            )?,
            default_prefix,
            default_channel,
        })
    }
}

fn parse_limit(key: &str, default: usize) -> Result<usize> {
    match env::var(key) {
        Ok(v) => v
            .trim()
            .parse()
            .map_err(|_| eyre!("Invalid {}: expected a non-negative integer, got '{}'", key, v)),
        Err(_) => Ok(default),
    }
}
