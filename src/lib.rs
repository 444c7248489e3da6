//! IBC Address Tools: Cosmos address and IBC denom conversions
//!
//! Two stateless, deterministic conversions used across Cosmos SDK chains:
//!
//! - **Address Re-encoding** - Move a bech32 account address to another chain's prefix
//! - **IBC Denom Derivation** - Compute `ibc/<HASH>` for a token received over a channel
//! - **Display** - Shorten long results for narrow output
//! - **Config** - Environment-driven settings for the CLI
//!
//! ## Usage
//!
//! ```
//! use ibc_addr_tools::{derive_ibc_denom, reencode};
//!
//! let stride = reencode("cosmos1jl249rmkkdh783nazp48h5j0sjdrwk5yevrgln", "stride").unwrap();
//! assert_eq!(stride, "stride1jl249rmkkdh783nazp48h5j0sjdrwk5y68r5tl");
//!
//! let denom = derive_ibc_denom("transfer/channel-0", "uatom").unwrap();
//! assert!(denom.starts_with("ibc/27394FB0"));
//! ```

pub mod address_codec;
pub mod config;
pub mod display;
pub mod error;
pub mod hash;

// Re-export commonly used items at the crate root
pub use address_codec::{
    decode_bech32_address, encode_bech32_address, reencode, validate_prefix, Bech32Address,
};
pub use config::Config;
pub use display::ellipsize;
pub use error::{ConversionError, Result};
pub use hash::{derive_ibc_denom, sha256, DenomTrace, IbcDenom, IBC_DENOM_PREFIX};
