//! Conversion Integration Tests
//!
//! Exercises the public API the way a front end would: plain strings in,
//! a string or a tagged error out.
//!
//! ## Running
//!
//! ```bash
//! cargo test --test conversion_integration
//! ```

use ibc_addr_tools::{
    derive_ibc_denom, reencode, sha256, ConversionError, DenomTrace, IbcDenom, IBC_DENOM_PREFIX,
};

const COSMOS_ADDR: &str = "cosmos1jl249rmkkdh783nazp48h5j0sjdrwk5yevrgln";

/// Same account on other Cosmos SDK chains
const COUNTERPARTS: [(&str, &str); 4] = [
    ("stride", "stride1jl249rmkkdh783nazp48h5j0sjdrwk5y68r5tl"),
    ("osmo", "osmo1jl249rmkkdh783nazp48h5j0sjdrwk5y3hscfp"),
    ("terra", "terra1jl249rmkkdh783nazp48h5j0sjdrwk5ylgegan"),
    ("juno", "juno1jl249rmkkdh783nazp48h5j0sjdrwk5y07qnc0"),
];

/// Flip one payload character without changing the length
fn tamper(addr: &str, index: usize) -> String {
    let mut chars: Vec<char> = addr.chars().collect();
    chars[index] = if chars[index] == 'q' { 'p' } else { 'q' };
    chars.into_iter().collect()
}

// ============================================================================
// Address Re-encoding
// ============================================================================

mod address {
    use super::*;

    #[test]
    fn test_known_counterparts() {
        for (prefix, expected) in COUNTERPARTS {
            assert_eq!(reencode(COSMOS_ADDR, prefix).unwrap(), expected);
        }
    }

    #[test]
    fn test_round_trip_through_every_prefix() {
        for (prefix, _) in COUNTERPARTS {
            let there = reencode(COSMOS_ADDR, prefix).unwrap();
            let back = reencode(&there, "cosmos").unwrap();
            assert_eq!(back, COSMOS_ADDR, "round trip via {} failed", prefix);
        }
    }

    #[test]
    fn test_same_prefix_is_identity() {
        assert_eq!(reencode(COSMOS_ADDR, "cosmos").unwrap(), COSMOS_ADDR);
    }

    #[test]
    fn test_contract_length_payload() {
        let contract = "cosmos1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq0fr2sh";
        let osmo = reencode(contract, "osmo").unwrap();
        assert!(osmo.starts_with("osmo1"));
        assert_eq!(reencode(&osmo, "cosmos").unwrap(), contract);
    }

    #[test]
    fn test_not_bech32() {
        let err = reencode("not-a-bech32-string", "stride").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidAddressFormat { .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_tampered_payload_fails_checksum() {
        // Every position after "cosmos1" is payload or checksum
        for index in "cosmos1".len()..COSMOS_ADDR.len() {
            let tampered = tamper(COSMOS_ADDR, index);
            assert_eq!(
                reencode(&tampered, "stride").unwrap_err(),
                ConversionError::ChecksumMismatch,
                "tampered at {}: {}",
                index,
                tampered
            );
        }
    }

    #[test]
    fn test_invalid_target_prefix() {
        let err = reencode(COSMOS_ADDR, "").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidPrefix { .. }));

        let err = reencode(COSMOS_ADDR, "cosmos1").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidPrefix { .. }));
    }
}

// ============================================================================
// IBC Denom Derivation
// ============================================================================

mod denom {
    use super::*;

    const ATOM_ON_CHANNEL_0: &str =
        "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2";

    #[test]
    fn test_known_vector() {
        let denom = derive_ibc_denom("transfer/channel-0", "uatom").unwrap();
        assert_eq!(denom, ATOM_ON_CHANNEL_0);

        let expected = hex::encode_upper(sha256(b"transfer/channel-0/uatom"));
        assert_eq!(denom, format!("{}{}", IBC_DENOM_PREFIX, expected));
    }

    #[test]
    fn test_format() {
        let denom = derive_ibc_denom("transfer/channel-42", "ustrd").unwrap();
        let hash = denom.strip_prefix("ibc/").unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn test_deterministic() {
        let a = derive_ibc_denom("transfer/channel-0", "uatom").unwrap();
        let b = derive_ibc_denom("transfer/channel-0", "uatom").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_not_idempotent() {
        let once = derive_ibc_denom("transfer/channel-0", "uatom").unwrap();
        let rehashed = format!(
            "{}{}",
            IBC_DENOM_PREFIX,
            hex::encode_upper(sha256(once.as_bytes()))
        );
        assert_ne!(once, rehashed);
    }

    #[test]
    fn test_opaque_inputs_hashed_as_given() {
        // No structural validation: the path is concatenated verbatim
        let denom = derive_ibc_denom("not a channel", "some denom").unwrap();
        let expected = hex::encode_upper(sha256(b"not a channel/some denom"));
        assert_eq!(denom, format!("ibc/{}", expected));
    }

    #[test]
    fn test_trace_and_parse_agree() {
        let parsed = DenomTrace::parse("transfer/channel-0/uatom").unwrap();
        let direct = derive_ibc_denom(parsed.path(), parsed.base_denom()).unwrap();
        assert_eq!(parsed.ibc_denom().to_string(), direct);

        let round: IbcDenom = direct.parse().unwrap();
        assert_eq!(round, parsed.ibc_denom());
    }

    #[test]
    fn test_multi_hop_matches_manual_concatenation() {
        let trace = DenomTrace::new("transfer/channel-5", "uatom")
            .unwrap()
            .with_hop("transfer", "channel-0")
            .unwrap();

        let manual = derive_ibc_denom("transfer/channel-0/transfer/channel-5", "uatom").unwrap();
        assert_eq!(trace.ibc_denom().to_string(), manual);
    }
}
