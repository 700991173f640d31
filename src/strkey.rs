//! Stellar strkey validity checks
//!
//! A strkey is a base32-encoded on-chain identifier: one version byte, a
//! 32-byte payload, and a trailing CRC-16/XMODEM checksum (little-endian)
//! over version + payload. The encodings used by the directory are:
//! - `G...` — ed25519 account public key (issuer of a classic asset)
//! - `C...` — contract ID (SEP-41 token)
//!
//! Only validity checks are provided; the directory never needs to decode
//! a key into its payload.

use crc::{CRC_16_XMODEM, Crc};

/// Version byte for ed25519 public keys (`G` prefix)
const VERSION_ED25519_PUBLIC_KEY: u8 = 6 << 3;

/// Version byte for contract IDs (`C` prefix)
const VERSION_CONTRACT: u8 = 2 << 3;

/// Encoded length: 35 bytes (1 version + 32 payload + 2 checksum) in
/// unpadded base32 is always exactly 56 characters.
const ENCODED_LEN: usize = 56;
const DECODED_LEN: usize = 35;

const CHECKSUM: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Check whether `key` is a valid ed25519 public-key strkey (`G...`)
///
/// # Examples
/// ```
/// use sep1_directory::strkey;
///
/// assert!(strkey::is_valid_ed25519_public_key(
///     "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ"
/// ));
/// assert!(!strkey::is_valid_ed25519_public_key("GABC"));
/// ```
pub fn is_valid_ed25519_public_key(key: &str) -> bool {
    decode_check(key, VERSION_ED25519_PUBLIC_KEY)
}

/// Check whether `key` is a valid contract-ID strkey (`C...`)
pub fn is_valid_contract_id(key: &str) -> bool {
    decode_check(key, VERSION_CONTRACT)
}

/// Decode an unpadded RFC-4648 base32 strkey and verify version + checksum
fn decode_check(key: &str, version: u8) -> bool {
    if key.len() != ENCODED_LEN {
        return false;
    }

    let mut decoded = [0u8; DECODED_LEN];
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;
    let mut idx = 0;

    for c in key.bytes() {
        let value = match c {
            b'A'..=b'Z' => c - b'A',
            b'2'..=b'7' => c - b'2' + 26,
            _ => return false,
        };
        buffer = (buffer << 5) | u32::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            decoded[idx] = (buffer >> bits) as u8;
            idx += 1;
        }
    }
    // 56 chars * 5 bits = 280 bits = exactly 35 bytes, no leftover bits

    if decoded[0] != version {
        return false;
    }

    let expected = u16::from_le_bytes([decoded[33], decoded[34]]);
    CHECKSUM.checksum(&decoded[..33]) == expected
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_G: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";
    const VALID_C: &str = "CA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUWDA";

    #[test]
    fn test_valid_public_key() {
        assert!(is_valid_ed25519_public_key(VALID_G));
        assert!(is_valid_ed25519_public_key(
            "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7"
        ));
    }

    #[test]
    fn test_valid_contract_id() {
        assert!(is_valid_contract_id(VALID_C));
        assert!(is_valid_contract_id(
            "CAAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQC526"
        ));
    }

    #[test]
    fn test_version_byte_mismatch() {
        // A valid contract key is not a valid public key and vice versa
        assert!(!is_valid_ed25519_public_key(VALID_C));
        assert!(!is_valid_contract_id(VALID_G));
    }

    #[test]
    fn test_invalid_length() {
        assert!(!is_valid_ed25519_public_key(""));
        assert!(!is_valid_ed25519_public_key("G"));
        assert!(!is_valid_ed25519_public_key(&VALID_G[..55]));
        let too_long = format!("{VALID_G}A");
        assert!(!is_valid_ed25519_public_key(&too_long));
    }

    #[test]
    fn test_corrupted_checksum() {
        // Flip the final character; the checksum no longer matches
        let mut corrupted = String::from(&VALID_G[..55]);
        corrupted.push(if VALID_G.ends_with('A') { 'B' } else { 'A' });
        assert!(!is_valid_ed25519_public_key(&corrupted));
    }

    #[test]
    fn test_invalid_alphabet() {
        // '0' and '1' are not in the base32 alphabet
        let bad = format!("{}01", &VALID_G[..54]);
        assert!(!is_valid_ed25519_public_key(&bad));

        let lowercase = VALID_G.to_lowercase();
        assert!(!is_valid_ed25519_public_key(&lowercase));
    }
}
