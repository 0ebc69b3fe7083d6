//! Line server protocol crate.
//!
//! This crate contains the cipher-side pieces of the line server: the
//! RC4 stream cipher (`rc4`) and the `CipherOracle` with its keystream
//! lifecycle policy (`oracle`). These modules are intentionally minimal
//! and focus on the server's internal needs rather than being
//! general-purpose cryptography libraries.
//!
/// RC4 stream cipher module
pub mod rc4;
/// Cipher oracle and keystream lifecycle policy module
pub mod oracle;
#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::{
        oracle::{CipherOracle, KeystreamPolicy},
        rc4::{CipherError, Rc4},
    };

    /// Test RC4 against the published "Key"/"Plaintext" vector
    #[test]
    fn rc4_known_vector_key_plaintext() {
        let mut data = b"Plaintext".to_vec();
        let mut cipher = Rc4::new(b"Key").unwrap();
        cipher.apply(&mut data);
        assert_eq!(
            data,
            [0xBB, 0xF3, 0x16, 0xE8, 0xD9, 0x40, 0xAF, 0x0A, 0xD3]
        );
    }

    /// Test RC4 against the published "Wiki"/"pedia" vector
    #[test]
    fn rc4_known_vector_wiki_pedia() {
        let mut data = b"pedia".to_vec();
        let mut cipher = Rc4::new(b"Wiki").unwrap();
        cipher.apply(&mut data);
        assert_eq!(data, [0x10, 0x21, 0xBF, 0x04, 0x20]);
    }

    /// Test encryption and decryption symmetry with fresh instances
    #[test]
    fn rc4_round_trip() {
        let data = b"the quick brown fox";
        let mut data_copy = data.to_vec();
        let mut cipher1 = Rc4::new(b"CTF_KEY_12345").unwrap();
        cipher1.apply(&mut data_copy);
        assert_ne!(data_copy, data);
        let mut cipher2 = Rc4::new(b"CTF_KEY_12345").unwrap();
        cipher2.apply(&mut data_copy);
        assert_eq!(data_copy, data);
    }

    /// An empty key must be rejected, not wrapped around
    #[test]
    fn rc4_rejects_empty_key() {
        assert!(matches!(Rc4::new(b""), Err(CipherError::EmptyKey)));
    }

    /// Both shipped policies must produce byte-identical ciphertext
    #[test]
    fn oracle_policies_agree() {
        let reset = CipherOracle::new(b"CTF_KEY_12345".to_vec(), KeystreamPolicy::ResetPerRequest);
        let explicit = CipherOracle::new(b"CTF_KEY_12345".to_vec(), KeystreamPolicy::ExplicitReset);
        let ct1 = reset.encrypt(b"alpha").unwrap();
        let ct2 = explicit.encrypt(b"alpha").unwrap();
        assert_eq!(ct1, ct2);
        assert_eq!(ct1.len(), b"alpha".len());
    }

    /// Successive encrypts under reset-per-request reuse the keystream:
    /// XOR of two ciphertexts equals XOR of the two plaintexts
    #[test]
    fn oracle_reset_policy_reuses_keystream() {
        let oracle = CipherOracle::new(b"CTF_KEY_12345".to_vec(), KeystreamPolicy::ResetPerRequest);
        let ct1 = oracle.encrypt(b"alpha").unwrap();
        let ct2 = oracle.encrypt(b"gamma").unwrap();
        for i in 0..5 {
            assert_eq!(ct1[i] ^ ct2[i], b"alpha"[i] ^ b"gamma"[i]);
        }
    }

    /// Oracle surfaces keystream-init failure instead of panicking
    #[test]
    fn oracle_empty_key_fails() {
        let oracle = CipherOracle::new(Vec::new(), KeystreamPolicy::ResetPerRequest);
        assert!(oracle.encrypt(b"alpha").is_err());
    }

    /// Policy names parse from their config spellings
    #[test]
    fn policy_parses_from_config_names() {
        assert_eq!(
            KeystreamPolicy::from_str("reset-per-request").unwrap(),
            KeystreamPolicy::ResetPerRequest
        );
        assert_eq!(
            KeystreamPolicy::from_str("explicit-reset").unwrap(),
            KeystreamPolicy::ExplicitReset
        );
        assert!(KeystreamPolicy::from_str("continuous-session").is_err());
    }
}
