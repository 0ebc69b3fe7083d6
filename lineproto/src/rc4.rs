//! RC4 stream cipher used for application-level payload encryption
//!
//! This module provides `Rc4`, a small stateful stream cipher in the
//! classic KSA + PRGA form. It is NOT cryptographically secure and is
//! kept here precisely because the line server exists to demonstrate
//! stream-cipher misuse; do not reuse it for protecting real data.
//!
use thiserror::Error;

/// Errors produced while building or driving the cipher
#[derive(Debug, Error)]
pub enum CipherError {
    /// The configured key has zero length, the KSA cannot run
    #[error("cipher key is empty")]
    EmptyKey,
}

/// RC4 keystream generator with 256-byte internal state
pub struct Rc4 {
    /// Permutation of 0..=255, mutated by the PRGA
    state: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4 {
    /// Create a new cipher instance, running the key-scheduling algorithm
    ///
    /// # Arguments
    /// * `key` - Secret key bytes (1..=256 bytes of it are mixed in)
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }

        let mut state = [0u8; 256];
        for (i, byte) in state.iter_mut().enumerate() {
            *byte = i as u8;
        }

        let mut j: u8 = 0;
        for i in 0..256 {
            j = j
                .wrapping_add(state[i])
                .wrapping_add(key[i % key.len()]);
            state.swap(i, j as usize);
        }

        Ok(Self { state, i: 0, j: 0 })
    }

    /// Apply the keystream to data in-place
    ///
    /// Encrypts or decrypts (the operation is symmetric) by XORing each
    /// byte with the next keystream byte. The cipher keeps its position,
    /// so successive calls continue the same keystream.
    ///
    /// # Arguments
    /// * `data` - Byte slice to encrypt/decrypt in-place
    pub fn apply(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            self.i = self.i.wrapping_add(1);
            self.j = self.j.wrapping_add(self.state[self.i as usize]);
            self.state.swap(self.i as usize, self.j as usize);

            let k = self.state[self.i as usize].wrapping_add(self.state[self.j as usize]);
            *byte ^= self.state[k as usize];
        }
    }
}
