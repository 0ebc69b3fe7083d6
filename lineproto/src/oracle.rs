//! Cipher oracle: keystream lifecycle policy around the RC4 core.
//!
//! The oracle owns the fixed shared key and a `KeystreamPolicy` deciding
//! how keystream state lives across requests. Both shipped policies start
//! a fresh keystream at offset 0 for every message, which is exactly the
//! many-time-pad condition the server models. They stay separate named
//! values so a continuous-session policy (state carried across messages,
//! never reset) can be added later without touching the `encrypt`
//! contract or its callers.
//!
use std::str::FromStr;

use crate::rc4::{CipherError, Rc4};

/// How keystream state is handled between encrypt calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeystreamPolicy {
    /// Fresh keystream per message, the default operating mode
    ResetPerRequest,
    /// Same computation, but selected deliberately to flag that the
    /// reset (and its keystream reuse) is the point of the deployment
    ExplicitReset,
}

impl FromStr for KeystreamPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reset-per-request" => Ok(Self::ResetPerRequest),
            "explicit-reset" => Ok(Self::ExplicitReset),
            other => Err(format!("unknown keystream policy: {other}")),
        }
    }
}

/// Encrypts one message at a time under a fixed key and lifecycle policy
pub struct CipherOracle {
    /// Shared secret key, process-wide for the server's lifetime
    key: Vec<u8>,
    /// Keystream lifecycle mode
    policy: KeystreamPolicy,
}

impl CipherOracle {
    /// Create an oracle for the given key and policy
    pub fn new(key: impl Into<Vec<u8>>, policy: KeystreamPolicy) -> Self {
        Self {
            key: key.into(),
            policy,
        }
    }

    /// The policy this oracle was built with
    pub fn policy(&self) -> KeystreamPolicy {
        self.policy
    }

    /// Encrypt one plaintext, returning ciphertext of equal length
    ///
    /// Fails only if the keystream cannot be initialized (empty key);
    /// callers must not treat a failed call as having consumed anything.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut data = plaintext.to_vec();
        match self.policy {
            KeystreamPolicy::ResetPerRequest => {
                let mut cipher = Rc4::new(&self.key)?;
                cipher.apply(&mut data);
            }
            KeystreamPolicy::ExplicitReset => {
                // Identical to ResetPerRequest on purpose. A future
                // ContinuousSession arm would keep `Rc4` alive between
                // calls instead of rebuilding it here.
                let mut cipher = Rc4::new(&self.key)?;
                cipher.apply(&mut data);
            }
        }
        Ok(data)
    }
}
