//! Rotatable signing secrets
//!
//! Cookie values are signed, not encrypted: the payload is visible to the
//! client but cannot be tampered with. Tokens have the form
//! `base64url(payload).base64url(hmac_sha256)`.
//!
//! The keyring holds an ordered, non-empty list of secrets. New tokens are
//! signed with the first secret; verification tries every secret in order.
//! That allows zero-downtime rotation: prepend the new secret and keep the
//! old one listed until outstanding cookies have expired.

use crate::error::{Result, SessionError};
use crate::session::config::parse_secret_list;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Ordered signing secrets, validated non-empty at construction
#[derive(Clone)]
pub struct Keyring {
    secrets: Vec<Vec<u8>>,
}

impl std::fmt::Debug for Keyring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print secret material
        f.debug_struct("Keyring")
            .field("secrets", &self.secrets.len())
            .finish()
    }
}

impl Keyring {
    /// Create a keyring from an ordered list of secrets.
    ///
    /// # Errors
    ///
    /// Fails when the list is empty or any secret is empty.
    pub fn new<S: AsRef<str>>(secrets: &[S]) -> Result<Self> {
        if secrets.is_empty() {
            return Err(SessionError::config(
                "at least one signing secret is required",
            ));
        }
        if secrets.iter().any(|s| s.as_ref().is_empty()) {
            return Err(SessionError::config("signing secrets must be non-empty"));
        }

        Ok(Self {
            secrets: secrets
                .iter()
                .map(|s| s.as_ref().as_bytes().to_vec())
                .collect(),
        })
    }

    /// Create a keyring from a comma-separated secret list, as found in
    /// `SESSION_SECRET`.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::new(&parse_secret_list(raw)?)
    }

    /// Sign a payload with the first (current) secret.
    ///
    /// Returns `base64url(payload).base64url(signature)`.
    pub fn sign(&self, payload: &[u8]) -> String {
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload);
        let signature = compute_signature(&self.secrets[0], payload_b64.as_bytes());
        let signature_b64 = URL_SAFE_NO_PAD.encode(signature);

        format!("{}.{}", payload_b64, signature_b64)
    }

    /// Verify a token against every secret in order, returning the payload
    /// on success.
    ///
    /// `None` for anything that does not check out: malformed token, bad
    /// encoding, or a signature no listed secret produced.
    pub fn verify(&self, token: &str) -> Option<Vec<u8>> {
        let (payload_b64, signature_b64) = token.split_once('.')?;
        let provided_sig = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;

        let verified = self.secrets.iter().any(|secret| {
            let expected = compute_signature(secret, payload_b64.as_bytes());
            // Constant-time comparison to prevent timing attacks
            provided_sig.ct_eq(&expected).into()
        });

        if !verified {
            return None;
        }

        URL_SAFE_NO_PAD.decode(payload_b64).ok()
    }
}

fn compute_signature(secret: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    mac.finalize().into_bytes().to_vec()
}
