//! Cookie-only session store
//!
//! Stores session data directly inside a signed cookie, with no server-side
//! persistence. Session data is serialized to JSON and signed with the
//! keyring's current secret (see [`Keyring`] for the rotation contract).
//!
//! Signing provides integrity, not confidentiality: clients can read the
//! payload but any tampering invalidates the signature.

use crate::error::{Result, SessionError};
use crate::session::keyring::Keyring;
use crate::session::SessionConfig;
use cookie::{Cookie, SameSite};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Cookie-only session store
///
/// Carries the whole session payload in the cookie. Suitable for small,
/// client-side-only session data. Independent of the database-backed store
/// but shares the same cookie attributes and secrets.
///
/// Sealing is generic over the payload type: the same store can seal a whole
/// [`SessionData`](crate::SessionData) for cookie-only sessions, or a bare
/// session id when used as the transport for the database-backed store.
#[derive(Clone)]
pub struct CookieSessionStore {
    keyring: Keyring,
    config: SessionConfig,
}

impl CookieSessionStore {
    /// Create a new cookie session store.
    ///
    /// # Errors
    ///
    /// Fails when `config.secrets` is empty; validated here so a
    /// misconfigured deployment dies at startup, not at the first request.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let keyring = Keyring::new(&config.secrets)?;
        Ok(Self { keyring, config })
    }

    /// Serialize and sign a payload into a cookie value
    pub fn seal<T: Serialize>(&self, payload: &T) -> Result<String> {
        let serialized = serde_json::to_vec(payload)
            .map_err(|e| SessionError::cookie(format!("Failed to serialize session: {}", e)))?;
        Ok(self.keyring.sign(&serialized))
    }

    /// Verify and deserialize a cookie value.
    ///
    /// Returns `None` if the value is malformed, tampered with, or signed
    /// with an unlisted secret. A bad cookie is an expected condition (the
    /// framework treats it as an absent session), never an error.
    pub fn unseal<T: DeserializeOwned>(&self, value: &str) -> Option<T> {
        let payload = self.keyring.verify(value)?;
        serde_json::from_slice(&payload).ok()
    }

    /// Build a complete session cookie with all attributes set
    pub fn build_cookie<T: Serialize>(&self, payload: &T) -> Result<Cookie<'static>> {
        let sealed = self.seal(payload)?;

        let mut builder = Cookie::build((self.config.cookie_name.clone(), sealed))
            .path(self.config.cookie_path.clone())
            .http_only(self.config.cookie_http_only)
            .secure(self.config.cookie_secure)
            .same_site(SameSite::Lax)
            .max_age(cookie::time::Duration::seconds(
                self.config.default_ttl().as_secs() as i64,
            ));

        if let Some(ref domain) = self.config.cookie_domain {
            builder = builder.domain(domain.clone());
        }

        Ok(builder.build())
    }

    /// Build an expired cookie that clears the session on the client
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut builder = Cookie::build((self.config.cookie_name.clone(), ""))
            .path(self.config.cookie_path.clone())
            .http_only(self.config.cookie_http_only)
            .secure(self.config.cookie_secure)
            .same_site(SameSite::Lax)
            .max_age(cookie::time::Duration::ZERO);

        if let Some(ref domain) = self.config.cookie_domain {
            builder = builder.domain(domain.clone());
        }

        builder.build()
    }

    /// The shared cookie configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
