use crate::credentials::abbreviate;
use serde::Deserialize;
use std::fmt;

/// Wrapper around a token sent back from the Zoho accounts service.
///
/// Zoho answers refresh requests with HTTP 200 even when the refresh token is rejected, so
/// a record may carry an `error` instead of an `access_token`.
#[derive(Debug, Default, Deserialize)]
pub struct TokenRecord {
    pub access_token: Option<String>,
    pub api_domain: Option<String>,
    pub error: Option<String>,
    pub expires_in: Option<u64>,
    pub token_type: Option<String>,
}

/// Short-lived bearer token issued for a single invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    secret: String,
    expires_in: Option<u64>,
}

impl AccessToken {
    pub fn new(secret: impl Into<String>, expires_in: Option<u64>) -> AccessToken {
        AccessToken {
            secret: secret.into(),
            expires_in,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Lifetime reported by Zoho, in seconds. Informational only; tokens are never reused.
    pub fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.secret)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &abbreviate(&self.secret))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
