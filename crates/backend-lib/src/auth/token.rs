// ============================
// reshelf-backend-lib/src/auth/token.rs
// ============================
//! Signed, time-limited bearer tokens (HS256 JWTs).
//!
//! Tokens are self-contained: subject id, email and role travel inside the
//! signed payload, so validation needs no server-side session lookup. There
//! is no revocation state — a valid, unexpired token is always honoured and
//! logout is a client-side discard.
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use reshelf_common::Role;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token TTL: 24 hours from issuance.
pub const TOKEN_TTL_SECS: i64 = 60 * 60 * 24;

/// Signed token payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Account id of the subject
    pub sub: String,
    /// Subject's email at issuance time
    pub email: String,
    /// Subject's role at issuance time
    pub role: Role,
    /// Issued-at, seconds since the epoch
    pub iat: i64,
    /// Expiry, seconds since the epoch
    pub exp: i64,
}

/// Why a token failed verification. Terminal in every case: no partial
/// trust is ever granted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,
    #[error("token expired")]
    Expired,
    #[error("bad signature")]
    BadSignature,
}

/// Issues and validates bearer tokens with a process-wide signing secret.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issue a token for the given account with the configured TTL.
    pub fn issue(&self, account_id: &str, email: &str, role: Role) -> anyhow::Result<String> {
        self.issue_with_ttl(account_id, email, role, self.ttl_secs)
    }

    /// Issue a token with an explicit TTL in seconds.
    pub fn issue_with_ttl(
        &self,
        account_id: &str,
        email: &str,
        role: Role,
        ttl_secs: i64,
    ) -> anyhow::Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: account_id.to_string(),
            email: email.to_string(),
            role,
            iat: now,
            exp: now + ttl_secs,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        metrics::counter!(crate::metrics::TOKEN_ISSUED).increment(1);
        Ok(token)
    }

    /// Parse and check a token: signature first, then expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            })
    }
}
