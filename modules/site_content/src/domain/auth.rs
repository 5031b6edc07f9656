//! Admin authentication contracts and session tokens

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Name of the cookie carrying the admin session token
pub const SESSION_COOKIE: &str = "admin_session";

const SESSION_ISSUER: &str = "site-admin";

/// Authentication failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email or password
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Session token missing, malformed or expired
    #[error("invalid session: {0}")]
    InvalidSession(String),
    /// Identity provider could not be reached or answered unexpectedly
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Signed-in administrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// Email/password sign-in
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    iat: i64,
    exp: i64,
    iss: String,
}

/// Issues and verifies HS256 session tokens
pub struct SessionManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Session lifetime, also used as the cookie `Max-Age`
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = SessionClaims {
            sub: user.email.clone(),
            iat: now,
            exp: now.saturating_add(ttl),
            iss: SESSION_ISSUER.to_string(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::InvalidSession(format!("failed to sign session: {e}")))
    }

    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[SESSION_ISSUER]);

        let data = decode::<SessionClaims>(token, &self.decoding, &validation)
            .map_err(|e| AuthError::InvalidSession(e.to_string()))?;
        Ok(AuthenticatedUser {
            email: data.claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            email: "admin@example.com".into(),
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let sessions = SessionManager::new("secret", Duration::from_secs(3600));
        let token = sessions.issue(&user()).unwrap();
        assert_eq!(sessions.verify(&token).unwrap(), user());
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let token = SessionManager::new("one", Duration::from_secs(3600))
            .issue(&user())
            .unwrap();
        let other = SessionManager::new("two", Duration::from_secs(3600));
        assert!(matches!(other.verify(&token), Err(AuthError::InvalidSession(_))));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let sessions = SessionManager::new("secret", Duration::from_secs(60));
        assert!(sessions.verify("not-a-token").is_err());
    }
}
