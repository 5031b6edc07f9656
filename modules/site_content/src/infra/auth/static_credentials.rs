//! Single administrator configured by email and SHA-256 password digest

use crate::domain::auth::{AuthError, AuthProvider, AuthenticatedUser};
use async_trait::async_trait;
use sha2::{Digest, Sha256};

pub struct StaticCredentialsProvider {
    email: String,
    password_sha256: String,
}

impl StaticCredentialsProvider {
    /// `password_sha256` is the hex digest of the password
    pub fn new(email: &str, password_sha256: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password_sha256: password_sha256.trim().to_ascii_lowercase(),
        }
    }
}

/// Lowercase hex SHA-256 of `password`
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[async_trait]
impl AuthProvider for StaticCredentialsProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
        if self.email.is_empty() || self.password_sha256.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        if !email.trim().eq_ignore_ascii_case(&self.email)
            || password_digest(password) != self.password_sha256
        {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(AuthenticatedUser {
            email: self.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_lowercase_hex() {
        assert_eq!(
            password_digest("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[tokio::test]
    async fn test_sign_in() {
        let provider = StaticCredentialsProvider::new(
            "admin@example.com",
            "5E884898DA28047151D0E56F8DC6292773603D0D6AABBDD62A11EF721D1542D8",
        );
        let user = provider.sign_in("Admin@Example.com", "password").await.unwrap();
        assert_eq!(user.email, "admin@example.com");
        assert!(matches!(
            provider.sign_in("admin@example.com", "wrong").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_unconfigured_provider_rejects_everyone() {
        let provider = StaticCredentialsProvider::new("", "");
        assert!(provider.sign_in("", "").await.is_err());
    }
}
