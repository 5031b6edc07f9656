//! Email/password sign-in against the Identity Toolkit REST API

use crate::domain::auth::{AuthError, AuthProvider, AuthenticatedUser};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    email: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Error codes meaning "wrong email or password"
const CREDENTIAL_ERRORS: [&str; 5] = [
    "EMAIL_NOT_FOUND",
    "INVALID_PASSWORD",
    "INVALID_LOGIN_CREDENTIALS",
    "INVALID_EMAIL",
    "USER_DISABLED",
];

pub struct IdentityToolkitProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl IdentityToolkitProvider {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl AuthProvider for IdentityToolkitProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
        let resp = self
            .client
            .post(format!("{}/v1/accounts:signInWithPassword", self.endpoint))
            .query(&[("key", self.api_key.as_str())])
            .json(&SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            let body: SignInResponse = resp
                .json()
                .await
                .map_err(|e| AuthError::Provider(e.to_string()))?;
            return Ok(AuthenticatedUser { email: body.email });
        }

        let message = resp
            .json::<ErrorEnvelope>()
            .await
            .map(|envelope| envelope.error.message)
            .unwrap_or_default();
        // Messages look like "INVALID_PASSWORD" or "TOO_MANY_ATTEMPTS_TRY_LATER : ..."
        let code = message.split(' ').next().unwrap_or_default();

        if status == StatusCode::BAD_REQUEST && CREDENTIAL_ERRORS.contains(&code) {
            Err(AuthError::InvalidCredentials)
        } else {
            Err(AuthError::Provider(format!("{}: {}", status, message)))
        }
    }
}
