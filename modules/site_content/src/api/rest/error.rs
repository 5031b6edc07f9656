//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::SiteError;
use crate::domain::AuthError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: SiteError) -> Problem {
    match error {
        SiteError::NotFound { resource, id } => {
            Problem::new(StatusCode::NOT_FOUND, format!("{} Not Found", resource))
                .with_detail(format!("{} '{}' was not found", resource, id))
        }

        SiteError::Validation { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message)
        }

        SiteError::InvalidJsonLd { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid JSON-LD")
                .with_detail(format!("schemaJsonLd must be a JSON object: {}", message))
        }

        SiteError::Unauthorized => Problem::new(StatusCode::UNAUTHORIZED, "Unauthorized")
            .with_detail("A valid admin session is required"),

        // Store details stay in the logs
        SiteError::Storage { .. } => {
            Problem::new(StatusCode::SERVICE_UNAVAILABLE, "Storage Unavailable")
                .with_detail("The document store request failed")
        }

        SiteError::Internal => {
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}

/// Map sign-in and session errors
pub fn map_auth_error(error: AuthError) -> Problem {
    match error {
        AuthError::InvalidCredentials => {
            Problem::new(StatusCode::UNAUTHORIZED, "Invalid Credentials")
                .with_detail("Login failed. Check email/password.")
        }
        AuthError::InvalidSession(_) => Problem::new(StatusCode::UNAUTHORIZED, "Unauthorized")
            .with_detail("A valid admin session is required"),
        AuthError::Provider(message) => {
            tracing::error!("Identity provider failure: {}", message);
            Problem::new(StatusCode::BAD_GATEWAY, "Identity Provider Error")
                .with_detail("The identity provider request failed")
        }
    }
}
