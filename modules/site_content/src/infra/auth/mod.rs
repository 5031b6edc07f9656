//! Admin sign-in providers

pub mod identity_toolkit;
pub mod static_credentials;

pub use identity_toolkit::IdentityToolkitProvider;
pub use static_credentials::StaticCredentialsProvider;
