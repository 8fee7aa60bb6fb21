//! HTTP client building for the profile and revocation calls.

mod client;

pub use client::{ApiClient, ApiClientBuilder, HttpClientConfig, CLIENT_ID_HEADER};
