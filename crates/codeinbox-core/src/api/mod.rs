//! REST API client module for the CodeInbox notification service.
//!
//! This module provides the `ApiClient` for requesting login codes,
//! forwarding tool hooks and listing recent notifications.
//!
//! Authenticated calls use the token captured at login as a bearer token.

pub mod client;
pub mod error;

pub use client::{ApiClient, HookProvider};
pub use error::ApiError;
