//! Core library for the codeinbox command-line client.
//!
//! This crate holds everything except argument parsing:
//! - `config`: the persisted credential record and host settings
//! - `api`: the HTTP client for the notification service
//! - `auth`: email validation and the email-code login flow
//! - `channels`, `hook`, `notifications`: the remaining command flows
//!
//! Each flow is a free function that receives the credential record (or
//! the store that owns it) explicitly. Nothing here keeps global state.

pub mod api;
pub mod auth;
pub mod channels;
pub mod config;
pub mod error;
pub mod hook;
pub mod models;
pub mod notifications;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use config::{ConfigStore, Credentials, Settings};
pub use error::{Error, Result};
