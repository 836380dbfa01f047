//! Authentication: email validation and the email-code login handshake.
//!
//! The service emails a one-time code to the address given at login; the
//! code typed back at the prompt becomes the bearer token for every
//! subsequent call.

pub mod address;
pub mod login;

pub use address::parse_address;
pub use login::login;
