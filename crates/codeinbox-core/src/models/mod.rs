//! Data models returned by the CodeInbox API.
//!
//! - `Notification`: one entry in the user's inbox
//! - `NotificationsResponse`: the list envelope

pub mod notification;

pub use notification::{Notification, NotificationsResponse};
