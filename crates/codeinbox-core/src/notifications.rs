//! Notification listing: show the latest entries of the user's inbox.

use std::io::Write;

use chrono::Utc;

use crate::api::ApiClient;
use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::models::Notification;
use crate::utils::{format_age, truncate_string};

/// Number of notifications fetched when no limit is given
pub const DEFAULT_LIMIT: u32 = 8;

/// Longest title printed before truncation
const MAX_TITLE_LEN: usize = 72;

/// Fetch and print the most recent notifications.
pub async fn list<W: Write>(
    client: &ApiClient,
    credentials: &Credentials,
    limit: u32,
    out: &mut W,
) -> Result<Vec<Notification>> {
    let credentials = credentials.require_login()?;
    let notifications = client.list_notifications(&credentials.token, limit).await?;

    if notifications.is_empty() {
        writeln!(out, "No notifications yet.").map_err(Error::Console)?;
    }
    let now = Utc::now();
    for notification in &notifications {
        writeln!(out, "{}", render_line(notification, now)).map_err(Error::Console)?;
    }

    Ok(notifications)
}

fn render_line(notification: &Notification, now: chrono::DateTime<Utc>) -> String {
    let marker = if notification.is_read() { " " } else { "*" };
    let title = if notification.title.is_empty() {
        "(untitled)"
    } else {
        notification.title.as_str()
    };
    let mut line = format!("{} {}", marker, truncate_string(title, MAX_TITLE_LEN));
    if let Some(created_at) = notification.created_at {
        line.push_str(&format!(" ({})", format_age(created_at, now)));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn notification(title: &str) -> Notification {
        serde_json::from_value(serde_json::json!({"id": "n", "title": title})).unwrap()
    }

    #[test]
    fn test_render_unread_with_age() {
        let now = Utc::now();
        let mut n = notification("Claude is waiting for input");
        n.created_at = Some(now - Duration::minutes(12));
        assert_eq!(render_line(&n, now), "* Claude is waiting for input (12m ago)");
    }

    #[test]
    fn test_render_read_untitled() {
        let now = Utc::now();
        let mut n = notification("");
        n.read_at = Some(now);
        assert_eq!(render_line(&n, now), "  (untitled)");
    }

    #[tokio::test]
    async fn test_list_requires_login() {
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let mut out = Vec::new();
        let err = list(&client, &Credentials::default(), DEFAULT_LIMIT, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::LoginRequired));
    }
}
