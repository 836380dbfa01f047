//! API client for communicating with the CodeInbox REST API.
//!
//! Every call is a single request with a fixed expected status; anything
//! else is surfaced as an `ApiError` and never retried.

use std::fmt;
use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::models::{Notification, NotificationsResponse};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

const TOKENS_PATH: &str = "/v2/codeinbox/tokens";
const HOOKS_PATH: &str = "/v2/codeinbox/hooks";
const NOTIFICATIONS_PATH: &str = "/v2/notifications";

const USER_AGENT: &str = concat!("codeinbox/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    email: &'a str,
}

/// A tool whose hook events can be forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookProvider {
    Claude,
}

impl HookProvider {
    /// Path segment used by the hooks endpoint
    pub fn slug(&self) -> &'static str {
        match self {
            HookProvider::Claude => "claude",
        }
    }
}

impl fmt::Display for HookProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookProvider::Claude => write!(f, "Claude"),
        }
    }
}

/// API client for CodeInbox.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against `base_url` (e.g. `https://api.magicbell.com`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ask the service to email a one-time login code to `email`.
    pub async fn request_login_code(&self, email: &str) -> Result<(), ApiError> {
        let url = self.url(TOKENS_PATH);
        debug!(url = %url, "Requesting login code");

        let response = self
            .client
            .post(&url)
            .json(&TokenRequest { email })
            .send()
            .await?;

        Self::expect_status(response, StatusCode::CREATED, "failed to create token").await?;
        Ok(())
    }

    /// Forward a raw hook payload, authenticated with `token`.
    ///
    /// The payload is sent byte-for-byte as received.
    pub async fn forward_hook(
        &self,
        token: &str,
        provider: HookProvider,
        payload: Vec<u8>,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.url(HOOKS_PATH), provider.slug());
        debug!(url = %url, bytes = payload.len(), "Forwarding hook");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let action = match provider {
            HookProvider::Claude => "failed to trigger Claude hook",
        };
        Self::expect_status(response, StatusCode::CREATED, action).await?;
        Ok(())
    }

    /// Fetch the most recent notifications for the logged-in user.
    pub async fn list_notifications(
        &self,
        token: &str,
        limit: u32,
    ) -> Result<Vec<Notification>, ApiError> {
        let mut url = Url::parse(&self.url(NOTIFICATIONS_PATH))
            .map_err(|e| ApiError::InvalidResponse(format!("Invalid API host: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        debug!(url = %url, "Fetching notifications");

        let response = self.client.get(url).bearer_auth(token).send().await?;
        let response =
            Self::expect_status(response, StatusCode::OK, "failed to fetch notifications").await?;

        let text = response.text().await?;
        let parsed: NotificationsResponse = serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("notifications: {}", e)))?;
        Ok(parsed.data)
    }

    /// Pass the response through when it carries `expected`, otherwise read
    /// the body and turn it into an `ApiError::Rejected`.
    async fn expect_status(
        response: reqwest::Response,
        expected: StatusCode,
        action: &'static str,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status == expected {
            return Ok(response);
        }
        let body = response.text().await?;
        warn!(status = status.as_u16(), action, "Request rejected");
        Err(ApiError::from_status(action, status, &body))
    }
}

// ============================================================================
// Tests
// ============================================================================
