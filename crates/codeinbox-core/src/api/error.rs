use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{action}, code[{status}] body[{body}]")]
    Rejected {
        action: &'static str,
        status: u16,
        body: String,
    },

    #[error("Network error")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn from_status(action: &'static str, status: reqwest::StatusCode, body: &str) -> Self {
        ApiError::Rejected {
            action,
            status: status.as_u16(),
            body: body.to_string(),
        }
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidResponse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_embeds_status_and_body() {
        let err = ApiError::from_status(
            "failed to trigger Claude hook",
            reqwest::StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"errors":[{"message":"bad payload"}]}"#,
        );
        assert_eq!(
            err.to_string(),
            r#"failed to trigger Claude hook, code[422] body[{"errors":[{"message":"bad payload"}]}]"#
        );
        assert_eq!(err.status(), Some(422));
    }
}
