//! Errors raised by the HTTP transport for the YouTube Data API.

use http::StatusCode;
use serde::Deserialize;

/// A request to the YouTube Data API that did not produce a usable response.
///
/// [`ApiError::Transport`] and [`ApiError::Unavailable`] are transient: the same request may
/// succeed later. [`ApiError::Rejected`] means the service refused the request itself (bad
/// key, exhausted quota, malformed parameters) and retrying will not help.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("send request to YouTube {endpoint} API")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("YouTube {endpoint} API unavailable ({status}): {message}")]
    Unavailable {
        endpoint: &'static str,
        status: StatusCode,
        message: String,
    },
    #[error("YouTube {endpoint} API rejected the request ({status}{}): {message}", reason_suffix(.reason))]
    Rejected {
        endpoint: &'static str,
        status: StatusCode,
        reason: Option<String>,
        message: String,
    },
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|reason| format!(", {reason}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Whether retrying the same request later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Unavailable { .. })
    }

    /// Whether the request was refused because the project ran out of quota.
    pub fn is_quota(&self) -> bool {
        match self {
            Self::Rejected { reason, .. } => matches!(
                reason.as_deref(),
                Some("quotaExceeded" | "dailyLimitExceeded" | "rateLimitExceeded")
            ),
            _ => false,
        }
    }

    /// Classifies a non-success response from `endpoint`.
    pub(crate) fn from_status(endpoint: &'static str, status: StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorResponse>(body).ok();
        let message = parsed
            .as_ref()
            .map(|response| response.error.message.clone())
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| body.trim().to_string());

        if status.is_client_error() {
            let reason = parsed.and_then(|response| {
                response
                    .error
                    .errors
                    .into_iter()
                    .find_map(|detail| detail.reason)
            });
            Self::Rejected {
                endpoint,
                status,
                reason,
                message,
            }
        } else {
            Self::Unavailable {
                endpoint,
                status,
                message,
            }
        }
    }
}

/// Error body returned by Google APIs.
///
/// See: <https://developers.google.com/youtube/v3/docs/errors>
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    reason: Option<String>,
}
