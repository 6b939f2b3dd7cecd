//! Error types for the Clearbit client.
//!
//! # Design
//! The API reports problems as `{"error": {...}}` or `{"error": [...]}`.
//! Both shapes decode into one `ApiErrorPayload`; a body that matches
//! neither yields an empty payload instead of a decode failure, so "empty"
//! doubles as the "no API-level error" signal consumed by `relevant_error`.

use std::fmt;

use serde::Deserialize;

use crate::http::HttpResponse;

/// One problem reported by the API. Either field may be missing from the
/// body; it then decodes as empty and the detail still counts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorShape {
    // Tried first: a struct also deserializes from a sequence.
    Many(Vec<ErrorDetail>),
    One(ErrorDetail),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorShape,
}

/// Zero or more `ErrorDetail` entries, optionally annotated with the HTTP
/// status label of the response that carried them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrorPayload {
    http_status: Option<String>,
    errors: Vec<ErrorDetail>,
}

impl ApiErrorPayload {
    pub fn new(errors: Vec<ErrorDetail>) -> Self {
        Self {
            http_status: None,
            errors,
        }
    }

    /// Decodes an error body. Unrecognised or malformed bodies decode to an
    /// empty payload.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope {
                error: ErrorShape::One(detail),
            }) => Self::new(vec![detail]),
            Ok(ErrorEnvelope {
                error: ErrorShape::Many(details),
            }) => Self::new(details),
            Err(_) => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }

    pub fn first(&self) -> Option<&ErrorDetail> {
        self.errors.first()
    }

    /// Status label such as `"404 Not Found"`, set only for non-2xx responses.
    pub fn http_status(&self) -> Option<&str> {
        self.http_status.as_deref()
    }

    pub fn with_http_status(mut self, status: impl Into<String>) -> Self {
        self.http_status = Some(status.into());
        self
    }
}

impl fmt::Display for ApiErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("clearbit:")?;
        // Only the first detail is rendered; the rest stay in `errors()`.
        let first = self.errors.first();
        let parts = [
            self.http_status.as_deref(),
            first.map(|d| d.kind.as_str()),
            first.map(|d| d.message.as_str()),
        ];
        for part in parts.into_iter().flatten().filter(|p| !p.is_empty()) {
            write!(f, " {part}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiErrorPayload {}

/// Errors returned by every service call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client configuration was rejected when it was built.
    #[error("clearbit: invalid configuration: {0}")]
    Config(String),

    /// The request could not be constructed.
    #[error("clearbit: invalid request: {0}")]
    Request(String),

    /// The transport failed before an interpretable response arrived.
    #[error("clearbit: transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// A success response body did not match the expected type.
    #[error("clearbit: failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A non-2xx response arrived without any error detail in its body.
    #[error("clearbit: unexpected status {status_line}")]
    UnexpectedStatus {
        status: u16,
        status_line: String,
        body: String,
    },

    /// The API reported one or more problems.
    #[error(transparent)]
    Api(#[from] ApiErrorPayload),
}

impl Error {
    /// The API-reported details, when this is an API error.
    pub fn api_errors(&self) -> Option<&[ErrorDetail]> {
        match self {
            Error::Api(payload) => Some(payload.errors()),
            _ => None,
        }
    }

    /// True when no interpretable response was received.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Request(_) | Error::Transport(_) | Error::Decode(_) | Error::UnexpectedStatus { .. }
        )
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::BadUri(_) | ureq::Error::Http(_) => Error::Request(err.to_string()),
            err => Error::Transport(Box::new(err)),
        }
    }
}

/// Picks the single error to surface for a call.
///
/// A transport error always wins. Otherwise an empty payload means success,
/// whatever the status code. A non-empty payload is returned as
/// `Error::Api`, annotated with the status label when the status is not a
/// success code; bodies reporting errors on a 2xx are still errors.
pub fn relevant_error(
    transport: Option<Error>,
    response: Option<&HttpResponse>,
    payload: ApiErrorPayload,
) -> Option<Error> {
    if let Some(err) = transport {
        return Some(err);
    }
    if payload.is_empty() {
        return None;
    }
    let payload = match response {
        Some(response) if !response.is_success() => payload.with_http_status(response.status_line()),
        _ => payload,
    };
    Some(Error::Api(payload))
}
