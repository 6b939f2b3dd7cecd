//! HTTP transport types and the shared transport seam.
//!
//! # Design
//! Requests and responses are described as plain data. Services build an
//! `HttpRequest` from their immutable endpoint template, a `Transport`
//! executes it, and the resulting `HttpResponse` is decoded by
//! `endpoint::receive`. Keeping the round-trip behind a trait lets tests and
//! callers substitute their own transport while `UreqTransport` covers the
//! default case.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::error::Error;

/// HTTP method for a request. The API only uses these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-use HTTP request described as plain data.
///
/// `url` holds scheme, host and path; query parameters travel separately in
/// `query` and are encoded by the transport. Requests never carry a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Returns the value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns every value sent for the query key `key`, in order.
    pub fn query_values(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Canonical reason phrase for the status code, empty when unknown.
    pub fn reason(&self) -> &'static str {
        ureq::http::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("")
    }

    /// Status label in the `"404 Not Found"` form.
    pub fn status_line(&self) -> String {
        match self.reason() {
            "" => self.status.to_string(),
            reason => format!("{} {reason}", self.status),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Executes one `HttpRequest` and returns the response as data.
///
/// Implementations must hand back non-2xx responses as `Ok`; only failures
/// that prevent receiving a response (connect, TLS, timeout, body read)
/// are `Err`.
pub trait Transport: Send + Sync + fmt::Debug {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Error>;

    /// A copy of this transport bounded by `timeout`. Returns `None` when the
    /// transport cannot take a timeout from the client configuration.
    fn with_timeout(&self, _timeout: Duration) -> Option<Arc<dyn Transport>> {
        None
    }
}

/// Default transport backed by a blocking `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    timeout: Option<Duration>,
}

impl UreqTransport {
    /// Builds a fresh agent with a global per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            timeout: Some(timeout),
        }
    }

    /// Wraps a caller-configured agent. Status handling is overridden per
    /// request so error bodies always reach the decoder; the timeout is the
    /// agent's own until the client configuration supplies one.
    pub fn from_agent(agent: ureq::Agent) -> Self {
        Self {
            agent,
            timeout: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        debug!(
            method = %request.method,
            url = %request.url,
            params = request.query.len(),
            "issuing request"
        );

        let query = request.query.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        let result = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&request.url).query_pairs(query);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                self.configure(builder).call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&request.url).query_pairs(query);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                self.configure(builder).send_empty()
            }
        };
        let mut response = result?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn with_timeout(&self, timeout: Duration) -> Option<Arc<dyn Transport>> {
        Some(Arc::new(Self {
            agent: self.agent.clone(),
            timeout: Some(timeout),
        }))
    }
}

impl UreqTransport {
    fn configure<B>(&self, builder: ureq::RequestBuilder<B>) -> ureq::RequestBuilder<B> {
        let config = builder.config().http_status_as_error(false);
        match self.timeout {
            Some(timeout) => config.timeout_global(Some(timeout)).build(),
            None => config.build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: String::new(),
        }
    }

    #[test]
    fn success_covers_2xx_only() {
        assert!(response(200).is_success());
        assert!(response(202).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
    }

    #[test]
    fn status_line_includes_reason_phrase() {
        assert_eq!(response(404).status_line(), "404 Not Found");
        assert_eq!(response(422).status_line(), "422 Unprocessable Entity");
        assert_eq!(response(599).status_line(), "599");
    }

    #[test]
    fn header_lookup_ignores_case() {
        assert_eq!(response(200).header("content-type"), Some("application/json"));
        assert_eq!(response(200).header("x-missing"), None);
    }

    #[test]
    fn query_values_keeps_repeated_keys_in_order() {
        let req = HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost/v1/people/search".to_string(),
            query: vec![
                ("roles[]".to_string(), "sales".to_string()),
                ("domain".to_string(), "clearbit.com".to_string()),
                ("roles[]".to_string(), "engineering".to_string()),
            ],
            headers: Vec::new(),
        };
        assert_eq!(req.query_values("roles[]"), vec!["sales", "engineering"]);
        assert!(req.query_values("limit").is_empty());
    }

    #[test]
    fn with_timeout_bounds_a_caller_agent() {
        let transport = UreqTransport::from_agent(ureq::Agent::new_with_defaults());
        assert_eq!(transport.timeout(), None);

        let bounded = transport.with_timeout(Duration::from_millis(250)).unwrap();
        assert!(format!("{bounded:?}").contains("250ms"));
    }

    #[test]
    fn malformed_header_is_a_request_error() {
        let transport = UreqTransport::new(Duration::from_secs(1));
        let req = HttpRequest {
            method: HttpMethod::Get,
            url: "http://127.0.0.1:9/v1/companies/find".to_string(),
            query: Vec::new(),
            headers: vec![("Bad Header".to_string(), "x".to_string())],
        };
        let err = transport.execute(&req).unwrap_err();
        assert!(matches!(err, Error::Request(_)), "got {err:?}");
        assert!(err.is_transport());
    }

    #[test]
    fn method_renders_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
