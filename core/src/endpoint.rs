//! Immutable request template shared by all endpoint services.
//!
//! # Design
//! An `Endpoint` fixes base URL, path prefix and static headers once at
//! construction. Every call derives a fresh `HttpRequest` from it and nothing
//! is written back, so one endpoint can be used from many threads at once.
//! `receive` turns an `HttpResponse` into a typed value or a single error.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;

use crate::config::{Config, ServiceKind};
use crate::error::{relevant_error, ApiErrorPayload, Error};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::query::QueryParams;

/// How a service authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    /// Basic auth with the API key as username and an empty password.
    Basic,
    /// Sends an explicit blank `Authorization` header.
    Blank,
}

/// A decoded value together with the raw response it came from.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub data: T,
    pub http: HttpResponse,
}

impl<T> Response<T> {
    pub fn status(&self) -> u16 {
        self.http.status
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    base: String,
    headers: Vec<(String, String)>,
    transport: Arc<dyn Transport>,
}

impl Endpoint {
    pub(crate) fn new(config: &Config, kind: ServiceKind, path_prefix: &str, auth: Auth) -> Self {
        let mut headers = Vec::with_capacity(2);
        match auth {
            Auth::Basic => {
                let credentials = STANDARD.encode(format!("{}:", config.api_key()));
                headers.push(("Authorization".to_string(), format!("Basic {credentials}")));
                if let Some(version) = config.api_version() {
                    headers.push(("API-Version".to_string(), version.to_string()));
                }
            }
            Auth::Blank => headers.push(("Authorization".to_string(), String::new())),
        }
        Self {
            base: format!("{}{path_prefix}", config.base_url(kind)),
            headers,
            transport: config.transport(),
        }
    }

    /// Derives a single-use request for `path` under the prefix.
    pub(crate) fn request(&self, method: HttpMethod, path: &str, params: &impl QueryParams) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base),
            query: params.to_query(),
            headers: self.headers.clone(),
        }
    }

    /// Executes `request` and decodes the response. Exactly one round-trip,
    /// never retried.
    pub(crate) fn send<T>(&self, request: &HttpRequest) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.transport.execute(request)?;
        receive(response)
    }
}

/// Decodes `response` into `T`, or the one error that should surface.
///
/// 2xx bodies are decoded into `T`; a decode failure there is a transport
/// error. Any body may also carry an API error payload, which is reported
/// even on a 2xx. A non-2xx without error detail is an `UnexpectedStatus`.
pub fn receive<T>(response: HttpResponse) -> Result<Response<T>, Error>
where
    T: DeserializeOwned + Default,
{
    let payload = ApiErrorPayload::from_body(&response.body);

    let (data, transport) = if response.is_success() {
        match serde_json::from_str::<T>(&response.body) {
            Ok(data) => (data, None),
            Err(err) => (T::default(), Some(Error::Decode(err))),
        }
    } else if payload.is_empty() {
        let err = Error::UnexpectedStatus {
            status: response.status,
            status_line: response.status_line(),
            body: response.body.clone(),
        };
        (T::default(), Some(err))
    } else {
        (T::default(), None)
    };

    match relevant_error(transport, Some(&response), payload) {
        Some(err) => Err(err),
        None => Ok(Response {
            data,
            http: response,
        }),
    }
}
