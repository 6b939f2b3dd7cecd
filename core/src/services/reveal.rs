//! IP address to company lookup.
//!
//! # Design
//! `GET /v1/companies/find?ip=...` on the reveal host.

use crate::config::{Config, ServiceKind};
use crate::endpoint::{Auth, Endpoint, Response};
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::{QueryParams, QueryPairs};
use crate::types::Reveal;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealFindParams {
    pub ip: String,
}

impl QueryParams for RevealFindParams {
    fn append_to(&self, query: &mut QueryPairs) {
        query.text("ip", &self.ip);
    }
}

/// Resolves an IP address to the company behind it.
#[derive(Debug, Clone)]
pub struct RevealService {
    endpoint: Endpoint,
}

impl RevealService {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: Endpoint::new(config, ServiceKind::Reveal, "/v1/companies/", Auth::Basic),
        }
    }

    pub fn build_find(&self, params: &RevealFindParams) -> HttpRequest {
        self.endpoint.request(HttpMethod::Get, "find", params)
    }

    pub fn find(&self, params: &RevealFindParams) -> Result<Response<Reveal>, Error> {
        self.endpoint.send(&self.build_find(params))
    }
}
