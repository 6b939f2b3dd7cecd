//! Company name to domain resolution.
//!
//! # Design
//! Served from the company host. A miss is a bare 404 with no error body.

use crate::config::{Config, ServiceKind};
use crate::endpoint::{Auth, Endpoint, Response};
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::{QueryParams, QueryPairs};
use crate::types::NameToDomain;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameToDomainFindParams {
    pub name: String,
}

impl QueryParams for NameToDomainFindParams {
    fn append_to(&self, query: &mut QueryPairs) {
        query.text("name", &self.name);
    }
}

/// Resolves a company name to its most likely domain.
#[derive(Debug, Clone)]
pub struct NameToDomainService {
    endpoint: Endpoint,
}

impl NameToDomainService {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: Endpoint::new(config, ServiceKind::NameToDomain, "/v1/", Auth::Basic),
        }
    }

    pub fn build_find(&self, params: &NameToDomainFindParams) -> HttpRequest {
        self.endpoint.request(HttpMethod::Get, "domains/find", params)
    }

    pub fn find(&self, params: &NameToDomainFindParams) -> Result<Response<NameToDomain>, Error> {
        self.endpoint.send(&self.build_find(params))
    }
}
