//! People search within a company domain.
//!
//! # Design
//! Single and list filters are both accepted; lists go out as repeated
//! `key[]` pairs.

use crate::config::{Config, ServiceKind};
use crate::endpoint::{Auth, Endpoint, Response};
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::{QueryParams, QueryPairs};
use crate::types::ProspectorResults;

/// Search criteria for `ProspectorService::search`. The list fields are sent
/// as repeated `roles[]`, `seniorities[]` and `titles[]` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProspectorSearchParams {
    pub domain: String,
    pub role: String,
    pub roles: Vec<String>,
    pub seniority: String,
    pub seniorities: Vec<String>,
    pub title: String,
    pub titles: Vec<String>,
    pub name: String,
    pub limit: u32,
    pub page: u32,
    pub page_size: u32,
}

impl QueryParams for ProspectorSearchParams {
    fn append_to(&self, query: &mut QueryPairs) {
        query
            .text("domain", &self.domain)
            .text("role", &self.role)
            .list("roles", &self.roles)
            .text("seniority", &self.seniority)
            .list("seniorities", &self.seniorities)
            .text("title", &self.title)
            .list("titles", &self.titles)
            .text("name", &self.name)
            .number("limit", self.limit)
            .number("page", self.page)
            .number("page_size", self.page_size);
    }
}

/// Finds people working at a company.
#[derive(Debug, Clone)]
pub struct ProspectorService {
    endpoint: Endpoint,
}

impl ProspectorService {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: Endpoint::new(config, ServiceKind::Prospector, "/v1/people/", Auth::Basic),
        }
    }

    pub fn build_search(&self, params: &ProspectorSearchParams) -> HttpRequest {
        self.endpoint.request(HttpMethod::Get, "search", params)
    }

    pub fn search(&self, params: &ProspectorSearchParams) -> Result<Response<ProspectorResults>, Error> {
        self.endpoint.send(&self.build_search(params))
    }
}
