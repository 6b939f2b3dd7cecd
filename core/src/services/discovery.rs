//! Company search.
//!
//! # Design
//! Results are paged by the server. A 200 may still carry an `error` key
//! for queries it only partially understood, which surfaces as an API error.

use crate::config::{Config, ServiceKind};
use crate::endpoint::{Auth, Endpoint, Response};
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::{QueryParams, QueryPairs};
use crate::types::DiscoveryResults;

/// Search criteria for `DiscoveryService::search`. `query` uses the remote
/// search syntax, e.g. `"name:clearbit"`; `page` and `page_size` are passed
/// through as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverySearchParams {
    pub query: String,
    pub page: u32,
    pub page_size: u32,
    pub limit: u32,
    pub sort: String,
}

impl QueryParams for DiscoverySearchParams {
    fn append_to(&self, query: &mut QueryPairs) {
        query
            .number("page", self.page)
            .number("page_size", self.page_size)
            .number("limit", self.limit)
            .text("sort", &self.sort)
            .text("query", &self.query);
    }
}

/// Company search. Returns one page per call; the caller drives paging.
#[derive(Debug, Clone)]
pub struct DiscoveryService {
    endpoint: Endpoint,
}

impl DiscoveryService {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: Endpoint::new(config, ServiceKind::Discovery, "/v1/companies/", Auth::Basic),
        }
    }

    pub fn build_search(&self, params: &DiscoverySearchParams) -> HttpRequest {
        self.endpoint.request(HttpMethod::Get, "search", params)
    }

    pub fn search(&self, params: &DiscoverySearchParams) -> Result<Response<DiscoveryResults>, Error> {
        self.endpoint.send(&self.build_search(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{config, Recorder};

    #[test]
    fn build_search_passes_paging_through() {
        let service = DiscoveryService::new(&config(Recorder::new(200, "{}")));
        let req = service.build_search(&DiscoverySearchParams {
            query: "name:clearbit".to_string(),
            page: 2,
            page_size: 10,
            ..Default::default()
        });
        assert_eq!(req.url, "https://discovery.clearbit.com/v1/companies/search");
        assert_eq!(
            req.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("page_size".to_string(), "10".to_string()),
                ("query".to_string(), "name:clearbit".to_string()),
            ]
        );
    }

    #[test]
    fn search_decodes_counters_and_results() {
        let transport = Recorder::new(200, r#"{"total":1,"page":1,"results":[{"domain":"clearbit.com"}]}"#);
        let service = DiscoveryService::new(&config(transport));
        let results = service.search(&DiscoverySearchParams::default()).unwrap().into_data();
        assert_eq!(results.total, 1);
        assert_eq!(results.page, 1);
        assert_eq!(results.results[0].domain.as_deref(), Some("clearbit.com"));
    }
}
