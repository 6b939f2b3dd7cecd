//! Company name autocomplete.
//!
//! # Design
//! The suggest host is public: requests carry a blank `Authorization`
//! header instead of the API key.

use crate::config::{Config, ServiceKind};
use crate::endpoint::{Auth, Endpoint, Response};
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::{QueryParams, QueryPairs};
use crate::types::AutocompleteItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteSuggestParams {
    pub query: String,
}

impl QueryParams for AutocompleteSuggestParams {
    fn append_to(&self, query: &mut QueryPairs) {
        query.text("query", &self.query);
    }
}

/// Public company-name suggestions. Needs no credentials, so it sends a
/// blank `Authorization` header instead of the API key.
#[derive(Debug, Clone)]
pub struct AutocompleteService {
    endpoint: Endpoint,
}

impl AutocompleteService {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: Endpoint::new(config, ServiceKind::Autocomplete, "/v1/companies/", Auth::Blank),
        }
    }

    pub fn build_suggest(&self, params: &AutocompleteSuggestParams) -> HttpRequest {
        self.endpoint.request(HttpMethod::Get, "suggest", params)
    }

    pub fn suggest(&self, params: &AutocompleteSuggestParams) -> Result<Response<Vec<AutocompleteItem>>, Error> {
        self.endpoint.send(&self.build_suggest(params))
    }
}
