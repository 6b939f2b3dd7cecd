//! Signup risk scoring.
//!
//! # Design
//! The only POST endpoint. Inputs travel in the query string and the body
//! is empty.

use crate::config::{Config, ServiceKind};
use crate::endpoint::{Auth, Endpoint, Response};
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::{QueryParams, QueryPairs};
use crate::types::Risk;

/// Signals scored by `RiskService::calculate`. Sent in the query string even
/// though the call is a POST.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskCalculateParams {
    pub email: String,
    pub ip: String,
    pub country_code: String,
    pub zip_code: String,
    pub given_name: String,
    pub family_name: String,
    pub name: String,
}

impl QueryParams for RiskCalculateParams {
    fn append_to(&self, query: &mut QueryPairs) {
        query
            .text("email", &self.email)
            .text("ip", &self.ip)
            .text("country_code", &self.country_code)
            .text("zip_code", &self.zip_code)
            .text("given_name", &self.given_name)
            .text("family_name", &self.family_name)
            .text("name", &self.name);
    }
}

/// Scores the risk of a signup from its email, IP and name.
#[derive(Debug, Clone)]
pub struct RiskService {
    endpoint: Endpoint,
}

impl RiskService {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: Endpoint::new(config, ServiceKind::Risk, "/v1/", Auth::Basic),
        }
    }

    pub fn build_calculate(&self, params: &RiskCalculateParams) -> HttpRequest {
        self.endpoint.request(HttpMethod::Post, "calculate", params)
    }

    pub fn calculate(&self, params: &RiskCalculateParams) -> Result<Response<Risk>, Error> {
        self.endpoint.send(&self.build_calculate(params))
    }
}
