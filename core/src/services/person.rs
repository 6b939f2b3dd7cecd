//! Person enrichment by email, alone or combined with the employer's
//! company record.
//!
//! # Design
//! Both lookups share one endpoint template and one params type. A 202
//! means the lookup was queued; the body then holds no record and decodes to a
//! default `Person`.

use crate::config::{Config, ServiceKind};
use crate::endpoint::{Auth, Endpoint, Response};
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::{QueryParams, QueryPairs};
use crate::types::{Person, PersonCompany};

/// Lookup keys shared by `PersonService::find` and `find_combined`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFindParams {
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub ip_address: String,
    pub location: String,
    pub company: String,
    pub company_domain: String,
    pub linkedin: String,
    pub twitter: String,
    pub facebook: String,
    pub webhook_url: String,
    pub webhook_id: String,
    /// Subscribe to updates for this person.
    pub subscribe: bool,
}

impl QueryParams for PersonFindParams {
    fn append_to(&self, query: &mut QueryPairs) {
        query
            .text("email", &self.email)
            .text("given_name", &self.given_name)
            .text("family_name", &self.family_name)
            .text("ip_address", &self.ip_address)
            .text("location", &self.location)
            .text("company", &self.company)
            .text("company_domain", &self.company_domain)
            .text("linkedin", &self.linkedin)
            .text("twitter", &self.twitter)
            .text("facebook", &self.facebook)
            .text("webhook_url", &self.webhook_url)
            .text("webhook_id", &self.webhook_id)
            .flag("subscribe", self.subscribe);
    }
}

/// Person enrichment, plus the combined person-and-company lookup.
#[derive(Debug, Clone)]
pub struct PersonService {
    endpoint: Endpoint,
}

impl PersonService {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: Endpoint::new(config, ServiceKind::Person, "/v2/", Auth::Basic),
        }
    }

    pub fn build_find(&self, params: &PersonFindParams) -> HttpRequest {
        self.endpoint.request(HttpMethod::Get, "people/find", params)
    }

    pub fn build_find_combined(&self, params: &PersonFindParams) -> HttpRequest {
        self.endpoint.request(HttpMethod::Get, "combined/find", params)
    }

    /// Looks up a person by email address.
    pub fn find(&self, params: &PersonFindParams) -> Result<Response<Person>, Error> {
        self.endpoint.send(&self.build_find(params))
    }

    /// Looks up a person and their company with a single request.
    pub fn find_combined(&self, params: &PersonFindParams) -> Result<Response<PersonCompany>, Error> {
        self.endpoint.send(&self.build_find_combined(params))
    }
}
