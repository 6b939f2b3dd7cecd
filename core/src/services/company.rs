//! Company enrichment by domain.
//!
//! # Design
//! `GET /v2/companies/find`. Webhook fields ask the API to deliver the
//! record asynchronously; the call itself still returns whatever is ready.

use crate::config::{Config, ServiceKind};
use crate::endpoint::{Auth, Endpoint, Response};
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::{QueryParams, QueryPairs};
use crate::types::Company;

/// Lookup keys for `CompanyService::find`. `domain` is the usual key; the
/// other fields refine or replace it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFindParams {
    pub domain: String,
    pub company_name: String,
    pub linkedin: String,
    pub twitter: String,
    pub facebook: String,
    pub webhook_url: String,
    pub webhook_id: String,
}

impl QueryParams for CompanyFindParams {
    fn append_to(&self, query: &mut QueryPairs) {
        query
            .text("domain", &self.domain)
            .text("company_name", &self.company_name)
            .text("linkedin", &self.linkedin)
            .text("twitter", &self.twitter)
            .text("facebook", &self.facebook)
            .text("webhook_url", &self.webhook_url)
            .text("webhook_id", &self.webhook_id);
    }
}

/// Company enrichment: domain in, company record out.
#[derive(Debug, Clone)]
pub struct CompanyService {
    endpoint: Endpoint,
}

impl CompanyService {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: Endpoint::new(config, ServiceKind::Company, "/v2/companies/", Auth::Basic),
        }
    }

    pub fn build_find(&self, params: &CompanyFindParams) -> HttpRequest {
        self.endpoint.request(HttpMethod::Get, "find", params)
    }

    /// Looks up a company by domain.
    pub fn find(&self, params: &CompanyFindParams) -> Result<Response<Company>, Error> {
        self.endpoint.send(&self.build_find(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{config, Recorder};

    #[test]
    fn build_find_produces_correct_request() {
        let service = CompanyService::new(&config(Recorder::new(200, "{}")));
        let req = service.build_find(&CompanyFindParams {
            domain: "clearbit.com".to_string(),
            ..Default::default()
        });
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://company.clearbit.com/v2/companies/find");
        assert_eq!(req.query, vec![("domain".to_string(), "clearbit.com".to_string())]);
    }

    #[test]
    fn find_decodes_company() {
        let transport = Recorder::new(200, r#"{"name":"Clearbit","domain":"clearbit.com"}"#);
        let service = CompanyService::new(&config(transport.clone()));
        let company = service
            .find(&CompanyFindParams {
                domain: "clearbit.com".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(company.data.name.as_deref(), Some("Clearbit"));
        assert_eq!(transport.requests.lock().unwrap().len(), 1);
    }

    #[test]
    fn find_surfaces_unknown_record() {
        let transport = Recorder::new(
            404,
            r#"{"error":{"type":"unknown_record","message":"Unknown domain"}}"#,
        );
        let service = CompanyService::new(&config(transport));
        let err = service.find(&CompanyFindParams::default()).unwrap_err();
        let details = err.api_errors().unwrap();
        assert_eq!(details[0].kind, "unknown_record");
        assert_eq!(err.to_string(), "clearbit: 404 Not Found unknown_record Unknown domain");
    }
}
