//! Entry point holding one instance of every endpoint service.
//!
//! # Design
//! `Client` is built once from a `Config` and never mutated afterwards. All
//! services share the config's transport through an `Arc`, so cloning the
//! client or calling services from several threads needs no locking.

use crate::config::Config;
use crate::error::Error;
use crate::services::{
    AutocompleteService, CompanyService, DiscoveryService, NameToDomainService, PersonService,
    ProspectorService, RevealService, RiskService,
};

#[derive(Debug, Clone)]
pub struct Client {
    autocomplete: AutocompleteService,
    person: PersonService,
    company: CompanyService,
    discovery: DiscoveryService,
    prospector: ProspectorService,
    reveal: RevealService,
    risk: RiskService,
    name_to_domain: NameToDomainService,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            autocomplete: AutocompleteService::new(&config),
            person: PersonService::new(&config),
            company: CompanyService::new(&config),
            discovery: DiscoveryService::new(&config),
            prospector: ProspectorService::new(&config),
            reveal: RevealService::new(&config),
            risk: RiskService::new(&config),
            name_to_domain: NameToDomainService::new(&config),
        }
    }

    /// Client with every default: key from `CLEARBIT_KEY`, 10 second
    /// timeout, production hosts.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(Config::builder().build()?))
    }

    pub fn autocomplete(&self) -> &AutocompleteService {
        &self.autocomplete
    }

    pub fn person(&self) -> &PersonService {
        &self.person
    }

    pub fn company(&self) -> &CompanyService {
        &self.company
    }

    pub fn discovery(&self) -> &DiscoveryService {
        &self.discovery
    }

    pub fn prospector(&self) -> &ProspectorService {
        &self.prospector
    }

    pub fn reveal(&self) -> &RevealService {
        &self.reveal
    }

    pub fn risk(&self) -> &RiskService {
        &self.risk
    }

    pub fn name_to_domain(&self) -> &NameToDomainService {
        &self.name_to_domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceKind;
    use crate::services::testing::{config, Recorder};
    use crate::services::{CompanyFindParams, DiscoverySearchParams};

    #[test]
    fn services_use_their_own_hosts() {
        let client = Client::new(config(Recorder::new(200, "{}")));
        let req = client.discovery().build_search(&DiscoverySearchParams::default());
        assert!(req.url.starts_with("https://discovery.clearbit.com/"));
        let req = client.company().build_find(&CompanyFindParams::default());
        assert!(req.url.starts_with("https://company.clearbit.com/"));
    }

    #[test]
    fn overrides_apply_per_service() {
        let transport = Recorder::new(200, "{}");
        let config = Config::builder()
            .api_key("sk_test")
            .transport(transport)
            .base_url(ServiceKind::Discovery, "http://127.0.0.1:8080")
            .build()
            .unwrap();
        let client = Client::new(config);
        let req = client.discovery().build_search(&DiscoverySearchParams::default());
        assert_eq!(req.url, "http://127.0.0.1:8080/v1/companies/search");
        let req = client.company().build_find(&CompanyFindParams::default());
        assert_eq!(req.url, "https://company.clearbit.com/v2/companies/find");
    }

    #[test]
    fn every_service_shares_one_transport() {
        let transport = Recorder::new(200, "{}");
        let client = Client::new(config(transport.clone()));
        client.company().find(&CompanyFindParams::default()).unwrap();
        client.discovery().search(&DiscoverySearchParams::default()).unwrap();
        assert_eq!(transport.requests.lock().unwrap().len(), 2);
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
