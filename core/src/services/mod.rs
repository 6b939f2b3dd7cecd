//! One service per remote resource. Each owns an immutable `Endpoint`
//! template and exposes a pure `build_*` method next to the executing call.

mod autocomplete;
mod company;
mod discovery;
mod name_to_domain;
mod person;
mod prospector;
mod reveal;
mod risk;

pub use autocomplete::{AutocompleteService, AutocompleteSuggestParams};
pub use company::{CompanyFindParams, CompanyService};
pub use discovery::{DiscoverySearchParams, DiscoveryService};
pub use name_to_domain::{NameToDomainFindParams, NameToDomainService};
pub use person::{PersonFindParams, PersonService};
pub use prospector::{ProspectorSearchParams, ProspectorService};
pub use reveal::{RevealFindParams, RevealService};
pub use risk::{RiskCalculateParams, RiskService};
