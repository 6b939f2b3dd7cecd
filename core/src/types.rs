//! Response DTOs for the enrichment APIs.
//!
//! # Design
//! Every struct decodes leniently: missing keys fall back to `Default`, and
//! scalars are `Option` so JSON `null` (common in enrichment records) is
//! accepted. Nested objects and lists use `nullable` so a `null` collapses to
//! the empty value rather than failing the whole decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    pub id: Option<String>,
    pub name: Option<String>,
    pub legal_name: Option<String>,
    pub domain: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub domain_aliases: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub site: CompanySite,
    #[serde(deserialize_with = "nullable")]
    pub category: Category,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub founded_year: Option<i32>,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub utc_offset: Option<i32>,
    #[serde(deserialize_with = "nullable")]
    pub geo: Geo,
    pub logo: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub facebook: Facebook,
    #[serde(deserialize_with = "nullable")]
    pub linkedin: Handle,
    #[serde(deserialize_with = "nullable")]
    pub twitter: Twitter,
    #[serde(deserialize_with = "nullable")]
    pub crunchbase: Handle,
    pub email_provider: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub ticker: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub identifiers: Identifiers,
    pub phone: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub metrics: Metrics,
    pub indexed_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable")]
    pub tech: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub parent: Parent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanySite {
    #[serde(deserialize_with = "nullable")]
    pub phone_numbers: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub email_addresses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub sector: Option<String>,
    pub industry_group: Option<String>,
    pub industry: Option<String>,
    pub sub_industry: Option<String>,
    pub sic_code: Option<String>,
    pub naics_code: Option<String>,
}

/// Street-level location. Person records only fill the city-and-above part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Geo {
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub sub_premise: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub state_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Handle {
    pub handle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Facebook {
    pub handle: Option<String>,
    pub likes: Option<i64>,
}

/// Twitter profile. `id` arrives as a string on companies and a number on
/// people, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Twitter {
    pub handle: Option<String>,
    pub id: Option<serde_json::Value>,
    pub bio: Option<String>,
    pub followers: Option<i64>,
    pub following: Option<i64>,
    pub statuses: Option<i64>,
    pub favorites: Option<i64>,
    pub location: Option<String>,
    pub site: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identifiers {
    #[serde(rename = "usEIN")]
    pub us_ein: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metrics {
    pub alexa_us_rank: Option<i64>,
    pub alexa_global_rank: Option<i64>,
    pub employees: Option<i64>,
    pub employees_range: Option<String>,
    pub market_cap: Option<i64>,
    pub raised: Option<i64>,
    pub annual_revenue: Option<i64>,
    pub estimated_annual_revenue: Option<String>,
    pub fiscal_year_end: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parent {
    pub domain: Option<String>,
}

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Name {
    pub full_name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub name: Name,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub utc_offset: Option<i32>,
    #[serde(deserialize_with = "nullable")]
    pub geo: Geo,
    pub bio: Option<String>,
    pub site: Option<String>,
    pub avatar: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub employment: Employment,
    #[serde(deserialize_with = "nullable")]
    pub facebook: Handle,
    #[serde(deserialize_with = "nullable")]
    pub github: GitHub,
    #[serde(deserialize_with = "nullable")]
    pub twitter: Twitter,
    #[serde(deserialize_with = "nullable")]
    pub linkedin: Handle,
    #[serde(rename = "googleplus", deserialize_with = "nullable")]
    pub google_plus: Handle,
    #[serde(rename = "aboutme", deserialize_with = "nullable")]
    pub about_me: AboutMe,
    #[serde(deserialize_with = "nullable")]
    pub gravatar: Gravatar,
    pub fuzzy: Option<bool>,
    pub email_provider: Option<bool>,
    pub indexed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employment {
    pub domain: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub role: Option<String>,
    pub seniority: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHub {
    pub handle: Option<String>,
    pub id: Option<i64>,
    pub avatar: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub followers: Option<i64>,
    pub following: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutMe {
    pub handle: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gravatar {
    pub handle: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub urls: Vec<GravatarLink>,
    pub avatar: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub avatars: Vec<GravatarLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravatarLink {
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Result of a combined lookup: a person and their employer from one body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonCompany {
    #[serde(deserialize_with = "nullable")]
    pub person: Person,
    #[serde(deserialize_with = "nullable")]
    pub company: Company,
}

// ---------------------------------------------------------------------------
// Discovery / Prospector / Autocomplete
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryResults {
    pub total: u32,
    pub page: u32,
    #[serde(deserialize_with = "nullable")]
    pub results: Vec<Company>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProspectorResults {
    pub total: u32,
    pub page: u32,
    pub page_size: u32,
    #[serde(deserialize_with = "nullable")]
    pub results: Vec<ProspectorPerson>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProspectorPerson {
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub name: Name,
    pub title: Option<String>,
    pub role: Option<String>,
    pub sub_role: Option<String>,
    pub seniority: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub company: ProspectorCompany,
    pub email: Option<String>,
    pub verified: Option<bool>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProspectorCompany {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteItem {
    pub domain: Option<String>,
    pub logo: Option<String>,
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Reveal / Risk / Name to domain
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reveal {
    pub ip: Option<String>,
    pub fuzzy: Option<bool>,
    pub domain: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub company: Company,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Risk {
    pub id: Option<String>,
    pub live: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub email: EmailRisk,
    #[serde(deserialize_with = "nullable")]
    pub address: AddressRisk,
    #[serde(deserialize_with = "nullable")]
    pub ip: IpRisk,
    #[serde(deserialize_with = "nullable")]
    pub risk: RiskScore,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailRisk {
    pub valid: Option<bool>,
    pub social_match: Option<bool>,
    pub company_match: Option<bool>,
    pub name_match: Option<bool>,
    pub disposable: Option<bool>,
    pub free_provider: Option<bool>,
    pub blacklisted: Option<bool>,
}

/// `geoMatch` is a boolean or `null` depending on whether an address was
/// supplied; kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressRisk {
    pub geo_match: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IpRisk {
    pub proxy: Option<bool>,
    pub geo_match: Option<serde_json::Value>,
    pub blacklisted: Option<bool>,
    pub rate_limited: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskScore {
    pub level: Option<String>,
    pub score: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameToDomain {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub logo: Option<String>,
}
