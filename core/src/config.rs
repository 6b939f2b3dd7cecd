//! Client configuration.
//!
//! # Design
//! `Config` is an immutable value produced by `ConfigBuilder::build`, which
//! resolves defaults (API key from `CLEARBIT_KEY`, a fresh `ureq` transport
//! with the configured timeout, production hosts) and validates base URL
//! overrides exactly once. `Client::new` then derives every service from it.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::Error;
use crate::http::{Transport, UreqTransport};

/// Environment variable supplying the default API key.
pub const API_KEY_ENV: &str = "CLEARBIT_KEY";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The remote resources, one per endpoint service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Autocomplete,
    Person,
    Company,
    Discovery,
    Prospector,
    Reveal,
    Risk,
    NameToDomain,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 8] = [
        ServiceKind::Autocomplete,
        ServiceKind::Person,
        ServiceKind::Company,
        ServiceKind::Discovery,
        ServiceKind::Prospector,
        ServiceKind::Reveal,
        ServiceKind::Risk,
        ServiceKind::NameToDomain,
    ];

    /// Name used as the key in base URL override maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Autocomplete => "autocomplete",
            ServiceKind::Person => "person",
            ServiceKind::Company => "company",
            ServiceKind::Discovery => "discovery",
            ServiceKind::Prospector => "prospector",
            ServiceKind::Reveal => "reveal",
            ServiceKind::Risk => "risk",
            ServiceKind::NameToDomain => "nameToDomain",
        }
    }

    /// Production host for this service.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            ServiceKind::Autocomplete => "https://autocomplete.clearbit.com",
            ServiceKind::Person => "https://person.clearbit.com",
            ServiceKind::Company => "https://company.clearbit.com",
            ServiceKind::Discovery => "https://discovery.clearbit.com",
            ServiceKind::Prospector => "https://prospector.clearbit.com",
            ServiceKind::Reveal => "https://reveal.clearbit.com",
            ServiceKind::Risk => "https://risk.clearbit.com",
            ServiceKind::NameToDomain => "https://company.clearbit.com",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::Config(format!("unknown service `{s}`")))
    }
}

/// Streaming host for the person service, used when `stream` is enabled.
pub const PERSON_STREAM_BASE_URL: &str = "https://person-stream.clearbit.com";

/// Resolved configuration shared by every service.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: String,
    timeout: Duration,
    transport: Arc<dyn Transport>,
    base_urls: HashMap<ServiceKind, String>,
    api_version: Option<String>,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    /// Base URL for `kind`, trailing slash removed.
    pub fn base_url(&self, kind: ServiceKind) -> &str {
        self.base_urls
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_base_url())
    }

    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }
}

/// Collects options for a `Config`. Nothing is resolved until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    api_key: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
    base_urls: HashMap<ServiceKind, String>,
    named_base_urls: Vec<(String, String)>,
    stream: bool,
    api_version: Option<String>,
}

impl ConfigBuilder {
    /// Sets the API key. Defaults to the `CLEARBIT_KEY` environment variable.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the request timeout. Applied to the default transport and to any
    /// supplied transport that accepts one (see `Transport::with_timeout`).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn base_url(mut self, kind: ServiceKind, url: impl Into<String>) -> Self {
        self.base_urls.insert(kind, url.into());
        self
    }

    /// Overrides base URLs by service name (`"discovery"`, `"nameToDomain"`,
    /// ...). Names are checked in `build`.
    pub fn base_urls<I, K, V>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.named_base_urls
            .extend(urls.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Routes person lookups through the streaming host, which holds the
    /// connection open until the lookup completes.
    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// Pins the `API-Version` header on every authenticated service.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn build(self) -> Result<Config, Error> {
        let mut base_urls = HashMap::new();
        if self.stream {
            base_urls.insert(ServiceKind::Person, PERSON_STREAM_BASE_URL.to_string());
        }
        for (name, url) in self.named_base_urls {
            base_urls.insert(name.parse::<ServiceKind>()?, url);
        }
        base_urls.extend(self.base_urls);

        for (kind, url) in base_urls.iter_mut() {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::Config(format!(
                    "base URL for {kind} must be http(s), got `{url}`"
                )));
            }
            let trimmed = url.trim_end_matches('/').len();
            url.truncate(trimmed);
        }

        let api_key = self
            .api_key
            .unwrap_or_else(|| std::env::var(API_KEY_ENV).unwrap_or_default());
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let transport = match self.transport {
            Some(transport) => transport.with_timeout(timeout).unwrap_or(transport),
            None => Arc::new(UreqTransport::new(timeout)),
        };

        Ok(Config {
            api_key,
            timeout,
            transport,
            base_urls,
            api_version: self.api_version,
        })
    }
}
