//! Typed client for the Clearbit enrichment APIs.
//!
//! # Overview
//! One service per remote resource (company, person, discovery, prospector,
//! reveal, risk, name-to-domain, autocomplete), reached through a single
//! `Client`. Every call issues exactly one HTTP request, decodes the JSON
//! body into a typed struct and maps API error payloads into `Error`.
//!
//! ```no_run
//! use clearbit::{Client, Config, CompanyFindParams};
//!
//! let client = Client::new(Config::builder().api_key("sk_1234").build()?);
//! let company = client.company().find(&CompanyFindParams {
//!     domain: "clearbit.com".to_string(),
//!     ..Default::default()
//! })?;
//! println!("{:?}", company.data.name);
//! # Ok::<(), clearbit::Error>(())
//! ```
//!
//! # Design
//! - Each service splits a call into `build_*` (pure, returns `HttpRequest`)
//!   and an executing method that hands the request to the shared
//!   `Transport`, so request shape can be tested without I/O.
//! - No retries, caching or paging loops: one call, one round-trip.
//! - Parameter fields left at their zero value are not sent.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod query;
pub mod services;
pub mod types;

pub use client::Client;
pub use config::{Config, ConfigBuilder, ServiceKind, API_KEY_ENV};
pub use endpoint::{receive, Response};
pub use error::{relevant_error, ApiErrorPayload, Error, ErrorDetail};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use query::{QueryPairs, QueryParams};
pub use services::*;
pub use types::*;
