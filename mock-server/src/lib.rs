//! In-process stand-in for the Clearbit hosts.
//!
//! Every endpoint lives on one router, so a client can point all of its
//! base URLs at a single local port. Responses are fixed fixtures, plus a
//! few triggers for the error shapes the client must handle.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::info;

/// Key accepted on authenticated routes unless another is configured.
pub const DEFAULT_API_KEY: &str = "sk_test";

#[derive(Clone)]
pub struct MockState {
    api_key: Arc<str>,
}

type Params = Query<HashMap<String, String>>;

#[derive(Debug, Serialize)]
struct ErrorDetail<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    message: &'a str,
}

/// Body shape of every Clearbit error: one detail or a list of them.
#[derive(Debug, Serialize)]
struct ErrorEnvelope<T> {
    error: T,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RiskQuery {
    email: String,
    ip: String,
}

pub fn app() -> Router {
    app_with_key(DEFAULT_API_KEY)
}

pub fn app_with_key(api_key: &str) -> Router {
    let state = MockState {
        api_key: Arc::from(api_key),
    };
    Router::new()
        .route("/v1/companies/suggest", get(suggest))
        .route("/v2/companies/find", get(company_find))
        .route("/v2/people/find", get(person_find))
        .route("/v2/combined/find", get(combined_find))
        .route("/v1/companies/search", get(discovery_search))
        .route("/v1/people/search", get(prospector_search))
        .route("/v1/companies/find", get(reveal_find))
        .route("/v1/calculate", post(risk_calculate))
        .route("/v1/domains/find", get(name_to_domain_find))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, DEFAULT_API_KEY).await
}

pub async fn serve(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock clearbit listening");
    }
    axum::serve(listener, app_with_key(api_key)).await
}

fn error_body(status: StatusCode, kind: &str, message: &str) -> Response {
    let body = ErrorEnvelope {
        error: ErrorDetail { kind, message },
    };
    (status, Json(body)).into_response()
}

/// Accepts only `Basic base64("<key>:")`.
fn authorize(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Basic {}", STANDARD.encode(format!("{}:", state.api_key)));
    match headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(error_body(
            StatusCode::UNAUTHORIZED,
            "auth_required",
            "An API key is required to access this resource",
        )),
    }
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or("")
}

fn company_fixture() -> Value {
    json!({
        "id": "3f5d6a4e-c284-4f78-bfdf-7669b45af907",
        "name": "Clearbit",
        "legalName": "APIHub, Inc",
        "domain": "clearbit.com",
        "tags": ["Technology", "SAAS", "B2B"],
        "geo": { "city": "San Francisco", "stateCode": "CA", "countryCode": "US" },
        "metrics": { "employees": 200, "employeesRange": "51-250" },
        "type": "private",
        "indexedAt": "2016-11-07T00:00:00.000Z"
    })
}

fn person_fixture() -> Value {
    json!({
        "id": "d54c54ad-40be-4305-8a34-0ab44710b90d",
        "name": { "fullName": "Alex MacCaw", "givenName": "Alex", "familyName": "MacCaw" },
        "email": "alex@clearbit.com",
        "employment": { "domain": "clearbit.com", "name": "Clearbit", "title": "Co-founder" },
        "github": { "handle": "maccman", "id": 2142 },
        "twitter": { "handle": "maccaw", "id": 2006261 }
    })
}

async fn suggest(Query(params): Params) -> Json<Value> {
    if param(&params, "query").is_empty() {
        return Json(json!([]));
    }
    Json(json!([{
        "domain": "clearbit.com",
        "logo": "https://logo.clearbit.com/clearbit.com",
        "name": "Clearbit"
    }]))
}

async fn company_find(State(state): State<MockState>, headers: HeaderMap, Query(params): Params) -> Response {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    match param(&params, "domain") {
        "clearbit.com" => Json(company_fixture()).into_response(),
        _ => error_body(StatusCode::NOT_FOUND, "unknown_record", "Unknown domain"),
    }
}

async fn person_find(State(state): State<MockState>, headers: HeaderMap, Query(params): Params) -> Response {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    match param(&params, "email") {
        "alex@clearbit.com" => Json(person_fixture()).into_response(),
        // Lookup accepted but not finished yet.
        "queued@clearbit.com" => (StatusCode::ACCEPTED, Json(json!({}))).into_response(),
        _ => error_body(StatusCode::NOT_FOUND, "unknown_record", "Unknown email address"),
    }
}

async fn combined_find(State(state): State<MockState>, headers: HeaderMap, Query(params): Params) -> Response {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    match param(&params, "email") {
        "alex@clearbit.com" => Json(json!({
            "person": person_fixture(),
            "company": company_fixture()
        }))
        .into_response(),
        _ => error_body(StatusCode::NOT_FOUND, "unknown_record", "Unknown email address"),
    }
}

async fn discovery_search(State(state): State<MockState>, headers: HeaderMap, Query(params): Params) -> Response {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    let page: u32 = param(&params, "page").parse().unwrap_or(1);
    let mut body = json!({
        "total": 1,
        "page": page,
        "results": [{ "domain": "clearbit.com", "name": "Clearbit" }]
    });
    // Partial results are reported in the body of a 200.
    if param(&params, "query").contains("tech:") {
        body["error"] = json!({ "type": "invalid_query", "message": "Unsupported filter: tech" });
    }
    Json(body).into_response()
}

async fn prospector_search(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    let roles: Vec<&str> = pairs
        .iter()
        .filter(|(k, _)| k == "roles[]")
        .map(|(_, v)| v.as_str())
        .collect();
    if roles.is_empty() {
        return Json(json!({
            "total": 1,
            "page": 1,
            "page_size": 5,
            "results": [{ "email": "alex@clearbit.com", "name": { "fullName": "Alex MacCaw" } }]
        }))
        .into_response();
    }
    let results: Vec<Value> = ["sales", "sales", "engineering", "engineering", "sales"]
        .into_iter()
        .filter(|role| roles.contains(role))
        .map(|role| json!({ "role": role }))
        .collect();
    Json(json!({
        "total": results.len(),
        "page": 1,
        "page_size": 5,
        "results": results
    }))
    .into_response()
}

async fn reveal_find(State(state): State<MockState>, headers: HeaderMap, Query(params): Params) -> Response {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    Json(json!({
        "ip": param(&params, "ip"),
        "fuzzy": false,
        "domain": "clearbit.com",
        "type": "company",
        "company": { "name": "Clearbit" }
    }))
    .into_response()
}

async fn risk_calculate(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(query): Query<RiskQuery>,
) -> Response {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    let mut errors = Vec::new();
    if query.email.is_empty() {
        errors.push(ErrorDetail {
            kind: "missing_email",
            message: "Email is required",
        });
    }
    if query.ip.is_empty() {
        errors.push(ErrorDetail {
            kind: "missing_ip",
            message: "IP is required",
        });
    }
    if !errors.is_empty() {
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorEnvelope { error: errors })).into_response();
    }
    Json(json!({
        "id": "e2dbc5b1-4a6f-4b7a-a3a4-2a0c55f0d34f",
        "live": false,
        "email": { "valid": true, "disposable": false },
        "address": { "geoMatch": null },
        "ip": { "proxy": false, "geoMatch": null },
        "risk": { "level": "low", "score": 0 }
    }))
    .into_response()
}

async fn name_to_domain_find(State(state): State<MockState>, headers: HeaderMap, Query(params): Params) -> Response {
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    match param(&params, "name") {
        "Uber" => Json(json!({
            "name": "Uber",
            "domain": "uber.com",
            "logo": "https://logo.clearbit.com/uber.com"
        }))
        .into_response(),
        // No match: bare 404 without an error body.
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
