//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, points every service's base URL
//! at it, and exercises each operation over real HTTP through the default
//! `ureq` transport.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clearbit::{
    AutocompleteSuggestParams, Client, CompanyFindParams, Config, DiscoverySearchParams, Error,
    NameToDomainFindParams, PersonFindParams, ProspectorSearchParams, RevealFindParams,
    RiskCalculateParams, ServiceKind, UreqTransport,
};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn client_with_key(addr: SocketAddr, api_key: &str) -> Client {
    let base = format!("http://{addr}");
    let config = Config::builder()
        .api_key(api_key)
        .timeout(Duration::from_secs(5))
        .base_urls(ServiceKind::ALL.map(|kind| (kind.as_str(), base.clone())))
        .build()
        .unwrap();
    Client::new(config)
}

fn client(addr: SocketAddr) -> Client {
    client_with_key(addr, mock_server::DEFAULT_API_KEY)
}

#[test]
fn autocomplete_suggest() {
    let client = client(start_server());
    let result = client
        .autocomplete()
        .suggest(&AutocompleteSuggestParams {
            query: "clearbit".to_string(),
        })
        .unwrap();
    assert_eq!(result.status(), 200);
    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].domain.as_deref(), Some("clearbit.com"));
}

#[test]
fn company_find() {
    let client = client(start_server());
    let result = client
        .company()
        .find(&CompanyFindParams {
            domain: "clearbit.com".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(result.status(), 200);
    assert_eq!(result.data.name.as_deref(), Some("Clearbit"));
    assert_eq!(result.data.metrics.employees, Some(200));
}

#[test]
fn company_find_unknown_domain() {
    let client = client(start_server());
    let err = client
        .company()
        .find(&CompanyFindParams {
            domain: "nope.example".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    match &err {
        Error::Api(payload) => {
            assert_eq!(payload.http_status(), Some("404 Not Found"));
            assert_eq!(payload.errors()[0].kind, "unknown_record");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "clearbit: 404 Not Found unknown_record Unknown domain");
}

#[test]
fn person_find_and_combined() {
    let client = client(start_server());
    let params = PersonFindParams {
        email: "alex@clearbit.com".to_string(),
        ..Default::default()
    };

    let person = client.person().find(&params).unwrap().into_data();
    assert_eq!(person.name.full_name.as_deref(), Some("Alex MacCaw"));

    let combined = client.person().find_combined(&params).unwrap().into_data();
    assert_eq!(combined.person.name.full_name.as_deref(), Some("Alex MacCaw"));
    assert_eq!(combined.company.name.as_deref(), Some("Clearbit"));
}

#[test]
fn person_find_queued() {
    let client = client(start_server());
    let result = client
        .person()
        .find(&PersonFindParams {
            email: "queued@clearbit.com".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(result.status(), 202);
    assert_eq!(result.data.name.full_name, None);
}

#[test]
fn discovery_search() {
    let client = client(start_server());
    let result = client
        .discovery()
        .search(&DiscoverySearchParams {
            query: "name:clearbit".to_string(),
            page: 3,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(result.data.total, 1);
    assert_eq!(result.data.page, 3);
    assert_eq!(result.data.results[0].domain.as_deref(), Some("clearbit.com"));
}

#[test]
fn discovery_error_on_success_status() {
    let client = client(start_server());
    let err = client
        .discovery()
        .search(&DiscoverySearchParams {
            query: "tech:rust".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    match err {
        Error::Api(payload) => {
            assert_eq!(payload.http_status(), None);
            assert_eq!(payload.errors()[0].kind, "invalid_query");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn prospector_search() {
    let client = client(start_server());
    let result = client
        .prospector()
        .search(&ProspectorSearchParams {
            domain: "clearbit.com".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(result.data.results[0].email.as_deref(), Some("alex@clearbit.com"));
    assert_eq!(result.data.page_size, 5);
}

#[test]
fn prospector_search_with_roles() {
    let client = client(start_server());
    let result = client
        .prospector()
        .search(&ProspectorSearchParams {
            domain: "clearbit.com".to_string(),
            roles: vec!["sales".to_string(), "engineering".to_string()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(result.data.results.len(), 5);
}

#[test]
fn reveal_find() {
    let client = client(start_server());
    let result = client
        .reveal()
        .find(&RevealFindParams {
            ip: "104.193.168.24".to_string(),
        })
        .unwrap();
    assert_eq!(result.data.ip.as_deref(), Some("104.193.168.24"));
    assert_eq!(result.data.company.name.as_deref(), Some("Clearbit"));
}

#[test]
fn risk_calculate() {
    let client = client(start_server());
    let result = client
        .risk()
        .calculate(&RiskCalculateParams {
            email: "alex@clearbit.com".to_string(),
            name: "Alex MacCaw".to_string(),
            ip: "127.0.0.1".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(result.status(), 200);
    assert_eq!(result.data.risk.score, Some(0));
    assert_eq!(result.data.address.geo_match, None);
}

#[test]
fn risk_calculate_missing_inputs() {
    let client = client(start_server());
    let err = client.risk().calculate(&RiskCalculateParams::default()).unwrap_err();
    let details = err.api_errors().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[1].kind, "missing_ip");
    assert_eq!(
        err.to_string(),
        "clearbit: 422 Unprocessable Entity missing_email Email is required"
    );
}

#[test]
fn name_to_domain_find() {
    let client = client(start_server());
    let result = client
        .name_to_domain()
        .find(&NameToDomainFindParams {
            name: "Uber".to_string(),
        })
        .unwrap();
    assert_eq!(result.data.domain.as_deref(), Some("uber.com"));
}

#[test]
fn name_to_domain_miss_is_unexpected_status() {
    let client = client(start_server());
    let err = client
        .name_to_domain()
        .find(&NameToDomainFindParams {
            name: "Nobody".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus { status: 404, .. }));
    assert!(err.is_transport());
}

#[test]
fn wrong_api_key_is_rejected_by_server() {
    let client = client_with_key(start_server(), "sk_wrong");
    let err = client
        .company()
        .find(&CompanyFindParams {
            domain: "clearbit.com".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    match err {
        Error::Api(payload) => {
            assert_eq!(payload.http_status(), Some("401 Unauthorized"));
            assert_eq!(payload.errors()[0].kind, "auth_required");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unreachable_host_is_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let client = client(addr);
    let err = client
        .reveal()
        .find(&RevealFindParams {
            ip: "10.0.0.1".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

/// Accepts one connection and holds it open without answering.
fn start_silent_server(hold: Duration) -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            std::thread::sleep(hold);
            drop(stream);
        }
    });
    addr
}

#[test]
fn configured_timeout_bounds_a_supplied_agent() {
    let addr = start_silent_server(Duration::from_secs(3));
    let config = Config::builder()
        .api_key(mock_server::DEFAULT_API_KEY)
        .transport(Arc::new(UreqTransport::from_agent(ureq::Agent::new_with_defaults())))
        .timeout(Duration::from_millis(200))
        .base_url(ServiceKind::Reveal, format!("http://{addr}"))
        .build()
        .unwrap();
    let client = Client::new(config);

    let started = Instant::now();
    let err = client
        .reveal()
        .find(&RevealFindParams {
            ip: "10.0.0.1".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[test]
fn services_can_be_called_from_many_threads() {
    let client = client(start_server());
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let result = client
                    .company()
                    .find(&CompanyFindParams {
                        domain: "clearbit.com".to_string(),
                        ..Default::default()
                    })
                    .unwrap();
                assert_eq!(result.data.name.as_deref(), Some("Clearbit"));
            });
        }
    });
}
