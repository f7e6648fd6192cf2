//! HTTP API tests against a live server on an ephemeral port.

use std::net::SocketAddr;
use std::sync::mpsc;
use std::thread::JoinHandle;

use tokio::net::TcpListener;
use tokio::sync::oneshot;

use province_routes::client::{ClientConfig, ClientError, RouteServiceClient};
use province_routes::config::ServerConfig;
use province_routes::server::{AppState, serve_on};

// ============================================================================
// Test Infrastructure
// ============================================================================

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    fn start() -> Self {
        Self::start_with(ServerConfig::default())
    }

    fn start_with(config: ServerConfig) -> Self {
        let (addr_tx, addr_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let handle = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("build runtime");
            runtime.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
                addr_tx
                    .send(listener.local_addr().expect("local addr"))
                    .expect("send addr");
                let shutdown = async move {
                    let _ = shutdown_rx.await;
                };
                serve_on(listener, AppState::new(config), shutdown)
                    .await
                    .expect("serve app");
            });
        });

        let addr = addr_rx.recv().expect("server address");
        Self {
            addr,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn client(&self) -> RouteServiceClient {
        RouteServiceClient::new(ClientConfig {
            base_url: self.base_url(),
            timeout_secs: 5,
        })
        .expect("build client")
    }

    fn get_json(&self, path: &str) -> (u16, serde_json::Value) {
        let response = reqwest::blocking::get(format!("{}{}", self.base_url(), path))
            .expect("send request");
        let status = response.status().as_u16();
        (status, response.json().expect("json body"))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

// ============================================================================
// Connections
// ============================================================================

#[test]
fn lists_full_adjacency_map() {
    let server = TestServer::start();
    let body = server.client().connections().expect("connections");

    assert!(body.success);
    assert_eq!(body.connections.len(), 34);
    assert!(body.connections["Herat"].is_empty());
    assert!(body.connections["Kabul"].contains(&"Laghman".to_string()));
    assert!(body.connections.contains_key("Sar-e Pol"));
}

#[test]
fn province_connections_accept_localized_names() {
    let server = TestServer::start();
    let body = server
        .client()
        .province_connections("کابل")
        .expect("province connections");

    assert!(body.success);
    assert_eq!(body.province, "Kabul");
    assert_eq!(body.connections[0], "Parwan");
}

#[test]
fn province_with_space_in_name() {
    let server = TestServer::start();
    let body = server
        .client()
        .province_connections("Maidan Wardak")
        .expect("province connections");
    assert_eq!(body.province, "Maidan Wardak");
    assert!(body.connections.contains(&"Ghazni".to_string()));
}

#[test]
fn unknown_province_is_404_with_echoed_input() {
    let server = TestServer::start();
    match server.client().province_connections("Atlantis") {
        Err(ClientError::NotFound(message)) => assert!(message.contains("Atlantis")),
        other => panic!("expected not found, got {:?}", other),
    }

    let (status, body) = server.get_json("/api/provincial-connections/Atlantis");
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Province 'Atlantis' not found");
}

#[test]
fn undecodable_province_is_404_json() {
    let server = TestServer::start();
    let (status, body) = server.get_json("/api/provincial-connections/%FF");
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Province '%FF' not found");
}

// ============================================================================
// Check route
// ============================================================================

#[test]
fn check_route_returns_reversed_table_route() {
    let server = TestServer::start();
    let body = server
        .client()
        .check_route("Kabul", "Badakhshan")
        .expect("check route");

    assert!(body.success);
    assert!(body.connected);
    assert_eq!(body.hops, 5);
    assert_eq!(
        body.route.en,
        "Kabul → Parwan → Baghlan → Kunduz → Takhar → Badakhshan"
    );
    assert!(body.route.prs.starts_with("کابل"));
    assert_eq!(body.route_details.len(), 6);
    assert_eq!(body.route_details[5].en, "Badakhshan");
}

#[test]
fn check_route_not_connected_is_success() {
    let server = TestServer::start();
    let body = server
        .client()
        .check_route("Badghis", "Khost")
        .expect("check route");

    assert!(body.success);
    assert!(!body.connected);
    assert_eq!(body.hops, 0);
    assert_eq!(body.route.en, "");
    assert!(body.route_details.is_empty());
    assert!(body.message.contains("No route found"));
}

#[test]
fn check_route_unknown_province_is_404() {
    let server = TestServer::start();
    let (status, body) =
        server.get_json("/api/provincial-connections/check-route/Kabul/Gotham");
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("Gotham"));
}

#[test]
fn check_route_undecodable_destination_is_404_json() {
    let server = TestServer::start();
    let (status, body) = server.get_json("/api/provincial-connections/check-route/Kabul/%FF");
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Province '%FF' not found");

    let (status, _) = server.get_json("/api/provincial-connections/shortest-route/%FF/Kabul");
    assert_eq!(status, 404);
}

#[test]
fn check_route_response_uses_camel_case_keys() {
    let server = TestServer::start();
    let (status, body) =
        server.get_json("/api/provincial-connections/check-route/Kabul/Parwan");
    assert_eq!(status, 200);
    assert!(body.get("routeDetails").is_some());
    assert_eq!(body["hops"], 1);
    assert_eq!(body["route"]["en"], "Kabul → Parwan");
}

// ============================================================================
// Find routes
// ============================================================================

#[test]
fn find_routes_with_hop_bound() {
    let server = TestServer::start();
    let body = server
        .client()
        .find_routes("Kabul", "Nangarhar", Some(2))
        .expect("find routes");

    assert!(body.success);
    assert_eq!(body.count, body.routes.en.len());
    assert_eq!(body.count, body.route_details.len());
    assert!(body.routes.en.contains(&"Kabul → Laghman → Nangarhar".to_string()));
    assert!(body.route_details.iter().all(|route| route.len() <= 3));
}

#[test]
fn find_routes_defaults_invalid_bound() {
    let server = TestServer::start();
    let client = server.client();
    let default = client.find_routes("Kabul", "Ghazni", None).expect("default");
    let explicit = client.find_routes("Kabul", "Ghazni", Some(3)).expect("explicit");
    assert_eq!(default.count, explicit.count);

    let (status, body) = server
        .get_json("/api/provincial-connections/find-routes/Kabul/Ghazni?maxHops=abc");
    assert_eq!(status, 200);
    assert_eq!(body["count"], explicit.count);

    let (_, body) =
        server.get_json("/api/provincial-connections/find-routes/Kabul/Ghazni?maxHops=0");
    assert_eq!(body["count"], explicit.count);
}

#[test]
fn find_routes_repeated_bound_uses_default() {
    let server = TestServer::start();
    let default = server
        .client()
        .find_routes("Kabul", "Ghazni", None)
        .expect("default");

    let (status, body) = server
        .get_json("/api/provincial-connections/find-routes/Kabul/Ghazni?maxHops=1&maxHops=2");
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], default.count);
}

#[test]
fn find_routes_clamps_large_bound() {
    let server = TestServer::start();
    let client = server.client();
    let capped = client.find_routes("Khost", "Kunar", Some(8)).expect("capped");
    let huge = client.find_routes("Khost", "Kunar", Some(1000)).expect("huge");
    assert_eq!(capped.count, huge.count);
    assert!(huge.route_details.iter().all(|route| route.len() <= 9));
}

#[test]
fn find_routes_unknown_province_is_404() {
    let server = TestServer::start();
    let result = server.client().find_routes("Gotham", "Kabul", None);
    assert!(matches!(result, Err(ClientError::NotFound(_))));
}

// ============================================================================
// Shortest route
// ============================================================================

#[test]
fn shortest_route_direct_edge() {
    let server = TestServer::start();
    let body = server
        .client()
        .shortest_route("Kabul", "Laghman")
        .expect("shortest route");

    assert!(body.success);
    assert_eq!(body.hops, 1);
    assert_eq!(body.route.en, "Kabul → Laghman");
    assert_eq!(body.route_details.len(), 2);
}

#[test]
fn shortest_route_unreachable_is_404() {
    let server = TestServer::start();
    let result = server.client().shortest_route("Kabul", "Herat");
    assert!(matches!(result, Err(ClientError::NotFound(_))));
}

#[test]
fn shortest_route_accepts_pashto_input() {
    let server = TestServer::start();
    let body = server
        .client()
        .shortest_route("ننګرهار", "کابل")
        .expect("shortest route");
    assert_eq!(body.route.en, "Nangarhar → Kabul");
    assert_eq!(body.route.pbt, "ننګرهار → کابل");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn configured_default_hops_apply() {
    let mut config = ServerConfig::default();
    config.query.default_max_hops = 1;
    let server = TestServer::start_with(config);

    let body = server
        .client()
        .find_routes("Kabul", "Nangarhar", None)
        .expect("find routes");
    assert_eq!(body.count, 1);
    assert_eq!(body.routes.en, vec!["Kabul → Nangarhar".to_string()]);
}
