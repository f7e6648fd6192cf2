use province_routes::audit::audit;
use province_routes::config::{ServerConfig, log_json_from_env};
use province_routes::{ConnectivityGraph, RouteTable, server};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "province_routes=info,tower_http=info";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);
    if log_json_from_env() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ServerConfig::from_env();
    info!(
        bind = %config.bind_addr,
        default_max_hops = config.query.default_max_hops,
        max_hops_cap = config.query.max_hops_cap,
        "starting province routes server"
    );

    let report = audit(ConnectivityGraph::builtin(), RouteTable::builtin());
    info!(
        routes = RouteTable::builtin().len(),
        rejected = report.rejected_entries,
        table_pairs = report.table_pairs,
        graph_pairs = report.graph_pairs,
        table_only = report.table_only,
        graph_only = report.graph_only,
        unlinked_legs = report.unlinked_legs.len(),
        one_way_edges = report.one_way_edges,
        "connectivity audit"
    );

    if let Err(err) = server::run(config).await {
        error!(%err, "server error");
        std::process::exit(1);
    }
}
