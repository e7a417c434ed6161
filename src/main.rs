use std::sync::Arc;
use tokio::sync::Notify;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod query;
mod server;
mod table;

use error::ServerError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional first argument: config file path without extension
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path).map_err(ServerError::from)?;

    logger::init(&cfg).map_err(ServerError::from)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build().map_err(ServerError::from)?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr().map_err(ServerError::Addr)?;
    let listener = server::create_listener(addr).map_err(ServerError::from)?;

    // Table is built exactly once and shared read-only from here on
    let state = Arc::new(config::AppState::new(&cfg));

    logger::log_server_start(&addr, &cfg, &state.data_dir);
    logger::log_table(&state.table);
    logger::log_missing_files(&state.table.missing_files(&state.data_dir));

    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown)).map_err(ServerError::from)?;

    // Use LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(listener, state, shutdown))
        .await
}
