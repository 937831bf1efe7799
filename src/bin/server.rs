//! Inventory Server Binary
//!
//! Starts the HTTP server for the inventory.

use std::sync::Arc;

use clap::Parser;
use inventory::network::HttpServer;
use inventory::{Config, InventoryRepository, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// Inventory Server
#[derive(Parser, Debug)]
#[command(name = "inventory-server")]
#[command(about = "Server inventory with Ansible export")]
#[command(version)]
struct Args {
    /// Database file
    #[arg(short, long, default_value = "./inventory.db")]
    db: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Maximum request body size in KB
    #[arg(short = 'b', long, default_value = "1024")]
    body_limit_kb: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,inventory=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Inventory Server v{}", inventory::VERSION);
    tracing::info!("Database: {}", args.db);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .db_path(&args.db)
        .listen_addr(&args.listen)
        .body_limit_bytes(args.body_limit_kb * 1024)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // Open store (creates the namespace on first start)
    let store = match Store::open(&config.db_path) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Store initialized successfully");

    let repo = InventoryRepository::new(Arc::clone(&store));
    let server = HttpServer::new(config, repo);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    // Last handle: closes the database
    drop(store);
    tracing::info!("Server stopped");
}
