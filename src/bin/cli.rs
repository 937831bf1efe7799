//! Inventory CLI
//!
//! Offline administration of an inventory database file.
//! The server must not hold the file open at the same time.

use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use inventory::{transform, InventoryError, InventoryRepository, ServerInput, Store};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Inventory CLI
#[derive(Parser, Debug)]
#[command(name = "inventory-cli")]
#[command(about = "Offline CLI for the server inventory")]
#[command(version)]
struct Args {
    /// Database file
    #[arg(short, long, default_value = "./inventory.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every server as JSON
    List,

    /// Get a server by id
    Get {
        /// The server id
        id: String,
    },

    /// Add a server
    Add {
        #[arg(long)]
        fqdn: String,

        #[arg(long)]
        ip: String,

        /// Repeat for several tags
        #[arg(long = "tag", required = true)]
        tags: Vec<String>,
    },

    /// Merge changes into a server (omitted fields are kept)
    Update {
        /// The server id
        id: String,

        #[arg(long, default_value = "")]
        fqdn: String,

        #[arg(long, default_value = "")]
        ip: String,

        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Delete a server
    Del {
        /// The server id
        id: String,
    },

    /// Print the Ansible inventory as YAML
    Export,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        let code = if e.is_client_error() { 2 } else { 1 };
        std::process::exit(code);
    }
}

fn run(args: Args) -> inventory::Result<()> {
    let store = Arc::new(Store::open(Path::new(&args.db))?);
    let repo = InventoryRepository::new(store);

    match args.command {
        Commands::List => print_json(&repo.list_all()?),
        Commands::Get { id } => match repo.get(&id)? {
            Some(server) => print_json(&server),
            None => not_found(&id),
        },
        Commands::Add { fqdn, ip, tags } => {
            let server = repo.create(ServerInput { fqdn, ip, tags })?;
            print_json(&server)
        }
        Commands::Update { id, fqdn, ip, tags } => {
            match repo.patch(&id, &ServerInput { fqdn, ip, tags })? {
                Some(server) => print_json(&server),
                None => not_found(&id),
            }
        }
        Commands::Del { id } => {
            repo.delete(&id)?;
            Ok(())
        }
        Commands::Export => {
            print!("{}", transform::to_ansible_yaml(&repo.list_all()?)?);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> inventory::Result<()> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| InventoryError::Encoding(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

fn not_found(id: &str) -> inventory::Result<()> {
    eprintln!("server not found: {}", id);
    std::process::exit(3);
}
