use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use souk_cart::CartStore;
use souk_client::{ApiClient, CredentialStore, ReqwestTransport};
use souk_store::FileStore;

mod admin;
mod cart;
mod catalog;
mod order;

#[derive(Debug, Parser)]
#[command(name = "souk", about = "Souk storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Catalog(catalog::CatalogCommand),
    Cart(cart::CartCommand),
    Order(order::OrderCommand),
    Admin(admin::AdminCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Catalog(command) => catalog::run(command).await,
            Commands::Cart(command) => cart::run(command).await,
            Commands::Order(command) => order::run(command).await,
            Commands::Admin(command) => admin::run(command).await,
        }
    }
}

/// Shared connection and state arguments.
#[derive(Debug, Args)]
pub(crate) struct ConnectionArgs {
    /// API base URL
    #[arg(
        long,
        env = "SOUK_API_URL",
        default_value = "http://localhost:8000/api"
    )]
    api_url: String,

    /// Directory holding the cart and session snapshots
    #[arg(long, env = "SOUK_DATA_DIR", default_value = ".souk")]
    data_dir: PathBuf,
}

impl ConnectionArgs {
    pub(crate) fn client(&self) -> ApiClient<ReqwestTransport, FileStore> {
        ApiClient::new(
            ReqwestTransport::new(self.api_url.clone()),
            CredentialStore::new(FileStore::new(&self.data_dir)),
        )
    }

    pub(crate) fn cart_store(&self) -> CartStore<FileStore> {
        CartStore::load(FileStore::new(&self.data_dir))
    }
}
