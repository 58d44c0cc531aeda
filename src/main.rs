mod cli;

use crate::cli::{Cli, Command};
use anyhow::Context;
use clap::Parser;
use docpurge::config::Config;
use docpurge::store::FirestoreStore;
use docpurge::web::{self, AppState};
use docpurge::purge;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("docpurge=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config)?;

    match cli.command {
        Command::Run { limit } => {
            if let Some(limit) = limit {
                config.purge.total_limit = limit;
            }
            let store = FirestoreStore::new(&config.firestore, store_token());

            let report = purge::run(&store, &config.purge).await?;
            println!("deleted {} documents", report.total_deleted);
        }
        Command::Serve { port } => {
            let port = port.unwrap_or(config.server.port);
            let state = AppState {
                store: Arc::new(FirestoreStore::new(&config.firestore, store_token())),
                purge: Arc::new(config.purge),
                token: std::env::var("SYNC_TOKEN").ok(),
            };
            if state.token.is_none() {
                tracing::warn!("SYNC_TOKEN is not set; the purge endpoint is ungated");
            }

            let addr = SocketAddr::from(([0, 0, 0, 0], port));
            web::serve(addr, state).await.context("server error")?;
        }
    }

    Ok(())
}

fn store_token() -> Option<String> {
    std::env::var("FIRESTORE_TOKEN").ok()
}
