use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use usuarios_store::UserDirectory;

mod api;
mod config;
mod handler;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = config::config();
    let addr = config.socket_addr()?;

    let directory = Arc::new(UserDirectory::seeded());
    log::info!("user directory ready with {} users", directory.len());

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;

    let cancel = CancellationToken::new();
    let mut server = api::start_api_server(listener, directory, cancel.clone());

    tokio::select! {
        result = &mut server => {
            result.context("API server task failed")??;
            anyhow::bail!("API server stopped unexpectedly");
        },
        _ = tokio::signal::ctrl_c() => {
            cancel.cancel();
        },
    }

    server.await.context("API server task failed")??;
    Ok(())
}
