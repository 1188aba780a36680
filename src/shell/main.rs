use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use id_issuance::shell::config::AppConfig;
use id_issuance::shell::http;
use id_issuance::shell::state::AppState;

// The two startup-failure categories are reported separately: construction
// of the contract service, then the serving loop itself.
#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let (addr, state) = match build() {
        Ok(built) => built,
        Err(err) => {
            eprintln!("error creating contract service: {err:#}");
            std::process::exit(1);
        }
    };

    if let Err(err) = serve(addr, state).await {
        eprintln!("error serving contract service: {err:#}");
        std::process::exit(1);
    }
}

fn build() -> anyhow::Result<(SocketAddr, AppState)> {
    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;
    let state = AppState::in_memory();
    Ok((addr, state))
}

async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = http::router(state).layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("contract endpoint: http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
