// --- Servicio N-ésimo mínimo - Archivo principal ---

use nthmin::config::ServerConfig;
use nthmin::run_server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nthmin=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!("=== Servicio N-ésimo mínimo (API) ===");
    tracing::info!("Iniciando servidor en http://{}", config.bind_addr);
    run_server(config).await
}
