#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use library_console::config::ServerConfig;
    use tracing_subscriber::EnvFilter;

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let app = library_console::server::app(&config).expect("server setup failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, upstream = ?config.api_upstream, "library console listening");
    axum::serve(listener, app).await.expect("server failed");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
