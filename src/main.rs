use learnquest::app::App;
use learnquest::config::AppConfig;
use learnquest::error::Result;
use learnquest::routes::app_routes;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;

    eprintln!("🎓 LearnQuest v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Reply delay: {}ms", config.reply_delay.as_millis());

    let app = App::new(config.clone());

    // ── HTTP / WebSocket ────────────────────────────────────────────────
    if config.http_enabled {
        let port = config.http_port;
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let router = app_routes(app.clone()).layer(CorsLayer::permissive());
        eprintln!("   API: http://0.0.0.0:{port}/api");
        eprintln!("   Chat WS: ws://0.0.0.0:{port}/ws/chat");
        tokio::spawn(async move {
            tracing::info!(port, "HTTP server started");
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!(error = %e, "HTTP server stopped");
            }
        });
    } else {
        eprintln!("   HTTP: disabled");
    }
    eprintln!();

    learnquest::cli::run(app).await?;

    Ok(())
}
