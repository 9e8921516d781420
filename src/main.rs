use tracing::info;
use vibe_check_backend::{build_app, config::Config, domain::vibes::VibeSet, logging, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env();
    let bind_socket = config.bind_socket();
    let app = build_app(AppState::new(VibeSet::standard()));
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        "server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
