use std::sync::Arc;

use auth_core::PasswordHasher;
use auth_core::TokenIssuer;
use auth_service::config::Config;
use auth_service::domain::user::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::directory::InMemoryUserDirectory;
use chrono::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_seconds = config.jwt.ttl_seconds,
        hash_cost = config.password.hash_cost,
        "Configuration loaded"
    );

    let token_issuer = TokenIssuer::new(config.jwt.secret.as_bytes())
        .with_ttl(Duration::seconds(config.jwt.ttl_seconds));
    let directory = Arc::new(InMemoryUserDirectory::new());

    let auth_service = Arc::new(
        AuthService::new(directory, token_issuer)
            .with_password_hasher(PasswordHasher::with_cost(config.password.hash_cost)),
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
