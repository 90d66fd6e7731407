use movierank::{AppState, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movierank=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.addr;

    let state = AppState::from_config(config).await?;
    let app = movierank::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
