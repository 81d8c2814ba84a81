use generala::env_config;
use generala::server::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_config::init_tracing();
    let port = env_config::server_port();
    let params = env_config::search_params();
    tracing::info!(
        hold_trials = params.hold_trials,
        category_trials = params.category_trials,
        "starting generala API server"
    );

    let app = create_router(params);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("server is running on port {}, press Ctrl+C to stop", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("stopping server");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install CTRL+C signal handler");
        std::future::pending::<()>().await;
    }
}
