//! STAN chatbot backend entry point.
//!
//! Binary name: `stanbot`
//!
//! Parses CLI arguments, initializes logging and application state, then
//! serves the chat API until Ctrl+C or SIGTERM.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stanbot_api::cli::Cli;
use stanbot_api::http::router::build_router;
use stanbot_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,stanbot_api=debug,stanbot_core=debug,stanbot_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let state = AppState::new(cli.expose_data);
    let router = build_router(state, &cli.cors_origin)?;

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    if !cli.quiet {
        println!(
            "  {} STAN chatbot backend listening on {}",
            console::style("🚀").bold(),
            console::style(format!("http://{addr}")).cyan()
        );
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if !cli.quiet {
        println!("\n  Server stopped.");
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
