//! NexaForge CLI and REST API entry point.
//!
//! Binary name: `nexaforge`
//!
//! Parses CLI arguments, initializes tracing and the forge pipeline, then
//! dispatches to the command handler or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use console::style;

use cli::{Cli, Commands};
use nexaforge_observe::tracing_setup::{init_tracing, shutdown_tracing};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity; RUST_LOG wins when set
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,nexaforge=debug",
        _ => "trace",
    };
    init_tracing(filter, cli.otel).map_err(|e| anyhow::anyhow!(e))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        // The catalog is static and needs no app state
        Commands::Catalog => cli::catalog::show_catalog(cli.json)?,

        Commands::Serve { port, host } => {
            let state = AppState::init().await?;
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!();
            println!(
                "  {} NexaForge API listening on {}",
                style("⚡").bold(),
                style(format!("http://{addr}")).cyan()
            );
            print_collaborators(&state);
            println!("  {}", style("Press Ctrl+C to stop").dim());
            println!();

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Forge { request } => {
            let state = AppState::init().await?;
            cli::forge::forge(&state, &request, cli.json).await?;
        }

        Commands::Show { slug } => {
            let state = AppState::init().await?;
            cli::project::show_project(&state, &slug, cli.json).await?;
        }
    }

    Ok(())
}

fn print_collaborators(state: &AppState) {
    let mark = |ok: bool| {
        if ok {
            format!("{}", style("✓").green())
        } else {
            format!("{}", style("✗").red())
        }
    };
    let c = &state.collaborators;
    println!();
    println!("  {} chat model", mark(c.chat_model));
    println!("  {} hero images", mark(c.images));
    match c.storage {
        Some(backend) => println!("  {} storage ({backend:?})", mark(true)),
        None => println!("  {} storage", mark(false)),
    }
    println!("  {} Stripe provisioning", mark(c.provisioning));
    println!(
        "  {}",
        style(format!("data dir: {}", state.data_dir.display())).dim()
    );
    println!();
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
