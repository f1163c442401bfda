use anyhow::Result;
use clap::Parser;

use prompt_mcp::cli::Cli;
use prompt_mcp::stdio::{self, PromptMcpServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so API_BASE_URL / AUTH_TOKEN fallbacks see it
    let dotenv = dotenvy::dotenv();

    // Initialize logging
    env_logger::init();

    if let Ok(path) = &dotenv {
        log::debug!("Loaded environment from {}", path.display());
    }

    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle list-tools flag
    if cli.list_tools {
        println!("Available tools ({} variant):", cli.variant);
        for tool in stdio::metadata::tool_metadata(cli.variant) {
            println!("  - {}", tool.name());
        }
        return Ok(());
    }

    let server = match PromptMcpServer::new(cli.adapter_config()) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Prompt MCP server failed to start: {e}");
            return Err(e.into());
        }
    };

    tokio::select! {
        result = server.serve_stdio() => {
            if let Err(e) = &result {
                log::error!("Prompt MCP server stopped with error: {e:#}");
            }
            result
        }
        () = wait_for_interrupt() => {
            log::info!("Received interrupt signal, shutting down");
            Ok(())
        }
    }
}

/// Wait for interrupt signal (cross-platform)
#[cfg(unix)]
async fn wait_for_interrupt() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm_result = signal(SignalKind::terminate());
    let mut sigint_result = signal(SignalKind::interrupt());

    match (sigterm_result.as_mut(), sigint_result.as_mut()) {
        (Ok(sigterm), Ok(sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {}
                _ = sigint.recv() => {}
            }
        }
        (Ok(sigterm), Err(_)) => {
            let _ = sigterm.recv().await;
        }
        (Err(_), Ok(sigint)) => {
            let _ = sigint.recv().await;
        }
        (Err(_), Err(_)) => {
            let () = std::future::pending().await;
        }
    }
}

/// Wait for interrupt signal (cross-platform)
#[cfg(windows)]
async fn wait_for_interrupt() {
    use tokio::signal::windows;

    match windows::ctrl_c() {
        Ok(mut ctrl_c) => {
            let _ = ctrl_c.recv().await;
        }
        Err(_) => {
            let () = std::future::pending().await;
        }
    }
}
