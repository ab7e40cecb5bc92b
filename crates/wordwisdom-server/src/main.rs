//! WordWisdom: heuristic text analysis and insight generation server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use wordwisdom_core::WordWisdomConfig;
use wordwisdom_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" | "help" => {
                println!("WordWisdom: text analysis and insight generation server");
                println!();
                println!("Usage: wordwisdom [command]");
                println!();
                println!("Commands:");
                println!("  (none)    Start the server");
                println!("  help      Show this help message");
                println!();
                println!("Environment:");
                println!("  PORT              Listen port (default 8080)");
                println!("  AI_SERVER_URL     External AI server base URL");
                println!("  OPENAI_API_KEY    Enables OpenAI insight generation");
                println!("  OPENAI_MODEL      Chat model (default gpt-4o-mini)");
                println!("  OPENAI_ENDPOINT   Chat completions URL");
                println!("  RUST_LOG          Log filter (default info)");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'wordwisdom help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let config = WordWisdomConfig::from_env();
    let port = config.port;

    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("WordWisdom server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
