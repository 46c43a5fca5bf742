mod repl;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use turismo_session::ChatSession;
use turismo_webhook::{WebhookBackend, WebhookConfig};

#[derive(Parser)]
#[command(name = "turismo")]
#[command(about = "TurismoMgta — travel assistant chat for vzla.travel")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat,
    /// Send a single message and print the assistant's reply
    Send {
        /// The message text
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = WebhookConfig::from_env();
    let backend = Arc::new(WebhookBackend::new(config));
    debug!(endpoint = backend.endpoint(), "Using chat webhook");
    let session = ChatSession::new(backend);
    debug!(session_id = %session.session_id(), "Session started");

    match cli.command {
        Commands::Chat => repl::run(&session).await?,
        Commands::Send { message } => {
            if !session.submit(&message).await.is_accepted() {
                anyhow::bail!("nothing to send: message was empty");
            }
            let transcript = session.snapshot();
            if let Some(reply) = transcript.last() {
                println!("{}", reply.text);
            }
        }
    }

    Ok(())
}
