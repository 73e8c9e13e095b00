mod chat;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use chatstream_config::{config_dir, config_file_path, ChatStreamConfig};
use chatstream_core::ChatStreamError;
use chatstream_gateway::{GatewayState, Reply};

#[derive(Parser)]
#[command(name = "chatstream")]
#[command(about = "chatstream — character-streamed chat over SSE")]
#[command(version)]
struct Cli {
    /// Path to the config file (default: the standard config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Open the terminal chat UI
    Chat {
        /// Gateway base URL (default: the configured local gateway)
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Check gateway health
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| config_file_path(&config_dir()));
    let config = chatstream_config::load_and_prepare(&config_path).await?;
    let logging = config.logging.clone().unwrap_or_default();

    match cli.command {
        Commands::Serve { port } => {
            chatstream_logging::init_logging(&logging);
            run_server(&config, port).await?;
        }
        Commands::Chat { url } => {
            // Console output would corrupt the alternate screen; file only.
            chatstream_logging::init_file_logging(&logging);
            let base_url = url.unwrap_or_else(|| local_gateway_url(&config));
            chat::run_chat(base_url, &config).await?;
        }
        Commands::Status => {
            chatstream_logging::init_logging(&logging);
            run_status(&config).await?;
        }
    }

    Ok(())
}

fn local_gateway_url(config: &ChatStreamConfig) -> String {
    format!("http://{}:{}", config.bind_address(), config.port())
}

async fn run_server(config: &ChatStreamConfig, port_override: Option<u16>) -> Result<()> {
    let port = port_override.unwrap_or_else(|| config.port());
    let addr: SocketAddr = format!("{}:{}", config.bind_address(), port)
        .parse()
        .map_err(|_| {
            ChatStreamError::Config(format!(
                "invalid gateway bind address: {}:{}",
                config.bind_address(),
                port
            ))
        })?;

    info!(
        %addr,
        reply_len = config.reply_text().chars().count(),
        delay_ms = config.char_delay_ms(),
        "Starting chatstream gateway"
    );

    let state = GatewayState::new(Reply::from_config(config));
    chatstream_gateway::start_server(addr, state).await
}

async fn run_status(config: &ChatStreamConfig) -> Result<()> {
    let url = format!("{}/api/health", local_gateway_url(config));
    let client = reqwest::Client::new();
    match client.get(&url).send().await {
        Ok(resp) => {
            let body: serde_json::Value = resp.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Err(_) => {
            println!("chatstream gateway is not running at {url}");
        }
    }
    Ok(())
}
