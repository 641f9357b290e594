//! Notecards - a personal notes page.
//!
//! Serves the note feed and the card page, and offers a few maintenance
//! commands over the same data directory.

use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use notecards::{app, spawn_populate, AppState, Config, Element, FeedClient, NoteStore};

#[derive(Parser)]
#[command(name = "notecards")]
#[command(about = "Serve and inspect a personal notes page")]
#[command(version)]
struct Cli {
    /// Data directory (overrides NOTES_DATA_PATH)
    #[arg(long, value_name = "PATH", global = true)]
    data_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print all notes, newest first
    List,
    /// Fetch a remote feed and print the rendered cards
    Render {
        /// Base URL of a running notes server
        #[arg(long)]
        url: String,
    },
    /// Copy the data file
    Backup {
        /// Destination file (defaults to a timestamped file under backups/)
        dest: Option<PathBuf>,
    },
}

fn load_config(data_path: Option<PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    match data_path {
        Some(path) => {
            // The flag only replaces the data path; the rest still comes from the environment.
            let mut config = Config::from_lookup(|key| match key {
                "NOTES_DATA_PATH" => Some(path.display().to_string()),
                other => std::env::var(other).ok(),
            })?;
            config.data_path = path;
            Ok(config)
        }
        None => Ok(Config::from_env()?),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("notecards=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = load_config(cli.data_path)?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let state = Arc::new(AppState::new(config)?);
            let bind_addr = state.config.bind_addr();
            tracing::info!(data = %state.store.path().display(), "serving notes");

            let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
            tracing::info!("Notes server running at http://{}", bind_addr);
            axum::serve(listener, app(state)).await?;
        }
        Commands::List => {
            let config = load_config(cli.data_path)?;
            let store = NoteStore::open(&config.data_path)?;
            for note in store.newest_first()? {
                println!("{}", note);
            }
        }
        Commands::Render { url } => {
            let client = FeedClient::new(&url)?;
            let container = Arc::new(Mutex::new(Element::new("main").with_id("main")));
            let count = spawn_populate(Arc::new(client), container.clone()).await??;
            tracing::info!(cards = count, "rendered remote feed");
            println!("{}", container.lock().await.render());
        }
        Commands::Backup { dest } => {
            let config = load_config(cli.data_path)?;
            let store = NoteStore::open(&config.data_path)?;
            let dest = dest.unwrap_or_else(|| {
                config
                    .backups_dir()
                    .join(format!("data-{}.json", Local::now().format("%Y%m%d%H%M%S")))
            });
            let count = store.backup(&dest)?;
            println!("Backed up {} notes to {}", count, dest.display());
        }
    }

    Ok(())
}
