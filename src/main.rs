use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine::theme::{registry, ThemeId, ThemeStore};
use vitrine::{App, Config};

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cap the number of products fetched from the catalog
    #[arg(short, long)]
    limit: Option<u32>,

    /// Start on a specific theme for this session (theme1, theme2, theme3)
    #[arg(short, long)]
    theme: Option<ThemeId>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available themes
    Themes,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Themes) => {
            let store = ThemeStore::initialize(Config::config_path().ok());
            for theme in registry::entries() {
                let marker = if theme.id == store.active_id() { "*" } else { " " };
                println!("{} {:<8} {}", marker, theme.id.storage_id(), theme.name);
            }
        }
        None => {
            // Launch TUI
            let mut store = ThemeStore::initialize(Config::config_path().ok());
            if let Some(id) = cli.theme {
                store.activate(id);
            }
            let mut app = App::new(store, cli.limit)?;
            app.run().await?;
        }
    }

    Ok(())
}
