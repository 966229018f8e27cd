use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use review_widget::app::AppContext;
use review_widget::cli::{commands, Cli, Commands};
use review_widget::config::Config;
use review_widget::widget::{Launcher, SystemLauncher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; rendered pages may go to stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(api_key) = cli.api_key {
        config.api.api_key = api_key;
    }

    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Render {
            entity_id,
            output,
            open,
        } => {
            let launcher = open.then_some(&SystemLauncher as &dyn Launcher);
            commands::render_page(&ctx, entity_id.as_deref(), output.as_deref(), launcher).await?;
        }
        Commands::Summary { entity_id } => {
            commands::print_summary(&ctx, entity_id.as_deref()).await?;
        }
        Commands::Review {
            entity_id,
            first_party,
        } => {
            commands::open_review_page(&ctx, entity_id.as_deref(), first_party, &SystemLauncher)
                .await?;
        }
    }

    Ok(())
}
