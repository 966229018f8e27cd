pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "review-widget")]
#[command(about = "Fetch, summarize and render customer reviews", long_about = None)]
pub struct Cli {
    /// Content API key
    #[arg(long, env = "REVIEW_WIDGET_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Config file (default: ~/.config/review-widget/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the widget into a standalone HTML page
    Render {
        /// Entity whose reviews to show
        #[arg(short, long)]
        entity_id: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the rendered page in the browser
        #[arg(long, requires = "output")]
        open: bool,
    },
    /// Print review count, average rating and reviews
    Summary {
        #[arg(short, long)]
        entity_id: Option<String>,
    },
    /// Open the page where customers leave a review
    Review {
        #[arg(short, long)]
        entity_id: Option<String>,

        /// Open the first-party review page instead
        #[arg(long)]
        first_party: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "review-widget",
            "render",
            "--entity-id",
            "acme-1",
            "--output",
            "page.html",
            "--open",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                entity_id,
                output,
                open,
            } => {
                assert_eq!(entity_id.as_deref(), Some("acme-1"));
                assert_eq!(output, Some(PathBuf::from("page.html")));
                assert!(open);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_open_requires_output() {
        assert!(Cli::try_parse_from(["review-widget", "render", "--open"]).is_err());
    }

    #[test]
    fn test_global_api_key_after_subcommand() {
        let cli = Cli::try_parse_from(["review-widget", "review", "--first-party", "--api-key", "k"]).unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert!(matches!(cli.command, Commands::Review { first_party: true, .. }));
    }
}
