mod commands;
mod output;

use anyhow::Result;
use blog_admin_lib::{config, AdminClient};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "blog-admin")]
#[command(about = "Manage blog posts and categories through the blog REST API")]
struct Cli {
    /// Output format: table, markdown or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL. Overrides BLOG_API_BASE.
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List, show, create, update or delete posts
    Posts(commands::posts::PostsArgs),
    /// List, show, create, update or delete categories
    Categories(commands::categories::CategoriesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("blog_admin_lib=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let config = config::from_lookup(|key| match (key, &cli.api_base) {
        (config::BASE_URL_VAR, Some(base)) => Some(base.clone()),
        _ => std::env::var(key).ok(),
    })?;
    let client = AdminClient::new(config)?;
    tracing::debug!("Using API at {}", client.api().base_url());

    match &cli.command {
        Commands::Posts(args) => commands::posts::run(args, &client, &format).await?,
        Commands::Categories(args) => commands::categories::run(args, &client, &format).await?,
    }

    Ok(())
}
