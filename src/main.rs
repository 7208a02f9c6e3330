use sitewright::commands;
use sitewright::config::cli::Command;
use sitewright::config::Config;
use sitewright::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::new()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &config.args.command {
        Command::Serve(args) => commands::serve(&config, args).await,
        Command::Admin(args) => commands::admin(&config, args).await,
    }
}
