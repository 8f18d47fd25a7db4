use clap::Parser;
use nutriscan::{app, cli, config, error};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Scan { image, format } => {
            app::run_scan(&config, &image, format).await?;
        }

        Commands::Interactive => {
            app::run_interactive(&config).await?;
        }

        Commands::Config { set_api_key, set_model, show } => {
            app::run_config(config, set_api_key, set_model, show)?;
        }
    }

    Ok(())
}

/// RUST_LOG があればそれを優先、なければ -v で debug
fn init_logging(verbose: bool) {
    let default = if verbose { "nutriscan=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
