use biometrics_server::{logging, ServerConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "biometrics-server")]
#[command(about = "Patient records API with derived health metrics", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override SQLite database path
    #[arg(long)]
    database: Option<PathBuf>,

    /// Override listen port
    #[arg(long)]
    port: Option<u16>,

    /// Default log level (debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_with_level(&cli.log_level);

    let config = match &cli.config {
        Some(path) => ServerConfig::load_from(path)?,
        None => ServerConfig::default(),
    }
    .with_overrides(cli.database, cli.port);

    biometrics_server::serve(config).await
}
