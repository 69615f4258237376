mod cli;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tracing::debug!(
        config = %cli.config.display(),
        output = %cli.output.display(),
        "generating backend config"
    );

    if let Err(err) = tfbackend::generate(&cli.config, &cli.output) {
        eprintln!(" Error: {}", err);
        std::process::exit(1);
    }

    Ok(())
}
