use std::path::PathBuf;

use clap::Parser;

use tfbackend::{DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH};

/// Generate a Terraform backend.hcl from the bootstrap config.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Bootstrap YAML file, relative to the current directory
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Backend file to write
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}
