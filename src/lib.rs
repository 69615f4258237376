//! tfbackend - Terraform backend bootstrapper
//!
//! Renders an `azurerm` `backend.hcl` from the `tfstate` section of a bootstrap YAML file.

pub mod config;
pub mod generator;
pub mod terraform;

mod error;

pub use config::TfStateConfig;
pub use error::GenerationError;
pub use generator::{DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH, generate, write_backend};
pub use terraform::BackendConfig;
