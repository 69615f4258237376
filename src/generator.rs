use std::path::Path;

use crate::config;
use crate::error::GenerationError;
use crate::terraform::BackendConfig;

pub const DEFAULT_CONFIG_PATH: &str = "../../configs/bootstrap.yaml";
pub const DEFAULT_OUTPUT_PATH: &str = "backend.hcl";

/// Render `backend.hcl` from the bootstrap config and print a summary to stdout.
pub fn generate(config_path: &Path, output_path: &Path) -> Result<(), GenerationError> {
    let backend = write_backend(config_path, output_path)?;
    println!("{}", summary(config_path, output_path, &backend));
    Ok(())
}

/// Load, render and write without reporting.
///
/// The output file is opened only after the config has been fully validated,
/// so a failed load never touches an existing output file.
pub fn write_backend(
    config_path: &Path,
    output_path: &Path,
) -> Result<BackendConfig, GenerationError> {
    let backend = BackendConfig::from(config::load(config_path)?);
    let rendered = backend.render();

    std::fs::write(output_path, &rendered).map_err(|source| {
        GenerationError::OutputWriteFailed {
            path: output_path.to_path_buf(),
            source,
        }
    })?;

    tracing::info!(
        output = %output_path.display(),
        bytes = rendered.len(),
        "backend config written"
    );

    Ok(backend)
}

pub fn summary(config_path: &Path, output_path: &Path, backend: &BackendConfig) -> String {
    format!(
        " Generated {} from {}\nContents:\n{}",
        output_path.display(),
        config_path.display(),
        backend
    )
}
