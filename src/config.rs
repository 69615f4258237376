//! Bootstrap configuration loading.
//!
//! The bootstrap document is YAML with a `tfstate` mapping describing where
//! Terraform keeps its remote state:
//!
//! ```yaml
//! tfstate:
//!   resource_group: rg-tfstate
//!   storage_account: sttfstate
//!   container: tfstate
//!   subscription_id: 00000000-0000-0000-0000-000000000000
//! ```

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::GenerationError;

pub const TFSTATE_SECTION: &str = "tfstate";

/// Required keys of the `tfstate` section, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = [
    "resource_group",
    "storage_account",
    "container",
    "subscription_id",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TfStateConfig {
    pub resource_group: String,
    pub storage_account: String,
    pub container: String,
    pub subscription_id: String,
}

/// Read and parse the bootstrap document at `path`.
pub fn load(path: &Path) -> Result<TfStateConfig, GenerationError> {
    let source =
        std::fs::read_to_string(path).map_err(|source| GenerationError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let config = parse(&source, path)?;
    tracing::debug!(path = %path.display(), "bootstrap config loaded");
    Ok(config)
}

/// Parse a bootstrap document held in memory. `path` only labels errors.
///
/// Missing keys are reported one at a time, first in `REQUIRED_FIELDS` order.
pub fn parse(source: &str, path: &Path) -> Result<TfStateConfig, GenerationError> {
    let document: Value =
        serde_yaml::from_str(source).map_err(|source| GenerationError::ConfigMalformed {
            path: path.to_path_buf(),
            source,
        })?;

    let section = document
        .get(TFSTATE_SECTION)
        .and_then(Value::as_mapping)
        .ok_or(GenerationError::MissingSection {
            section: TFSTATE_SECTION,
        })?;

    let [resource_group, storage_account, container, subscription_id] =
        REQUIRED_FIELDS.map(|field| required_field(section, field));

    Ok(TfStateConfig {
        resource_group: resource_group?,
        storage_account: storage_account?,
        container: container?,
        subscription_id: subscription_id?,
    })
}

fn required_field(section: &Mapping, field: &'static str) -> Result<String, GenerationError> {
    let value = section.get(field).unwrap_or(&Value::Null);

    scalar_text(value).map_err(|found| match found {
        None => GenerationError::MissingField {
            section: TFSTATE_SECTION,
            field,
        },
        Some(found) => GenerationError::InvalidField {
            section: TFSTATE_SECTION,
            field,
            found,
        },
    })
}

/// Text of a scalar as it appears in YAML. `Err(None)` for null,
/// `Err(Some(kind))` for collections.
fn scalar_text(value: &Value) -> Result<String, Option<&'static str>> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null => Err(None),
        Value::Mapping(_) => Err(Some("a mapping")),
        Value::Sequence(_) => Err(Some("a sequence")),
    }
}
