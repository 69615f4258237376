use std::fmt;

use crate::config::TfStateConfig;

/// Blob name of the bootstrap state inside the container.
pub const STATE_KEY: &str = "bootstrap.tfstate";

/// An `azurerm` backend block, as passed to `terraform init -backend-config`.
///
/// Values are written verbatim inside quotes. Nothing is escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub resource_group_name: String,
    pub storage_account_name: String,
    pub container_name: String,
    pub subscription_id: String,
}

impl BackendConfig {
    pub fn key(&self) -> &str {
        STATE_KEY
    }

    pub fn use_azuread_auth(&self) -> bool {
        true
    }

    /// Six column-aligned lines, no trailing newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl From<TfStateConfig> for BackendConfig {
    fn from(config: TfStateConfig) -> Self {
        Self {
            resource_group_name: config.resource_group,
            storage_account_name: config.storage_account,
            container_name: config.container,
            subscription_id: config.subscription_id,
        }
    }
}

impl fmt::Display for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "resource_group_name  = \"{}\"", self.resource_group_name)?;
        writeln!(f, "storage_account_name = \"{}\"", self.storage_account_name)?;
        writeln!(f, "container_name       = \"{}\"", self.container_name)?;
        writeln!(f, "key                  = \"{}\"", self.key())?;
        writeln!(f, "subscription_id      = \"{}\"", self.subscription_id)?;
        write!(f, "use_azuread_auth     = {}", self.use_azuread_auth())
    }
}
