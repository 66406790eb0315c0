//! CLI configuration resolution on top of `spooldash_config`.
//!
//! Loads the layered config and applies `GlobalOpts` flag overrides
//! (--base-url, --api-token, --company-id, --timeout). This is the
//! single boundary where CLI flags cross into core runtime config.

use spooldash_core::{InventoryConfig, InventoryStore};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use spooldash_config::{Config, config_path};

/// Load the layered config and fold in CLI flag overrides.
///
/// The flags also carry `env = "SIMPLYPRINT_…"` fallbacks in clap, so a
/// value set only in the environment arrives here too; figment reads the
/// same variables, making the override idempotent in that case.
pub fn effective_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut config = Config::load()?;

    if let Some(ref base_url) = global.base_url {
        config.api_base_url = base_url.clone();
    }
    if let Some(ref token) = global.api_token {
        config.api_token = Some(token.clone());
    }
    if let Some(ref company_id) = global.company_id {
        config.api_company_id = Some(company_id.clone());
    }
    if let Some(timeout) = global.timeout {
        config.timeout_secs = timeout;
    }

    Ok(config)
}

/// Validate the effective config into runtime form.
pub fn resolve(global: &GlobalOpts) -> Result<InventoryConfig, CliError> {
    Ok(effective_config(global)?.resolve()?)
}

/// Build the inventory store (config, validation, HTTP client) in one go.
pub fn build_store(global: &GlobalOpts) -> Result<InventoryStore, CliError> {
    let runtime = resolve(global)?;
    Ok(InventoryStore::new(&runtime)?)
}
