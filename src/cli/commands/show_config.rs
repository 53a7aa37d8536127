use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::config::Settings;

/// Prints the effective configuration as pretty JSON.
pub fn show_config(config_file: Option<&Path>) -> Result<()> {
    let settings = Settings::load(config_file)?;
    debug!("Printing effective configuration");
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
