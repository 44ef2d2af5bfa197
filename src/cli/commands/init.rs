use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Write the default configuration, never replacing an existing file.
pub fn handle(config_path: &Path) -> AppResult<()> {
    if config_path.exists() {
        warning(format!(
            "Config file already exists: {}",
            config_path.display()
        ));
        return Ok(());
    }

    Config::init(config_path)?;
    success(format!("Config file: {}", config_path.display()));
    Ok(())
}
