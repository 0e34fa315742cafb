//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::Result;
use std::path::Path;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG: &str = "vocli.yaml";

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<VocliConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config: VocliConfig = serde_yaml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Load the given config file, or `vocli.yaml` if it exists, or the defaults
pub fn load_or_default(path: Option<&Path>) -> Result<VocliConfig> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG).exists() => load_config(Path::new(DEFAULT_CONFIG)),
        None => Ok(VocliConfig::default()),
    }
}
