use std::fs;
use std::path::Path;

use super::{Result, Settings};

pub(crate) fn is_yaml(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    matches!(extension.as_str(), "yaml" | "yml")
}

pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let settings = if is_yaml(path) {
        serde_yaml::from_str::<Settings>(&raw)?
    } else {
        serde_json::from_str::<Settings>(&raw)?
    };
    settings.validate()?;
    log::info!("loaded settings from {}", path.display());
    Ok(settings)
}

pub fn save_settings(path: impl AsRef<Path>, settings: &Settings) -> Result<()> {
    let path = path.as_ref();
    settings.validate()?;
    let serialized = if is_yaml(path) {
        serde_yaml::to_string(settings)?
    } else {
        serde_json::to_string_pretty(settings)?
    };
    fs::write(path, serialized)?;
    Ok(())
}
