use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::is_yaml;

use super::Result;

/// Reads a JSON document, or YAML when the extension is `.yaml`/`.yml`.
pub(crate) fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)?;
    let document = if is_yaml(path) {
        serde_yaml::from_str::<T>(&raw)?
    } else {
        serde_json::from_str::<T>(&raw)?
    };
    Ok(document)
}
