use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options captured by a processor at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProcessorOptions {
    /// Extensions handled in addition to `.ts` and `.tsx`
    pub extensions: Vec<String>,
}

impl ProcessorOptions {
    /// Read options from a host's JSON plugin settings
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("doctext.toml")
}

/// Load options from `path`, or from `doctext.toml` in the working directory.
///
/// A missing file is not an error.
pub fn load_config(path: Option<&Path>) -> Result<Option<ProcessorOptions>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let options: ProcessorOptions = toml::from_str(&contents)?;
    tracing::debug!(path = %path.display(), extensions = ?options.extensions, "Loaded config");
    Ok(Some(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let options = ProcessorOptions::from_json(json!({"extensions": [".mts", ".cts"]})).unwrap();
        assert_eq!(options.extensions, vec![".mts", ".cts"]);

        assert_eq!(ProcessorOptions::from_json(json!({})).unwrap(), ProcessorOptions::default());
        assert_eq!(ProcessorOptions::from_json(serde_json::Value::Null).unwrap(), ProcessorOptions::default());
        assert!(ProcessorOptions::from_json(json!({"extensions": ".mts"})).is_err());
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doctext.toml");
        std::fs::write(&path, "extensions = [\".mts\"]\n").unwrap();

        let options = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(options.extensions, vec![".mts"]);
    }

    #[test]
    fn test_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).unwrap().is_none());
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doctext.toml");
        std::fs::write(&path, "extensions = 3\n").unwrap();

        assert!(matches!(load_config(Some(&path)), Err(crate::Error::Config(_))));
    }
}
