// ============================================================
// Layer 6 — Application Configuration
// ============================================================
// Runtime settings, stored as JSON so a deployment can keep one
// file next to the binary:
//
//   {
//     "datasets_dir":   "dataSets",
//     "cache_capacity": 16,
//     "shuffle_seed":   null,
//     "metrics_dir":    "metrics"
//   }
//
// Every field is optional in the file; missing ones take the
// defaults below. CLI flags override whatever the file says.
//
// Reference: serde crate documentation (#[serde(default)])
//            Rust Book §9 (Error Handling with anyhow)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::data::registry::DEFAULT_CAPACITY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the CSV datasets
    pub datasets_dir: String,

    /// How many datasets the registry keeps in memory
    pub cache_capacity: usize,

    /// Fixed seed for dataset shuffles and initial weights
    pub shuffle_seed: Option<u64>,

    /// Where per-epoch metrics are appended; None disables the log
    pub metrics_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            datasets_dir:   "dataSets".to_string(),
            cache_capacity: DEFAULT_CAPACITY,
            shuffle_seed:   None,
            metrics_dir:    None,
        }
    }
}

impl AppConfig {
    /// Read a config file, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", path.display()))?;

        tracing::debug!("Loaded config from '{}': {:?}", path.display(), cfg);
        Ok(cfg)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_gives_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.datasets_dir, "dataSets");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("netlab.json");
        fs::write(&path, r#"{"cache_capacity": 3, "shuffle_seed": 9}"#).unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.cache_capacity, 3);
        assert_eq!(cfg.shuffle_seed, Some(9));
        assert_eq!(cfg.datasets_dir, "dataSets");
    }

    #[test]
    fn test_wrong_value_type_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("netlab.json");
        fs::write(&path, r#"{"cache_capacity": "lots"}"#).unwrap();
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid config"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/no/such/netlab.json"))).is_err());
    }
}
