// ============================================================
// Layer 6 — Network Store
// ============================================================
// Saves trained architectures as compact text files and reads
// them back, so a network trained in one invocation can be run
// in the next:
//
//   netlab train --training-set xor.csv --save-to xor.net
//   netlab run --network-file xor.net --inputs "[1, 0]"
//
// The file holds exactly the compact text the codec produces;
// loading returns the raw text so it goes through the same
// decode path as text passed on the command line.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};

pub struct NetworkStore;

impl NetworkStore {
    /// Write compact network text (as returned in a training
    /// response), creating parent directories.
    pub fn save(path: &Path, text: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }
        fs::write(path, text)
            .with_context(|| format!("Cannot save network to '{}'", path.display()))?;
        tracing::info!("Saved network to '{}'", path.display());
        Ok(())
    }

    /// Read the stored network text.
    pub fn load_text(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Cannot read network from '{}'", path.display()))
    }
}
