//! Command implementations for the formkit CLI

pub mod list;
pub mod render;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use formkit::ContextStore;

/// Load a definition file into a fresh store.
pub fn load_store(path: &Path) -> Result<ContextStore> {
    let store = ContextStore::new();
    store
        .load_file(path)
        .with_context(|| format!("Failed to load wrapper definitions from {}", path.display()))?;
    Ok(store)
}
