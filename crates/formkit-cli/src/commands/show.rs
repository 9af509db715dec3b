/*
 * show.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! `formkit show`: wrapper trees as an outline.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute(config: &Path, context: &str, wrapper: Option<&str>) -> Result<()> {
    let store = super::load_store(config)?;
    let config = store.get(context)?;

    match wrapper {
        Some(name) => {
            let wrapper = config
                .wrapper(name)
                .with_context(|| format!("in context {}", context))?;
            print!("{}", wrapper.outline());
        }
        None => {
            for wrapper in config.wrapper_mapping().values() {
                print!("{}", wrapper.outline());
            }
        }
    }
    Ok(())
}
