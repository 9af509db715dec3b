/*
 * list.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! `formkit list`: contexts and their wrappers.

use std::path::Path;

use anyhow::Result;
use formkit::ContextStore;

pub fn execute(config: &Path) -> Result<()> {
    let store = super::load_store(config)?;
    print!("{}", listing(&store)?);
    Ok(())
}

fn listing(store: &ContextStore) -> Result<String> {
    let mut out = String::new();
    for name in store.context_names() {
        let config = store.get(&name)?;
        out.push_str(&name);
        out.push('\n');
        for (wrapper, _) in config.wrapper_mapping() {
            out.push_str("  ");
            out.push_str(wrapper);
            if *wrapper == config.default_wrapper {
                out.push_str(" (default)");
            }
            out.push('\n');
        }
    }
    Ok(out)
}
