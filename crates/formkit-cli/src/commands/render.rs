/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Render command implementation
 */

//! `formkit render`: render one field and print the markup.
//!
//! The field is assembled from the command line. Component markup that
//! formkit does not produce itself (most importantly the input control) is
//! passed in with `--slot NAME=MARKUP` and inserted verbatim.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use formkit::{ContextStore, FieldContext, Markup};
use tracing::debug;

/// Arguments for the render command
#[derive(Debug, Default)]
pub struct RenderArgs {
    pub config: Option<PathBuf>,
    pub context: String,
    pub wrapper: Option<String>,
    pub attribute: String,
    pub input_type: Option<String>,
    /// `NAME=MARKUP` pairs
    pub slots: Vec<String>,
    pub label: Option<String>,
    pub required: bool,
    pub hint: Option<String>,
    pub errors: Vec<String>,
    pub validated: bool,
    pub enable: Vec<String>,
    pub disable: Vec<String>,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let store = match &args.config {
        Some(path) => super::load_store(path)?,
        None => ContextStore::new(),
    };
    println!("{}", render(&store, &args)?);
    Ok(())
}

fn render(store: &ContextStore, args: &RenderArgs) -> Result<Markup> {
    let field = build_field(args)?;
    debug!(context = %args.context, field = field.attribute(), "Rendering field");

    let _active = store.activate(&args.context)?;
    let html = formkit::render(args.wrapper.as_deref(), &field)
        .with_context(|| format!("Failed to render field {}", field.attribute()))?;
    Ok(html)
}

fn build_field(args: &RenderArgs) -> Result<FieldContext> {
    let mut field = FieldContext::new(&args.attribute)
        .required(args.required)
        .validated(args.validated);

    if let Some(input_type) = &args.input_type {
        field = field.with_input_type(input_type);
    }
    if let Some(label) = &args.label {
        field = field.with_label(label);
    }
    if let Some(hint) = &args.hint {
        field = field.with_hint(hint);
    }
    for message in &args.errors {
        field = field.with_error(message);
    }
    for slot in &args.slots {
        let (name, markup) = parse_slot(slot)?;
        field = field.with_slot(name, Markup::raw(markup));
    }
    for name in &args.enable {
        field = field.enable(name);
    }
    for name in &args.disable {
        field = field.disable(name);
    }
    Ok(field)
}

/// Split `NAME=MARKUP` at the first `=`.
fn parse_slot(slot: &str) -> Result<(&str, &str)> {
    match slot.split_once('=') {
        Some((name, markup)) if !name.is_empty() => Ok((name, markup)),
        _ => bail!("Invalid slot {:?}: expected NAME=MARKUP", slot),
    }
}
