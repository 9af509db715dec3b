/*
 * wrapper.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Named, immutable wrapper trees.

use crate::builder::{Builder, DEFAULT_TAG, WrapperOptions};
use crate::node::{GroupNode, WrapperNode};

/// Namespace of a wrapper's root group.
///
/// Per-render overrides keyed by this name (`html`, `tag`, `disable`) target
/// the outermost element.
pub const ROOT_NAMESPACE: &str = "wrapper";

/// A complete layout definition for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Wrapper {
    name: String,
    root: GroupNode,
    error_class: Option<String>,
    hint_class: Option<String>,
    valid_class: Option<String>,
}

impl Wrapper {
    /// Assemble a wrapper from finished nodes.
    ///
    /// The root is always named [`ROOT_NAMESPACE`]; any name in `options` is
    /// ignored.
    pub fn new(name: impl Into<String>, children: Vec<WrapperNode>, options: WrapperOptions) -> Self {
        let error_class = options.error_class.clone();
        let hint_class = options.hint_class.clone();
        let valid_class = options.valid_class.clone();
        let root = options
            .name(ROOT_NAMESPACE)
            .into_group(children, Some(DEFAULT_TAG));
        Self {
            name: name.into(),
            root,
            error_class,
            hint_class,
            valid_class,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &GroupNode {
        &self.root
    }

    pub fn children(&self) -> &[WrapperNode] {
        &self.root.children
    }

    /// Class added to the root when the field has errors.
    pub fn error_class(&self) -> Option<&str> {
        self.error_class.as_deref()
    }

    /// Class added to the root when the field has a hint.
    pub fn hint_class(&self) -> Option<&str> {
        self.hint_class.as_deref()
    }

    /// Class added to the root when the field was validated without errors.
    pub fn valid_class(&self) -> Option<&str> {
        self.valid_class.as_deref()
    }

    /// Find the sub-tree for a namespace. `"wrapper"` is never matched here;
    /// use [`Wrapper::root`] for the whole tree.
    pub fn find(&self, name: &str) -> Option<&WrapperNode> {
        self.root.find_child(name)
    }

    /// Human-readable indented description of the tree.
    pub fn outline(&self) -> String {
        let mut out = format!("{}:\n", self.name);
        self.root.write_outline(1, &mut out);
        out
    }
}

/// Build a top-level wrapper.
///
/// The root tag defaults to `div` unless `options` names another one or is
/// made tagless.
pub fn build<F>(name: impl Into<String>, options: WrapperOptions, body: F) -> Wrapper
where
    F: FnOnce(&mut Builder),
{
    let mut builder = Builder::new();
    body(&mut builder);
    Wrapper::new(name, builder.into_nodes(), options)
}
