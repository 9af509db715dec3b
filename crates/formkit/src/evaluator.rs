/*
 * evaluator.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Wrapper evaluation.
//!
//! Rendering is a single recursive walk over the tree. Every group renders
//! its children in declaration order, keeps the non-empty results and
//! either wraps them in its tag or, when nothing is left, renders empty
//! itself. Emptiness therefore propagates upward: a hint group whose hint
//! is missing disappears entirely instead of leaving an empty element.

use formkit_markup::{Attributes, Markup, tag};

use crate::config::Config;
use crate::error::FormResult;
use crate::field::FieldContext;
use crate::node::{GroupNode, LeafRef, WrapperNode};
use crate::wrapper::{ROOT_NAMESPACE, Wrapper};

impl Wrapper {
    /// Render this wrapper for one field.
    ///
    /// Leaves resolve through `config`'s component registry.
    pub fn render(&self, field: &FieldContext, config: &Config) -> FormResult<Markup> {
        tracing::trace!(wrapper = self.name(), field = field.attribute(), "Rendering wrapper");

        let content = evaluate(self.children(), field, config)?;
        if content.is_empty() || field.is_disabled(ROOT_NAMESPACE) {
            return Ok(content);
        }

        let root = self.root();
        let Some(tag_name) = effective_tag(root, field) else {
            return Ok(content);
        };

        let mut attributes = root.attributes.clone();
        for class in config.additional_classes_for("wrapper", || field.additional_classes().to_vec()) {
            attributes.add_class(&class);
        }
        let state_classes = [
            (self.error_class(), field.has_errors()),
            (self.hint_class(), field.has_hint()),
            (self.valid_class(), field.is_valid()),
        ];
        for (class, applies) in state_classes {
            if let (Some(class), true) = (class, applies) {
                attributes.add_class(class);
            }
        }

        Ok(wrap(tag_name, &attributes, ROOT_NAMESPACE, field, content))
    }

    /// Render only the sub-tree for `name`.
    ///
    /// When the wrapper does not mention `name`, the component is rendered
    /// bare, as if it were a leaf of its own.
    pub fn render_component(
        &self,
        name: &str,
        field: &FieldContext,
        config: &Config,
    ) -> FormResult<Markup> {
        match self.find(name) {
            Some(node) => evaluate_node(node, field, config),
            None => render_leaf(&LeafRef::new(name), field, config),
        }
    }
}

impl GroupNode {
    /// Render this group on its own.
    pub fn render(&self, field: &FieldContext, config: &Config) -> FormResult<Markup> {
        render_group(self, field, config)
    }
}

/// Evaluate a sequence of nodes, concatenating the non-empty results in order.
pub fn evaluate(nodes: &[WrapperNode], field: &FieldContext, config: &Config) -> FormResult<Markup> {
    let mut content = Markup::empty();
    for node in nodes {
        let rendered = evaluate_node(node, field, config)?;
        content.push(&rendered);
    }
    Ok(content)
}

/// Evaluate a single node.
pub fn evaluate_node(node: &WrapperNode, field: &FieldContext, config: &Config) -> FormResult<Markup> {
    match node {
        WrapperNode::Leaf(leaf) => render_leaf(leaf, field, config),
        WrapperNode::Group(group) => render_group(group, field, config),
    }
}

fn render_leaf(leaf: &LeafRef, field: &FieldContext, config: &Config) -> FormResult<Markup> {
    let name = leaf.component.as_str();
    if leaf.optional && !field.is_enabled(name) {
        return Ok(Markup::empty());
    }
    if field.is_disabled(name) {
        return Ok(Markup::empty());
    }
    config
        .components()
        .get(name)?
        .render(field, &leaf.options, config)
}

fn render_group(group: &GroupNode, field: &FieldContext, config: &Config) -> FormResult<Markup> {
    let namespace = group.name.as_deref();
    if namespace.is_some_and(|name| field.is_disabled(name)) {
        return Ok(Markup::empty());
    }

    let content = evaluate(&group.children, field, config)?;
    if content.is_empty() {
        return Ok(content);
    }

    match effective_tag(group, field) {
        Some(tag_name) => Ok(match namespace {
            Some(name) => wrap(tag_name, &group.attributes, name, field, content),
            None => tag(tag_name, &group.attributes, content),
        }),
        None => Ok(content),
    }
}

/// The per-render tag override for the group's namespace, else the node's tag.
fn effective_tag<'a>(group: &'a GroupNode, field: &'a FieldContext) -> Option<&'a str> {
    group
        .name
        .as_deref()
        .and_then(|name| field.tag(name))
        .unwrap_or(group.tag.as_deref())
}

fn wrap(
    tag_name: &str,
    attributes: &Attributes,
    namespace: &str,
    field: &FieldContext,
    content: Markup,
) -> Markup {
    match field.html(namespace) {
        Some(overrides) => tag(tag_name, &attributes.merge(overrides), content),
        None => tag(tag_name, attributes, content),
    }
}
