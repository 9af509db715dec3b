/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Wrapper tree nodes.
//!
//! A wrapper is a tree of two node kinds: leaves that reference a registered
//! component by name, and groups that batch children under an optional tag.
//! Trees are built once by the [`Builder`](crate::builder::Builder) and only
//! read afterwards.

use formkit_markup::Attributes;

/// A node in a wrapper tree.
#[derive(Debug, Clone, PartialEq)]
pub enum WrapperNode {
    /// Reference to a registered component (label, input, hint, ...).
    Leaf(LeafRef),

    /// Nested group of children, optionally wrapped in a tag.
    Group(GroupNode),
}

/// Reference to a registered leaf component.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafRef {
    /// Component name, also the namespace used for per-render toggles.
    pub component: String,
    /// Options handed to the component renderer.
    pub options: Attributes,
    /// Only rendered when the field context explicitly enables it.
    pub optional: bool,
}

/// A group of children rendered together.
///
/// When every child renders empty, the group renders empty too: no tag, no
/// attributes, no whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    /// Namespace for per-render overrides (`html`, `tag`, toggles).
    pub name: Option<String>,
    /// Wrapping tag; `None` emits the children unwrapped.
    pub tag: Option<String>,
    /// Base attributes of the wrapping tag.
    pub attributes: Attributes,
    /// Children in declaration order.
    pub children: Vec<WrapperNode>,
}

impl WrapperNode {
    /// The namespace of this node: the component name for leaves, the group
    /// name (if any) for groups.
    pub fn name(&self) -> Option<&str> {
        match self {
            WrapperNode::Leaf(leaf) => Some(&leaf.component),
            WrapperNode::Group(group) => group.name.as_deref(),
        }
    }

    /// Depth-first search for the first node whose namespace is `name`.
    pub fn find(&self, name: &str) -> Option<&WrapperNode> {
        if self.name() == Some(name) {
            return Some(self);
        }
        match self {
            WrapperNode::Leaf(_) => None,
            WrapperNode::Group(group) => group.find_child(name),
        }
    }

    fn write_outline(&self, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match self {
            WrapperNode::Leaf(leaf) => {
                out.push_str(&indent);
                out.push_str(if leaf.optional { "optional " } else { "use " });
                out.push_str(&leaf.component);
                push_attributes(&leaf.options, out);
                out.push('\n');
            }
            WrapperNode::Group(group) => group.write_outline(depth, out),
        }
    }
}

impl LeafRef {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            options: Attributes::new(),
            optional: false,
        }
    }
}

impl GroupNode {
    /// A tagless, unnamed group.
    pub fn tagless(children: Vec<WrapperNode>) -> Self {
        Self {
            name: None,
            tag: None,
            attributes: Attributes::new(),
            children,
        }
    }

    /// Search the children (not the group itself).
    pub fn find_child(&self, name: &str) -> Option<&WrapperNode> {
        self.children.iter().find_map(|child| child.find(name))
    }

    pub(crate) fn write_outline(&self, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str("wrapper");
        if let Some(name) = &self.name {
            out.push(' ');
            out.push_str(name);
        }
        match &self.tag {
            Some(tag) => {
                out.push_str(" <");
                out.push_str(tag);
                out.push('>');
            }
            None => out.push_str(" (no tag)"),
        }
        push_attributes(&self.attributes, out);
        out.push('\n');
        for child in &self.children {
            child.write_outline(depth + 1, out);
        }
    }
}

fn push_attributes(attributes: &Attributes, out: &mut String) {
    for (key, value) in attributes.iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
