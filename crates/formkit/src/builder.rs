/*
 * builder.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Tree construction for wrappers.
//!
//! The builder records an ordered list of nodes. Nested groups get a fresh
//! builder for their body, so the shape of the closures mirrors the shape of
//! the resulting tree:
//!
//! ```
//! use formkit::{Builder, LeafOptions, WrapperOptions};
//!
//! let mut b = Builder::new();
//! b.use_component("label_input");
//! b.use_with("hint", LeafOptions::new().wrap_with(WrapperOptions::new().tag("span").class("hint")));
//! b.wrapper(WrapperOptions::new().tag("span").class("error"), |b| {
//!     b.use_component("error");
//! });
//! assert_eq!(b.to_vec().len(), 3);
//! ```

use formkit_markup::Attributes;

use crate::node::{GroupNode, LeafRef, WrapperNode};

/// Tag used for groups and wrappers that do not name one.
pub const DEFAULT_TAG: &str = "div";

/// Options for a wrapper or a nested group.
///
/// Without [`WrapperOptions::tag`] or [`WrapperOptions::no_tag`], wrappers
/// and nested groups get [`DEFAULT_TAG`] while a `wrap_with` group is
/// tagless. `error_class`, `hint_class` and `valid_class` only take effect
/// on the root of a wrapper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrapperOptions {
    pub(crate) name: Option<String>,
    pub(crate) tag: Option<Option<String>>,
    pub(crate) attributes: Attributes,
    pub(crate) error_class: Option<String>,
    pub(crate) hint_class: Option<String>,
    pub(crate) valid_class: Option<String>,
}

impl WrapperOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(Some(tag.into()));
        self
    }

    /// Make the group tagless: children are emitted without a wrapping element.
    pub fn no_tag(mut self) -> Self {
        self.tag = Some(None);
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.attributes.add_class(class);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Merge extra HTML attributes into the group's base attributes.
    pub fn html(mut self, attributes: &Attributes) -> Self {
        self.attributes.merge_from(attributes);
        self
    }

    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = Some(class.into());
        self
    }

    pub fn hint_class(mut self, class: impl Into<String>) -> Self {
        self.hint_class = Some(class.into());
        self
    }

    pub fn valid_class(mut self, class: impl Into<String>) -> Self {
        self.valid_class = Some(class.into());
        self
    }

    /// `default_tag` applies when neither `tag` nor `no_tag` was called.
    pub(crate) fn into_group(self, children: Vec<WrapperNode>, default_tag: Option<&str>) -> GroupNode {
        GroupNode {
            name: self.name,
            tag: self.tag.unwrap_or_else(|| default_tag.map(str::to_string)),
            attributes: self.attributes,
            children,
        }
    }
}

/// Options for a leaf component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeafOptions {
    pub(crate) options: Attributes,
    pub(crate) wrap_with: Option<WrapperOptions>,
}

impl LeafOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Option passed through to the component renderer.
    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.set(name, value);
        self
    }

    pub fn options(mut self, options: &Attributes) -> Self {
        self.options.merge_from(options);
        self
    }

    /// Wrap the leaf in its own single-child group named after the component.
    ///
    /// Equivalent to `wrapper_named(component, wrapper, |b| b.use_component(component))`
    /// when `wrapper` names a tag; without one the group is tagless.
    pub fn wrap_with(mut self, wrapper: WrapperOptions) -> Self {
        self.wrap_with = Some(wrapper);
        self
    }
}

/// Records wrapper nodes in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    nodes: Vec<WrapperNode>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component that is always attempted.
    pub fn use_component(&mut self, name: impl Into<String>) -> &mut Self {
        self.use_with(name, LeafOptions::new())
    }

    pub fn use_with(&mut self, name: impl Into<String>, options: LeafOptions) -> &mut Self {
        self.push_leaf(name.into(), options, false)
    }

    /// Append a component that only renders when the field context enables it.
    pub fn optional(&mut self, name: impl Into<String>) -> &mut Self {
        self.optional_with(name, LeafOptions::new())
    }

    pub fn optional_with(&mut self, name: impl Into<String>, options: LeafOptions) -> &mut Self {
        self.push_leaf(name.into(), options, true)
    }

    /// Open a nested group and build its body with a fresh builder.
    pub fn wrapper<F>(&mut self, options: WrapperOptions, body: F) -> &mut Self
    where
        F: FnOnce(&mut Builder),
    {
        let mut nested = Builder::new();
        body(&mut nested);
        self.nodes
            .push(WrapperNode::Group(options.into_group(nested.into_nodes(), Some(DEFAULT_TAG))));
        self
    }

    /// Like [`Builder::wrapper`], naming the group so it can be targeted by
    /// per-render overrides and toggles.
    pub fn wrapper_named<F>(
        &mut self,
        name: impl Into<String>,
        options: WrapperOptions,
        body: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut Builder),
    {
        self.wrapper(options.name(name), body)
    }

    /// Append an already-built node.
    pub fn push(&mut self, node: WrapperNode) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// The nodes recorded so far, in order.
    pub fn to_vec(&self) -> Vec<WrapperNode> {
        self.nodes.clone()
    }

    pub fn into_nodes(self) -> Vec<WrapperNode> {
        self.nodes
    }

    fn push_leaf(&mut self, component: String, options: LeafOptions, optional: bool) -> &mut Self {
        let LeafOptions { options, wrap_with } = options;
        let leaf = WrapperNode::Leaf(LeafRef {
            component: component.clone(),
            options,
            optional,
        });
        let node = match wrap_with {
            Some(wrapper) => WrapperNode::Group(wrapper.name(component).into_group(vec![leaf], None)),
            None => leaf,
        };
        self.nodes.push(node);
        self
    }
}
