/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Configuration-driven form field wrappers.
//!
//! A *wrapper* is a named tree describing the markup around one form field:
//! which components (label, input, hint, error, ...) appear, in what order,
//! and inside which elements. Wrappers are declared once per configuration
//! with a [`Builder`] (or loaded from YAML through [`Definitions`]) and
//! rendered for each field from a [`FieldContext`].
//!
//! Groups that end up with no content are dropped entirely, so a field
//! without a hint never emits an empty `<span class="hint">`.
//!
//! # Example
//!
//! ```
//! use formkit::{Config, FieldContext, LeafOptions, Markup, WrapperOptions};
//!
//! let mut config = Config::new();
//! config.wrappers("vertical", WrapperOptions::new().class("form-group"), |b| {
//!     b.use_component("input");
//!     b.use_with(
//!         "hint",
//!         LeafOptions::new().wrap_with(WrapperOptions::new().tag("span").class("hint")),
//!     );
//! });
//!
//! let field = FieldContext::new("email")
//!     .with_slot("input", Markup::raw("<input name=\"email\">"))
//!     .with_hint("We never share it");
//!
//! let html = config.render(Some("vertical"), &field).unwrap();
//! assert_eq!(
//!     html.as_str(),
//!     "<div class=\"form-group\"><input name=\"email\">\
//!      <span class=\"hint\">We never share it</span></div>"
//! );
//! ```
//!
//! # Contexts
//!
//! Applications with more than one form style keep several configurations
//! in a [`ContextStore`] and activate one per request scope with
//! [`activate`]. The returned guard restores the previous configuration when
//! dropped.

pub mod builder;
pub mod component;
pub mod config;
pub mod definition;
pub mod error;
pub mod evaluator;
pub mod field;
pub mod node;
pub mod store;
pub mod wrapper;

pub use builder::{Builder, DEFAULT_TAG, LeafOptions, WrapperOptions};
pub use component::{
    Component, ComponentRegistry, INPUT_ATTRIBUTE_COMPONENTS, REQUIRED_MARKER, SlotComponent,
};
pub use config::{BooleanStyle, Config, DEFAULT_WRAPPER, ErrorMethod, FieldErrorProc, LabelText};
pub use definition::{ComponentDefinition, ContextDefinition, Definitions, GroupDefinition};
pub use error::{FormError, FormResult};
pub use evaluator::{evaluate, evaluate_node};
pub use field::FieldContext;
pub use formkit_markup::{Attributes, Markup};
pub use node::{GroupNode, LeafRef, WrapperNode};
pub use store::{
    ActiveConfig, ContextStore, DEFAULT_CONTEXT, activate, current, is_configured, render, setup,
    store, with_current, wrapper,
};
pub use wrapper::{ROOT_NAMESPACE, Wrapper, build};
