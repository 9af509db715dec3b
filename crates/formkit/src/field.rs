/*
 * field.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Per-render field context.
//!
//! A [`FieldContext`] carries everything one render call needs to know about
//! a single field: already-rendered leaf outputs (slots), the raw text that
//! built-in components format (label, hint, errors), per-render toggles and
//! per-namespace overrides.

use std::collections::HashMap;

use formkit_markup::{Attributes, Markup};
use indexmap::IndexMap;

/// Rendering inputs for one field.
#[derive(Debug, Clone, Default)]
pub struct FieldContext {
    attribute: String,
    input_type: Option<String>,
    slots: IndexMap<String, Markup>,
    label: Option<String>,
    explicit_label: bool,
    required: bool,
    hint: Option<String>,
    errors: Vec<String>,
    validated: bool,
    toggles: HashMap<String, bool>,
    html: HashMap<String, Attributes>,
    tags: HashMap<String, Option<String>>,
    additional_classes: Vec<String>,
}

impl FieldContext {
    /// Create a context for the named model attribute.
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            ..Self::default()
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Input type (`string`, `boolean`, ...) used to pick a mapped wrapper.
    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn input_type(&self) -> Option<&str> {
        self.input_type.as_deref()
    }

    /// Provide the pre-rendered output for a component.
    pub fn with_slot(mut self, component: impl Into<String>, markup: Markup) -> Self {
        self.slots.insert(component.into(), markup);
        self
    }

    /// The pre-rendered output for a component, if one was supplied.
    pub fn slot(&self, component: &str) -> Option<&Markup> {
        self.slots.get(component)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self.explicit_label = true;
        self
    }

    /// A label derived from the attribute name rather than given explicitly.
    pub fn with_default_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self.explicit_label = false;
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_explicit_label(&self) -> bool {
        self.explicit_label
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref().filter(|h| !h.is_empty())
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Mark the field as having gone through validation.
    pub fn validated(mut self, validated: bool) -> Self {
        self.validated = validated;
        self
    }

    /// Explicitly enable a namespace. Optional components need this to render.
    pub fn enable(mut self, name: impl Into<String>) -> Self {
        self.toggles.insert(name.into(), true);
        self
    }

    /// Explicitly disable a namespace; the matching component or group is skipped.
    pub fn disable(mut self, name: impl Into<String>) -> Self {
        self.toggles.insert(name.into(), false);
        self
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.toggles.get(name).copied().unwrap_or(false)
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.toggles.get(name).is_some_and(|enabled| !enabled)
    }

    /// Per-render attributes for the element of a namespace.
    ///
    /// These merge on top of the node's configured attributes: classes are
    /// unioned, other keys override. Repeated calls accumulate.
    pub fn with_html(mut self, namespace: impl Into<String>, attributes: Attributes) -> Self {
        self.html
            .entry(namespace.into())
            .or_default()
            .merge_from(&attributes);
        self
    }

    pub fn html(&self, namespace: &str) -> Option<&Attributes> {
        self.html.get(namespace)
    }

    /// Per-render tag for a namespace.
    pub fn with_tag(mut self, namespace: impl Into<String>, tag: impl Into<String>) -> Self {
        self.tags.insert(namespace.into(), Some(tag.into()));
        self
    }

    /// Render the namespace's group without its wrapping element.
    pub fn without_tag(mut self, namespace: impl Into<String>) -> Self {
        self.tags.insert(namespace.into(), None);
        self
    }

    /// `None` when no override exists, `Some(None)` for an explicit tagless override.
    pub fn tag(&self, namespace: &str) -> Option<Option<&str>> {
        self.tags.get(namespace).map(Option::as_deref)
    }

    /// Classes describing the input (type, `required`, ...), added to the
    /// wrapper root when configured to.
    pub fn with_additional_class(mut self, class: impl Into<String>) -> Self {
        self.additional_classes.push(class.into());
        self
    }

    pub fn additional_classes(&self) -> &[String] {
        &self.additional_classes
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.slot("error").is_some_and(|m| !m.is_empty())
    }

    pub fn has_hint(&self) -> bool {
        self.hint().is_some() || self.slot("hint").is_some_and(|m| !m.is_empty())
    }

    /// Validated and error free.
    pub fn is_valid(&self) -> bool {
        self.validated && !self.has_errors()
    }
}
