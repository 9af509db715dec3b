/*
 * component.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Leaf components and the per-configuration registry.
//!
//! A wrapper leaf names a component; the registry resolves that name to a
//! renderer. The set of valid names is whatever the registry holds, so an
//! application extends it by registering functions, not by patching types.
//!
//! For every built-in component a slot supplied in the [`FieldContext`]
//! wins over the built-in formatting.

use std::fmt;
use std::sync::Arc;

use formkit_markup::{Attributes, Markup, tag};
use indexmap::IndexMap;

use crate::config::Config;
use crate::error::{FormError, FormResult};
use crate::field::FieldContext;

/// Marker shown next to required labels.
pub const REQUIRED_MARKER: &str = "<abbr title=\"required\">*</abbr>";

/// Components that only shape the input control. They contribute markup
/// only when the field context carries a slot for them.
pub const INPUT_ATTRIBUTE_COMPONENTS: &[&str] = &[
    "html5",
    "min_max",
    "maxlength",
    "minlength",
    "placeholder",
    "pattern",
    "readonly",
];

/// A named leaf renderer.
pub trait Component: Send + Sync {
    /// Render this component for one field. An empty [`Markup`] means the
    /// component has nothing to show.
    fn render(&self, field: &FieldContext, options: &Attributes, config: &Config) -> FormResult<Markup>;
}

impl<F> Component for F
where
    F: Fn(&FieldContext, &Attributes, &Config) -> FormResult<Markup> + Send + Sync,
{
    fn render(&self, field: &FieldContext, options: &Attributes, config: &Config) -> FormResult<Markup> {
        (self)(field, options, config)
    }
}

/// Renders whatever the field context supplied for `name`, or nothing.
#[derive(Debug, Clone)]
pub struct SlotComponent {
    name: String,
}

impl SlotComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Component for SlotComponent {
    fn render(&self, field: &FieldContext, _options: &Attributes, _config: &Config) -> FormResult<Markup> {
        Ok(field.slot(&self.name).cloned().unwrap_or_default())
    }
}

/// Name -> renderer table.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    components: IndexMap<String, Arc<dyn Component>>,
}

impl ComponentRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in components.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for name in INPUT_ATTRIBUTE_COMPONENTS {
            registry.register(*name, SlotComponent::new(*name));
        }
        registry.register("label", render_label);
        registry.register("input", render_input);
        registry.register("label_input", render_label_input);
        registry.register("hint", render_hint);
        registry.register("error", render_error);
        registry.register("full_error", render_full_error);
        registry
    }

    /// Register or replace a component.
    pub fn register(&mut self, name: impl Into<String>, component: impl Component + 'static) {
        self.components.insert(name.into(), Arc::new(component));
    }

    pub fn get(&self, name: &str) -> FormResult<&dyn Component> {
        self.components
            .get(name)
            .map(|c| c.as_ref())
            .ok_or_else(|| FormError::UnknownComponent {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

fn render_label(field: &FieldContext, options: &Attributes, config: &Config) -> FormResult<Markup> {
    if let Some(slot) = field.slot("label") {
        return Ok(slot.clone());
    }
    let Some(label) = field.label() else {
        return Ok(Markup::empty());
    };

    let required = if field.is_required() { REQUIRED_MARKER } else { "" };
    let text = (config.label_text)(
        Markup::text(label).as_str(),
        required,
        field.is_explicit_label(),
    );

    let mut attributes = Attributes::new().with("for", field.attribute());
    if let Some(class) = &config.label_class {
        attributes.add_class(class);
    }
    for class in config.additional_classes_for("label", || field.additional_classes().to_vec()) {
        attributes.add_class(&class);
    }
    attributes.merge_from(options);

    Ok(tag("label", &attributes, Markup::raw(text.trim())))
}

fn render_input(field: &FieldContext, _options: &Attributes, config: &Config) -> FormResult<Markup> {
    let input = field.slot("input").cloned().unwrap_or_default();
    if field.has_errors() && !input.is_empty() {
        return Ok((config.field_error_proc)(input));
    }
    Ok(input)
}

/// Leaf options go to the label; the input is a slot and takes none.
fn render_label_input(field: &FieldContext, options: &Attributes, config: &Config) -> FormResult<Markup> {
    if let Some(slot) = field.slot("label_input") {
        return Ok(slot.clone());
    }
    let label = render_label(field, options, config)?;
    let input = render_input(field, &Attributes::new(), config)?;
    Ok(label.concat(input))
}

fn render_hint(field: &FieldContext, _options: &Attributes, _config: &Config) -> FormResult<Markup> {
    if let Some(slot) = field.slot("hint") {
        return Ok(slot.clone());
    }
    Ok(field.hint().map(Markup::text).unwrap_or_default())
}

fn render_error(field: &FieldContext, options: &Attributes, config: &Config) -> FormResult<Markup> {
    if let Some(slot) = field.slot("error") {
        return Ok(slot.clone());
    }
    let Some(message) = config.error_method.apply(field.errors()) else {
        return Ok(Markup::empty());
    };
    let text = match options.get("error_prefix") {
        Some(prefix) => format!("{} {}", prefix, message),
        None => message,
    };
    Ok(Markup::text(text.trim_start()))
}

fn render_full_error(field: &FieldContext, _options: &Attributes, _config: &Config) -> FormResult<Markup> {
    if let Some(slot) = field.slot("full_error") {
        return Ok(slot.clone());
    }
    let Some(message) = field.errors().first() else {
        return Ok(Markup::empty());
    };
    let text = match field.label() {
        Some(label) => format!("{} {}", label, message),
        None => message.clone(),
    };
    Ok(Markup::text(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(name: &str, field: &FieldContext, options: &Attributes) -> String {
        let config = Config::new();
        config
            .components()
            .get(name)
            .expect("registered")
            .render(field, options, &config)
            .expect("renders")
            .into_string()
    }

    #[test]
    fn test_builtin_names() {
        let registry = ComponentRegistry::builtin();
        for name in [
            "label",
            "input",
            "label_input",
            "hint",
            "error",
            "full_error",
            "html5",
            "pattern",
        ] {
            assert!(registry.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_unknown_component() {
        let registry = ComponentRegistry::new();
        let err = registry.get("label").err().expect("empty registry");
        assert!(matches!(err, FormError::UnknownComponent { ref name } if name == "label"));
    }

    #[test]
    fn test_slot_component() {
        let field = FieldContext::new("age").with_slot("min_max", Markup::raw("<x>"));
        assert_eq!(render("min_max", &field, &Attributes::new()), "<x>");
        assert_eq!(render("maxlength", &field, &Attributes::new()), "");
    }

    #[test]
    fn test_label_required() {
        let field = FieldContext::new("name").with_label("Name").required(true);
        assert_eq!(
            render("label", &field, &Attributes::new()),
            "<label for=\"name\"><abbr title=\"required\">*</abbr> Name</label>"
        );
    }

    #[test]
    fn test_label_escapes_text_and_merges_options() {
        let field = FieldContext::new("tos")
            .with_label("Terms & <Conditions>")
            .with_additional_class("boolean");
        let options = Attributes::new().with("class", "control-label");
        assert_eq!(
            render("label", &field, &options),
            "<label for=\"tos\" class=\"boolean control-label\">Terms &amp; &lt;Conditions&gt;</label>"
        );
    }

    #[test]
    fn test_label_empty_without_text() {
        assert_eq!(render("label", &FieldContext::new("x"), &Attributes::new()), "");
    }

    #[test]
    fn test_label_input_falls_back_to_parts() {
        let field = FieldContext::new("email")
            .with_label("Email")
            .with_slot("input", Markup::raw("<input id=\"email\">"));
        assert_eq!(
            render("label_input", &field, &Attributes::new()),
            "<label for=\"email\">Email</label><input id=\"email\">"
        );
    }

    #[test]
    fn test_label_input_forwards_options_to_label() {
        let field = FieldContext::new("email")
            .with_label("Email")
            .with_slot("input", Markup::raw("<input id=\"email\">"));
        let options = Attributes::new()
            .with("class", "col-form-label")
            .with("title", "Your address");
        assert_eq!(
            render("label_input", &field, &options),
            "<label for=\"email\" class=\"col-form-label\" title=\"Your address\">Email</label><input id=\"email\">"
        );
    }

    #[test]
    fn test_input_applies_field_error_proc() {
        let mut config = Config::new();
        config.field_error_proc =
            Arc::new(|html: Markup| Markup::raw(format!("<div class=\"fe\">{}</div>", html)));
        let field = FieldContext::new("a")
            .with_slot("input", Markup::raw("<input>"))
            .with_error("is invalid");

        let out = config
            .components()
            .get("input")
            .and_then(|c| c.render(&field, &Attributes::new(), &config))
            .expect("renders");
        assert_eq!(out.as_str(), "<div class=\"fe\"><input></div>");
    }

    #[test]
    fn test_hint() {
        let field = FieldContext::new("a").with_hint("Max <10> chars");
        assert_eq!(render("hint", &field, &Attributes::new()), "Max &lt;10&gt; chars");
        assert_eq!(render("hint", &FieldContext::new("a"), &Attributes::new()), "");
    }

    #[test]
    fn test_error_with_prefix() {
        let field = FieldContext::new("a").with_error("can't be blank").with_error("is short");
        assert_eq!(render("error", &field, &Attributes::new()), "can&#39;t be blank");
        let options = Attributes::new().with("error_prefix", "Name");
        assert_eq!(render("error", &field, &options), "Name can&#39;t be blank");
    }

    #[test]
    fn test_full_error() {
        let field = FieldContext::new("a").with_label("Name").with_error("is taken");
        assert_eq!(render("full_error", &field, &Attributes::new()), "Name is taken");
    }

    #[test]
    fn test_closure_component() {
        let mut config = Config::new();
        config.register_component(
            "counter",
            |field: &FieldContext, _: &Attributes, _: &Config| -> FormResult<Markup> {
                Ok(Markup::text(&format!("{} chars", field.attribute().len())))
            },
        );
        let out = config
            .components()
            .get("counter")
            .and_then(|c| c.render(&FieldContext::new("bio"), &Attributes::new(), &config))
            .expect("renders");
        assert_eq!(out.as_str(), "3 chars");
    }
}
