/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! One complete form setup: scalar options, wrappers and components.
//!
//! A [`Config`] is built and mutated during application setup, then shared
//! read-only as `Arc<Config>`. Cloning a config gives an independent wrapper
//! mapping: the trees themselves are immutable and shared, but adding or
//! replacing a wrapper in the clone never touches the original.

use std::fmt;
use std::sync::Arc;

use formkit_markup::Markup;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::builder::{Builder, LeafOptions, WrapperOptions};
use crate::component::{Component, ComponentRegistry};
use crate::error::{FormError, FormResult};
use crate::field::FieldContext;
use crate::wrapper::{Wrapper, build};

/// Name of the built-in wrapper and of the default context.
pub const DEFAULT_WRAPPER: &str = "default";

/// Formats label text from `(escaped label, required marker, explicit label?)`.
pub type LabelText = Arc<dyn Fn(&str, &str, bool) -> String + Send + Sync>;

/// Post-processes the input markup of a field that has errors.
pub type FieldErrorProc = Arc<dyn Fn(Markup) -> Markup + Send + Sync>;

/// How a list of error messages is reduced to the text the error component shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMethod {
    /// Only the first message.
    #[default]
    First,
    /// All messages as a sentence: `a, b, and c`.
    ToSentence,
}

impl ErrorMethod {
    pub fn apply(self, errors: &[String]) -> Option<String> {
        match self {
            ErrorMethod::First => errors.first().cloned(),
            ErrorMethod::ToSentence => to_sentence(errors),
        }
    }
}

fn to_sentence(items: &[String]) -> Option<String> {
    match items {
        [] => None,
        [only] => Some(only.clone()),
        [first, second] => Some(format!("{} and {}", first, second)),
        [init @ .., last] => Some(format!("{}, and {}", init.join(", "), last)),
    }
}

/// Where boolean inputs put their label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanStyle {
    #[default]
    Inline,
    Nested,
}

/// A complete, independently configurable form setup.
#[derive(Clone)]
pub struct Config {
    pub error_method: ErrorMethod,
    pub error_notification_tag: String,
    pub error_notification_class: String,
    pub collection_label_methods: Vec<String>,
    pub collection_value_methods: Vec<String>,
    pub collection_wrapper_tag: Option<String>,
    pub collection_wrapper_class: Option<String>,
    pub item_wrapper_tag: Option<String>,
    pub item_wrapper_class: Option<String>,
    pub label_text: LabelText,
    pub label_class: Option<String>,
    pub boolean_style: BooleanStyle,
    pub form_class: Option<String>,
    pub default_form_class: Option<String>,
    pub generate_additional_classes_for: Vec<String>,
    pub required_by_default: bool,
    pub browser_validations: bool,
    pub input_mappings: Option<IndexMap<String, String>>,
    pub wrapper_mappings: Option<IndexMap<String, String>>,
    pub custom_inputs_namespaces: Vec<String>,
    pub time_zone_priority: Option<Vec<String>>,
    pub country_priority: Option<Vec<String>>,
    pub translate_labels: bool,
    pub inputs_discovery: bool,
    pub cache_discovery: bool,
    pub button_class: String,
    pub field_error_proc: FieldErrorProc,
    pub input_class: Option<String>,
    pub include_default_input_wrapper_class: bool,
    pub boolean_label_class: String,
    pub default_wrapper: String,
    pub i18n_scope: String,
    pub input_field_error_class: Option<String>,
    pub input_field_valid_class: Option<String>,
    wrappers: IndexMap<String, Arc<Wrapper>>,
    components: ComponentRegistry,
}

impl Config {
    /// A fresh configuration holding the built-in `default` wrapper.
    pub fn new() -> Self {
        let mut config = Self {
            error_method: ErrorMethod::First,
            error_notification_tag: "p".to_string(),
            error_notification_class: "error_notification".to_string(),
            collection_label_methods: strings(&["to_label", "name", "title", "to_s"]),
            collection_value_methods: strings(&["id", "to_s"]),
            collection_wrapper_tag: None,
            collection_wrapper_class: None,
            item_wrapper_tag: Some("span".to_string()),
            item_wrapper_class: None,
            label_text: Arc::new(|label: &str, required: &str, _explicit: bool| {
                format!("{} {}", required, label)
            }),
            label_class: None,
            boolean_style: BooleanStyle::Inline,
            form_class: Some("simple_form".to_string()),
            default_form_class: None,
            generate_additional_classes_for: strings(&["wrapper", "label", "input"]),
            required_by_default: true,
            browser_validations: true,
            input_mappings: None,
            wrapper_mappings: None,
            custom_inputs_namespaces: Vec::new(),
            time_zone_priority: None,
            country_priority: None,
            translate_labels: true,
            inputs_discovery: true,
            cache_discovery: !cfg!(debug_assertions),
            button_class: "button".to_string(),
            field_error_proc: Arc::new(|html: Markup| html),
            input_class: None,
            include_default_input_wrapper_class: true,
            boolean_label_class: "checkbox".to_string(),
            default_wrapper: DEFAULT_WRAPPER.to_string(),
            i18n_scope: "simple_form".to_string(),
            input_field_error_class: None,
            input_field_valid_class: None,
            wrappers: IndexMap::new(),
            components: ComponentRegistry::builtin(),
        };

        config.wrappers(
            DEFAULT_WRAPPER,
            WrapperOptions::new()
                .class("input")
                .hint_class("field_with_hint")
                .error_class("field_with_errors")
                .valid_class("field_without_errors"),
            |b| {
                b.use_component("html5");

                b.use_component("min_max");
                b.use_component("maxlength");
                b.use_component("minlength");
                b.use_component("placeholder");
                b.optional("pattern");
                b.optional("readonly");

                b.use_component("label_input");
                b.use_with(
                    "hint",
                    LeafOptions::new().wrap_with(WrapperOptions::new().tag("span").class("hint")),
                );
                b.use_with(
                    "error",
                    LeafOptions::new().wrap_with(WrapperOptions::new().tag("span").class("error")),
                );
            },
        );

        config
    }

    /// Build a wrapper and store it under `name`, replacing any previous one.
    pub fn wrappers<F>(&mut self, name: &str, options: WrapperOptions, body: F) -> Arc<Wrapper>
    where
        F: FnOnce(&mut Builder),
    {
        self.insert_wrapper(build(name, options, body))
    }

    /// Store an already-built wrapper under its own name.
    pub fn insert_wrapper(&mut self, wrapper: Wrapper) -> Arc<Wrapper> {
        tracing::debug!(wrapper = wrapper.name(), "Defining wrapper");
        let wrapper = Arc::new(wrapper);
        self.wrappers
            .insert(wrapper.name().to_string(), Arc::clone(&wrapper));
        wrapper
    }

    /// All wrappers, in definition order.
    pub fn wrapper_mapping(&self) -> &IndexMap<String, Arc<Wrapper>> {
        &self.wrappers
    }

    /// Retrieve a wrapper by name.
    pub fn wrapper(&self, name: &str) -> FormResult<Arc<Wrapper>> {
        self.wrappers
            .get(name)
            .cloned()
            .ok_or_else(|| FormError::WrapperNotFound {
                name: name.to_string(),
            })
    }

    /// Pick the wrapper for a field: the explicit name, else the wrapper
    /// mapped to the input type, else `default_wrapper`.
    pub fn find_wrapper(
        &self,
        explicit: Option<&str>,
        input_type: Option<&str>,
    ) -> FormResult<Arc<Wrapper>> {
        if let Some(name) = explicit {
            return self.wrapper(name);
        }
        let mapped = input_type.and_then(|t| {
            self.wrapper_mappings
                .as_ref()
                .and_then(|mappings| mappings.get(t))
        });
        match mapped {
            Some(name) => self.wrapper(name),
            None => self.wrapper(&self.default_wrapper),
        }
    }

    /// Classes from `f` when `component` is listed in
    /// `generate_additional_classes_for`, otherwise none.
    pub fn additional_classes_for<F>(&self, component: &str, f: F) -> Vec<String>
    where
        F: FnOnce() -> Vec<String>,
    {
        if self
            .generate_additional_classes_for
            .iter()
            .any(|c| c == component)
        {
            f()
        } else {
            Vec::new()
        }
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    /// Register (or replace) a leaf component for this configuration only.
    pub fn register_component(&mut self, name: impl Into<String>, component: impl Component + 'static) {
        self.components.register(name, component);
    }

    /// Render `field` with the wrapper chosen by [`Config::find_wrapper`].
    pub fn render(&self, wrapper: Option<&str>, field: &FieldContext) -> FormResult<Markup> {
        self.find_wrapper(wrapper, field.input_type())?
            .render(field, self)
    }

    /// Accepted for compatibility; has no effect.
    #[deprecated(note = "default_input_size has no effect")]
    pub fn set_default_input_size(&mut self, _size: u32) {
        tracing::warn!("default_input_size is deprecated and has no effect");
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("error_method", &self.error_method)
            .field("label_class", &self.label_class)
            .field("boolean_style", &self.boolean_style)
            .field("default_wrapper", &self.default_wrapper)
            .field("i18n_scope", &self.i18n_scope)
            .field("wrappers", &self.wrappers.keys().collect::<Vec<_>>())
            .field("components", &self.components)
            .finish_non_exhaustive()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::WrapperNode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.error_method, ErrorMethod::First);
        assert_eq!(config.error_notification_tag, "p");
        assert_eq!(config.item_wrapper_tag.as_deref(), Some("span"));
        assert_eq!(config.boolean_label_class, "checkbox");
        assert_eq!(config.default_wrapper, "default");
        assert_eq!(config.i18n_scope, "simple_form");
        assert_eq!(config.button_class, "button");
        assert!(config.required_by_default);
        assert!(config.browser_validations);
        assert_eq!((config.label_text)("Name", "*", false), "* Name");
    }

    #[test]
    fn test_builtin_default_wrapper() {
        let config = Config::new();
        let wrapper = config.wrapper("default").expect("built-in wrapper");

        assert_eq!(wrapper.root().tag.as_deref(), Some("div"));
        assert_eq!(wrapper.root().attributes.get("class"), Some("input"));
        assert_eq!(wrapper.error_class(), Some("field_with_errors"));
        assert_eq!(wrapper.hint_class(), Some("field_with_hint"));
        assert_eq!(wrapper.valid_class(), Some("field_without_errors"));

        let names: Vec<&str> = wrapper.children().iter().filter_map(|n| n.name()).collect();
        assert_eq!(
            names,
            vec![
                "html5",
                "min_max",
                "maxlength",
                "minlength",
                "placeholder",
                "pattern",
                "readonly",
                "label_input",
                "hint",
                "error",
            ]
        );
        match wrapper.find("pattern") {
            Some(WrapperNode::Leaf(leaf)) => assert!(leaf.optional),
            other => panic!("expected optional leaf, got {:?}", other),
        }
    }

    #[test]
    fn test_wrapper_not_found() {
        let config = Config::new();
        let err = config.wrapper("nope").unwrap_err();
        assert!(matches!(err, FormError::WrapperNotFound { ref name } if name == "nope"));
        assert_eq!(err.to_string(), "Couldn't find wrapper with name nope");
    }

    #[test]
    fn test_wrappers_last_write_wins() {
        let mut config = Config::new();
        config.wrappers("inline", WrapperOptions::new().tag("span"), |b| {
            b.use_component("input");
        });
        config.wrappers("inline", WrapperOptions::new().tag("p"), |b| {
            b.use_component("label");
        });

        let wrapper = config.wrapper("inline").expect("defined");
        assert_eq!(wrapper.root().tag.as_deref(), Some("p"));
        assert_eq!(config.wrapper_mapping().len(), 2);
    }

    #[test]
    fn test_clone_has_independent_mapping() {
        let original = Config::new();
        let mut copy = original.clone();
        copy.wrappers("default", WrapperOptions::new().tag("section"), |_| {});

        assert_eq!(
            original.wrapper("default").expect("kept").root().tag.as_deref(),
            Some("div")
        );
        assert_eq!(
            copy.wrapper("default").expect("replaced").root().tag.as_deref(),
            Some("section")
        );
    }

    #[test]
    fn test_find_wrapper() {
        let mut config = Config::new();
        config.wrappers("check", WrapperOptions::new(), |_| {});
        config.wrapper_mappings = Some(IndexMap::from([(
            "boolean".to_string(),
            "check".to_string(),
        )]));

        assert_eq!(config.find_wrapper(None, Some("boolean")).expect("mapped").name(), "check");
        assert_eq!(config.find_wrapper(None, Some("string")).expect("default").name(), "default");
        assert_eq!(config.find_wrapper(Some("check"), None).expect("explicit").name(), "check");
        assert!(config.find_wrapper(Some("missing"), Some("boolean")).is_err());
    }

    #[test]
    fn test_additional_classes_for() {
        let mut config = Config::new();
        let classes = config.additional_classes_for("wrapper", || vec!["string".to_string()]);
        assert_eq!(classes, vec!["string".to_string()]);

        config.generate_additional_classes_for = vec!["input".to_string()];
        assert!(config.additional_classes_for("wrapper", || vec!["x".to_string()]).is_empty());
    }

    #[test]
    fn test_error_method() {
        let errors = vec!["is short".to_string(), "is odd".to_string(), "is taken".to_string()];
        assert_eq!(ErrorMethod::First.apply(&errors).as_deref(), Some("is short"));
        assert_eq!(
            ErrorMethod::ToSentence.apply(&errors).as_deref(),
            Some("is short, is odd, and is taken")
        );
        assert_eq!(
            ErrorMethod::ToSentence.apply(&errors[..2]).as_deref(),
            Some("is short and is odd")
        );
        assert_eq!(ErrorMethod::First.apply(&[]), None);
    }

    #[test]
    #[allow(deprecated)]
    fn test_default_input_size_is_ignored() {
        let mut config = Config::new();
        config.set_default_input_size(50);
        assert_eq!(config.wrapper_mapping().len(), 1);
    }
}
