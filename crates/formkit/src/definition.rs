/*
 * definition.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! YAML wrapper definitions.
//!
//! Contexts and their wrappers can be declared in a YAML document instead of
//! code:
//!
//! ```yaml
//! contexts:
//!   default:
//!     label_class: control-label
//!     wrappers:
//!       vertical:
//!         class: form-group
//!         error_class: has-error
//!         components:
//!           - use: label_input
//!           - use: hint
//!             wrap_with: { tag: span, class: hint }
//!           - optional: pattern
//!           - wrapper:
//!               name: feedback
//!               class: invalid-feedback
//!               components:
//!                 - use: error
//! ```
//!
//! `tag` defaults to `div` for wrappers and nested groups, while a
//! `wrap_with` group without a `tag` is tagless; `tag: ~` makes any group
//! tagless. The `default`
//! context is applied first so that other contexts clone the customized
//! version.

use std::path::Path;

use formkit_markup::Attributes;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::builder::{Builder, LeafOptions, WrapperOptions};
use crate::config::{BooleanStyle, Config, ErrorMethod};
use crate::error::{FormError, FormResult};
use crate::store::{ContextStore, DEFAULT_CONTEXT};
use crate::wrapper::Wrapper;

/// A parsed definition document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Definitions {
    #[serde(default)]
    pub contexts: IndexMap<String, ContextDefinition>,
}

/// Scalar options and wrappers for one context.
///
/// Options left out keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextDefinition {
    pub error_method: Option<ErrorMethod>,
    pub error_notification_tag: Option<String>,
    pub error_notification_class: Option<String>,
    pub collection_wrapper_tag: Option<String>,
    pub collection_wrapper_class: Option<String>,
    pub item_wrapper_tag: Option<String>,
    pub item_wrapper_class: Option<String>,
    pub label_class: Option<String>,
    pub boolean_style: Option<BooleanStyle>,
    pub form_class: Option<String>,
    pub default_form_class: Option<String>,
    pub generate_additional_classes_for: Option<Vec<String>>,
    pub required_by_default: Option<bool>,
    pub browser_validations: Option<bool>,
    pub input_mappings: Option<IndexMap<String, String>>,
    pub wrapper_mappings: Option<IndexMap<String, String>>,
    pub translate_labels: Option<bool>,
    pub button_class: Option<String>,
    pub input_class: Option<String>,
    pub include_default_input_wrapper_class: Option<bool>,
    pub boolean_label_class: Option<String>,
    pub default_wrapper: Option<String>,
    pub i18n_scope: Option<String>,
    pub input_field_error_class: Option<String>,
    pub input_field_valid_class: Option<String>,
    #[serde(default)]
    pub wrappers: IndexMap<String, GroupDefinition>,
}

/// A wrapper root or nested group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupDefinition {
    pub name: Option<String>,
    /// Absent: the default for the group's position. Present and null: tagless.
    #[serde(default, deserialize_with = "present")]
    pub tag: Option<Option<String>>,
    pub class: Option<ClassList>,
    #[serde(default)]
    pub html: Attributes,
    pub error_class: Option<String>,
    pub hint_class: Option<String>,
    pub valid_class: Option<String>,
    #[serde(default)]
    pub components: Vec<ComponentDefinition>,
}

/// One entry of a `components` list. Exactly one of `use`, `optional` or
/// `wrapper` must be given.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentDefinition {
    #[serde(rename = "use")]
    pub use_: Option<String>,
    pub optional: Option<String>,
    pub wrapper: Option<GroupDefinition>,
    pub wrap_with: Option<GroupDefinition>,
    #[serde(default)]
    pub options: Attributes,
}

/// `class: a b` or `class: [a, b]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ClassList {
    One(String),
    Many(Vec<String>),
}

impl ClassList {
    fn tokens(&self) -> Vec<&str> {
        match self {
            ClassList::One(class) => vec![class.as_str()],
            ClassList::Many(classes) => classes.iter().map(String::as_str).collect(),
        }
    }
}

/// Distinguishes a present `null` from an absent key.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Definitions {
    pub fn from_yaml(source: &str) -> FormResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_file(path: &Path) -> FormResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }

    /// Set up every context in `store`, `default` first.
    ///
    /// Definitions are validated before anything is stored, so an invalid
    /// document leaves the store untouched.
    pub fn apply(&self, store: &ContextStore) -> FormResult<()> {
        let mut ordered: Vec<(&String, &ContextDefinition)> = self.contexts.iter().collect();
        ordered.sort_by_key(|(name, _)| name.as_str() != DEFAULT_CONTEXT);

        let mut built = Vec::with_capacity(ordered.len());
        for (name, context) in ordered {
            built.push((name, context, context.build_wrappers()?));
        }

        for (name, context, wrappers) in built {
            store.setup(name, |config| {
                context.apply_scalars(config);
                for wrapper in wrappers {
                    config.insert_wrapper(wrapper);
                }
            });
        }
        Ok(())
    }
}

impl ContextStore {
    /// Parse a YAML definition document and set up every context it names.
    pub fn load_yaml(&self, source: &str) -> FormResult<()> {
        Definitions::from_yaml(source)?.apply(self)
    }

    pub fn load_file(&self, path: &Path) -> FormResult<()> {
        tracing::debug!(path = %path.display(), "Loading wrapper definitions");
        Definitions::from_file(path)?.apply(self)
    }
}

impl ContextDefinition {
    fn build_wrappers(&self) -> FormResult<Vec<Wrapper>> {
        self.wrappers
            .iter()
            .map(|(name, group)| {
                if group.name.is_some() {
                    return Err(invalid(name, "a wrapper root is named by its key, not `name`"));
                }
                let mut builder = Builder::new();
                add_components(&mut builder, &group.components, name)?;
                Ok(Wrapper::new(name, builder.into_nodes(), group.options()))
            })
            .collect()
    }

    fn apply_scalars(&self, config: &mut Config) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
        fn set_opt<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                target.clone_from(value);
            }
        }

        set(&mut config.error_method, &self.error_method);
        set(&mut config.error_notification_tag, &self.error_notification_tag);
        set(&mut config.error_notification_class, &self.error_notification_class);
        set_opt(&mut config.collection_wrapper_tag, &self.collection_wrapper_tag);
        set_opt(&mut config.collection_wrapper_class, &self.collection_wrapper_class);
        set_opt(&mut config.item_wrapper_tag, &self.item_wrapper_tag);
        set_opt(&mut config.item_wrapper_class, &self.item_wrapper_class);
        set_opt(&mut config.label_class, &self.label_class);
        set(&mut config.boolean_style, &self.boolean_style);
        set_opt(&mut config.form_class, &self.form_class);
        set_opt(&mut config.default_form_class, &self.default_form_class);
        set(
            &mut config.generate_additional_classes_for,
            &self.generate_additional_classes_for,
        );
        set(&mut config.required_by_default, &self.required_by_default);
        set(&mut config.browser_validations, &self.browser_validations);
        set_opt(&mut config.input_mappings, &self.input_mappings);
        set_opt(&mut config.wrapper_mappings, &self.wrapper_mappings);
        set(&mut config.translate_labels, &self.translate_labels);
        set(&mut config.button_class, &self.button_class);
        set_opt(&mut config.input_class, &self.input_class);
        set(
            &mut config.include_default_input_wrapper_class,
            &self.include_default_input_wrapper_class,
        );
        set(&mut config.boolean_label_class, &self.boolean_label_class);
        set(&mut config.default_wrapper, &self.default_wrapper);
        set(&mut config.i18n_scope, &self.i18n_scope);
        set_opt(&mut config.input_field_error_class, &self.input_field_error_class);
        set_opt(&mut config.input_field_valid_class, &self.input_field_valid_class);
    }
}

impl GroupDefinition {
    fn has_state_classes(&self) -> bool {
        self.error_class.is_some() || self.hint_class.is_some() || self.valid_class.is_some()
    }

    fn options(&self) -> WrapperOptions {
        let mut options = WrapperOptions::new().html(&self.html);
        match &self.tag {
            Some(Some(tag)) => options = options.tag(tag),
            Some(None) => options = options.no_tag(),
            None => {}
        }
        if let Some(name) = &self.name {
            options = options.name(name);
        }
        for class in self.class.iter().flat_map(ClassList::tokens) {
            options = options.class(class);
        }
        if let Some(class) = &self.error_class {
            options = options.error_class(class);
        }
        if let Some(class) = &self.hint_class {
            options = options.hint_class(class);
        }
        if let Some(class) = &self.valid_class {
            options = options.valid_class(class);
        }
        options
    }
}

fn add_components(
    builder: &mut Builder,
    components: &[ComponentDefinition],
    wrapper: &str,
) -> FormResult<()> {
    for entry in components {
        let mut leaf = LeafOptions::new().options(&entry.options);
        if let Some(wrap_with) = &entry.wrap_with {
            if wrap_with.name.is_some()
                || !wrap_with.components.is_empty()
                || wrap_with.has_state_classes()
            {
                return Err(invalid(wrapper, "`wrap_with` takes only `tag`, `class` and `html`"));
            }
            leaf = leaf.wrap_with(wrap_with.options());
        }

        match (&entry.use_, &entry.optional, &entry.wrapper) {
            (Some(name), None, None) => {
                builder.use_with(name, leaf);
            }
            (None, Some(name), None) => {
                builder.optional_with(name, leaf);
            }
            (None, None, Some(group)) => {
                if entry.wrap_with.is_some() || !entry.options.is_empty() {
                    return Err(invalid(wrapper, "`wrapper` entries take no `wrap_with` or `options`"));
                }
                if group.has_state_classes() {
                    return Err(invalid(
                        wrapper,
                        "`error_class`, `hint_class` and `valid_class` only apply to a wrapper root",
                    ));
                }
                let mut nested = Builder::new();
                add_components(&mut nested, &group.components, wrapper)?;
                builder.wrapper(group.options(), |b| {
                    for node in nested.into_nodes() {
                        b.push(node);
                    }
                });
            }
            _ => {
                return Err(invalid(
                    wrapper,
                    "each component needs exactly one of `use`, `optional` or `wrapper`",
                ));
            }
        }
    }
    Ok(())
}

fn invalid(wrapper: &str, message: &str) -> FormError {
    FormError::InvalidDefinition {
        message: format!("wrapper {}: {}", wrapper, message),
    }
}
