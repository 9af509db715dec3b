/*
 * integration_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Integration tests for formkit using the YAML fixtures.
 */

use formkit::{
    Attributes, ContextStore, FieldContext, FormError, Markup, WrapperOptions, activate, current,
};
use pretty_assertions::assert_eq;
use std::path::Path;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> std::path::PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir).join("test-fixtures").join(name)
}

/// A store loaded from `bootstrap.yaml`.
fn bootstrap() -> ContextStore {
    let store = ContextStore::new();
    store
        .load_file(&fixture_path("bootstrap.yaml"))
        .expect("Failed to load bootstrap.yaml");
    store
}

fn render(store: &ContextStore, context: &str, wrapper: Option<&str>, field: &FieldContext) -> String {
    store
        .get(context)
        .expect("context")
        .render(wrapper, field)
        .expect("renders")
        .into_string()
}

#[test]
fn test_vertical_form_with_hint() {
    let store = bootstrap();
    let field = FieldContext::new("email")
        .with_label("Email")
        .required(true)
        .with_slot("input", Markup::raw("<input id=\"email\">"))
        .with_hint("Never shared");

    assert_eq!(
        render(&store, "default", Some("vertical_form"), &field),
        "<div class=\"mb-3\">\
         <label for=\"email\" class=\"form-label\"><abbr title=\"required\">*</abbr> Email</label>\
         <input id=\"email\">\
         <small class=\"form-text\">Never shared</small>\
         </div>"
    );
}

#[test]
fn test_vertical_form_with_errors() {
    let store = bootstrap();
    let field = FieldContext::new("name")
        .with_label("Name")
        .with_slot("input", Markup::raw("<input id=\"name\">"))
        .with_error("can't be blank")
        .with_error("is too short")
        .validated(true);

    assert_eq!(
        render(&store, "default", Some("vertical_form"), &field),
        "<div class=\"mb-3 form-group-invalid\">\
         <label for=\"name\" class=\"form-label\">Name</label>\
         <input id=\"name\">\
         <div class=\"invalid-feedback\">Name can&#39;t be blank</div>\
         </div>"
    );
}

#[test]
fn test_valid_class_after_validation() {
    let store = bootstrap();
    let field = FieldContext::new("name")
        .with_slot("input", Markup::raw("<input>"))
        .validated(true);

    assert_eq!(
        render(&store, "default", Some("vertical_form"), &field),
        "<div class=\"mb-3 form-group-valid\"><input></div>"
    );
}

#[test]
fn test_input_type_mapping_and_nested_override() {
    let store = bootstrap();
    let field = FieldContext::new("tos")
        .with_input_type("boolean")
        .with_label("Accept")
        .with_slot("input", Markup::raw("<input type=\"checkbox\">"))
        .with_html(
            "form_check_wrapper",
            Attributes::new().with("class", "form-switch").with("id", "tos-check"),
        );

    assert_eq!(
        render(&store, "default", None, &field),
        "<fieldset class=\"mb-3\">\
         <div class=\"form-check form-switch\" id=\"tos-check\">\
         <input type=\"checkbox\"><label for=\"tos\" class=\"form-label\">Accept</label>\
         </div>\
         </fieldset>"
    );
}

#[test]
fn test_additional_classes_reach_wrapper_and_label() {
    let store = bootstrap();
    let field = FieldContext::new("title")
        .with_label("Title")
        .with_additional_class("string")
        .with_slot("input", Markup::raw("<input>"));

    assert_eq!(
        render(&store, "default", Some("vertical_form"), &field),
        "<div class=\"mb-3 string\">\
         <label for=\"title\" class=\"form-label string\">Title</label>\
         <input>\
         </div>"
    );
}

#[test]
fn test_optional_components_need_enabling() {
    let store = bootstrap();
    let field = FieldContext::new("code")
        .with_slot("pattern", Markup::raw("<!--pattern-->"))
        .with_slot("input", Markup::raw("<input>"));

    assert_eq!(
        render(&store, "default", Some("vertical_form"), &field),
        "<div class=\"mb-3\"><input></div>"
    );
    assert_eq!(
        render(&store, "default", Some("vertical_form"), &field.clone().enable("pattern")),
        "<div class=\"mb-3\"><!--pattern--><input></div>"
    );
}

#[test]
fn test_inline_context_is_isolated() {
    let store = bootstrap();
    let field = FieldContext::new("q")
        .with_label("Search")
        .with_slot("input", Markup::raw("<input name=\"q\">"))
        .with_error("is empty");

    assert_eq!(
        render(&store, "inline", Some("inline_form"), &field),
        "<span class=\"col-12 col-sm-auto\">\
         <label for=\"q\" class=\"visually-hidden\">Search</label>\
         <input name=\"q\">is empty\
         </span>"
    );

    let default = store.get("default").expect("default");
    assert!(matches!(
        default.wrapper("inline_form"),
        Err(FormError::WrapperNotFound { .. })
    ));

    // inherited from default at setup time
    let inline = store.get("inline").expect("inline");
    assert!(inline.wrapper("vertical_form").is_ok());
    assert_eq!(inline.label_class.as_deref(), Some("visually-hidden"));
}

#[test]
fn test_builtin_default_wrapper() {
    let store = ContextStore::new();
    let field = FieldContext::new("name")
        .with_label("Name")
        .with_slot("input", Markup::raw("<input>"))
        .with_hint("Your full name");

    assert_eq!(
        render(&store, "default", None, &field),
        "<div class=\"input field_with_hint\">\
         <label for=\"name\">Name</label><input>\
         <span class=\"hint\">Your full name</span>\
         </div>"
    );
}

#[test]
fn test_global_store_activation() {
    formkit::setup("integration-global", |config| {
        config.wrappers("compact", WrapperOptions::new().tag("p"), |b| {
            b.use_component("input");
        });
    });
    assert!(formkit::is_configured());

    let field = FieldContext::new("a").with_slot("input", Markup::raw("<input>"));
    {
        let _active = activate("integration-global").expect("context");
        assert!(formkit::wrapper("compact").is_ok());
        assert_eq!(
            formkit::render(Some("compact"), &field).expect("renders").as_str(),
            "<p><input></p>"
        );
    }
    assert!(matches!(current(), Err(FormError::NoActiveConfig)));
    assert!(matches!(
        formkit::render(Some("compact"), &field),
        Err(FormError::NoActiveConfig)
    ));
}

#[test]
fn test_missing_definition_file() {
    let store = ContextStore::new();
    let err = store
        .load_file(&fixture_path("does-not-exist.yaml"))
        .unwrap_err();
    assert!(matches!(err, FormError::Io(_)));
}
