/*
 * tag.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Element construction.

use std::fmt::Write;

use crate::attributes::{Attributes, CLASS};
use crate::markup::Markup;

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Build `<name attrs...>content</name>`.
///
/// Attribute values are escaped; the content is trusted markup. An empty
/// `class` attribute is left out rather than emitted as `class=""`.
pub fn tag(name: &str, attributes: &Attributes, content: Markup) -> Markup {
    let mut html = String::new();
    html.push('<');
    html.push_str(name);
    for (key, value) in attributes.iter() {
        if key == CLASS && value.trim().is_empty() {
            continue;
        }
        // Writing into a String cannot fail.
        let _ = write!(html, " {}=\"{}\"", key, escape_html(value));
    }
    html.push('>');
    html.push_str(content.as_str());
    html.push_str("</");
    html.push_str(name);
    html.push('>');
    Markup::raw(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<'\">"), "&lt;&#39;&quot;&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_tag_without_attributes() {
        let html = tag("div", &Attributes::new(), Markup::raw("<b>x</b>"));
        assert_eq!(html.as_str(), "<div><b>x</b></div>");
    }

    #[test]
    fn test_tag_escapes_attribute_values() {
        let attrs = Attributes::new().with("title", "say \"hi\"");
        let html = tag("span", &attrs, Markup::text("x"));
        assert_eq!(html.as_str(), "<span title=\"say &quot;hi&quot;\">x</span>");
    }

    #[test]
    fn test_tag_skips_empty_class() {
        let mut attrs = Attributes::new();
        attrs.replace("class", " ");
        attrs.set("id", "f");
        let html = tag("p", &attrs, Markup::raw("x"));
        assert_eq!(html.as_str(), "<p id=\"f\">x</p>");
    }

    #[test]
    fn test_tag_attribute_order() {
        let attrs = Attributes::new()
            .with("class", "field")
            .with("id", "x")
            .merge(&Attributes::new().with("class", "hint").with("id", "y"));
        let html = tag("div", &attrs, Markup::raw("c"));
        assert_eq!(html.as_str(), "<div class=\"field hint\" id=\"y\">c</div>");
    }
}
