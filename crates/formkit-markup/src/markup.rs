/*
 * markup.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Trusted HTML fragments.
//!
//! Like a document tree with an `Empty` variant, a [`Markup`] value knows
//! whether it produces output at all. Concatenation is smart about empty
//! fragments so that skipped components never leave anything behind.

use std::fmt;

use crate::tag::escape_html;

/// A fragment of HTML that is safe to emit as-is.
///
/// A zero-length fragment is the empty result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// The empty fragment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap already-trusted HTML without escaping.
    pub fn raw(html: impl Into<String>) -> Self {
        Markup(html.into())
    }

    /// Escape plain text into a fragment.
    pub fn text(text: &str) -> Self {
        Markup(escape_html(text))
    }

    /// Check if this fragment produces no output.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Concatenate two fragments.
    ///
    /// Concatenating with an empty fragment returns the other one unchanged.
    pub fn concat(mut self, other: Markup) -> Self {
        self.push(&other);
        self
    }

    /// Append another fragment in place.
    pub fn push(&mut self, other: &Markup) {
        if self.0.is_empty() {
            self.0.clone_from(&other.0);
        } else {
            self.0.push_str(&other.0);
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

/// Concatenate fragments in order, skipping empty ones.
pub fn concat(fragments: impl IntoIterator<Item = Markup>) -> Markup {
    fragments
        .into_iter()
        .filter(|m| !m.is_empty())
        .fold(Markup::empty(), Markup::concat)
}
