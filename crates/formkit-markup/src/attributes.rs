/*
 * attributes.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Ordered HTML attribute maps with explicit merge semantics.
//!
//! Merging is not a generic map merge. The strategy is decided per key:
//!
//! - `class` is a token list; merging appends tokens that are not already
//!   present (set union, base order first)
//! - every other key is last-write-wins, keeping the position of the base key

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The attribute key whose values are unioned on merge.
pub const CLASS: &str = "class";

/// HTML attributes in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. `class` values go through [`Attributes::add_class`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert a value with merge semantics for `name`.
    ///
    /// For `class` the tokens are unioned into the existing list; for any
    /// other key the value replaces the previous one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if name == CLASS {
            self.add_class(&value);
        } else {
            self.entries.insert(name, value);
        }
    }

    /// Replace a value outright, including `class`.
    pub fn replace(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The class tokens, in order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get(CLASS).unwrap_or_default().split_whitespace()
    }

    /// Union whitespace-separated class tokens into the class list.
    pub fn add_class(&mut self, tokens: &str) {
        let current = self.entries.entry(CLASS.to_string()).or_default();
        for token in tokens.split_whitespace() {
            if current.split_whitespace().any(|existing| existing == token) {
                continue;
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(token);
        }
    }

    /// Merge `overrides` on top of these attributes, returning a new map.
    ///
    /// `{class: "field", id: "x"}` merged with `{class: "hint", id: "y"}`
    /// gives `{class: "field hint", id: "y"}`.
    pub fn merge(&self, overrides: &Attributes) -> Attributes {
        let mut merged = self.clone();
        merged.merge_from(overrides);
        merged
    }

    /// In-place version of [`Attributes::merge`].
    pub fn merge_from(&mut self, overrides: &Attributes) {
        for (name, value) in overrides.iter() {
            self.set(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}
