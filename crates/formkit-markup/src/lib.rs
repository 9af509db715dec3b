/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Markup primitives for formkit.
//!
//! This crate is the boundary between the wrapper engine and HTML text. It
//! provides:
//!
//! - [`Markup`]: a trusted HTML fragment, where a zero-length fragment is the
//!   "empty" result that wrappers short-circuit on
//! - [`Attributes`]: an ordered attribute map with per-key merge rules
//!   (`class` tokens are unioned, everything else is last-write-wins)
//! - [`tag`]: element construction with escaped attribute values
//!
//! # Example
//!
//! ```
//! use formkit_markup::{Attributes, Markup, tag};
//!
//! let attrs = Attributes::new().with("class", "hint");
//! let html = tag("span", &attrs, Markup::text("a < b"));
//! assert_eq!(html.as_str(), r#"<span class="hint">a &lt; b</span>"#);
//! ```

pub mod attributes;
pub mod markup;
pub mod tag;

pub use attributes::{Attributes, CLASS};
pub use markup::{Markup, concat};
pub use tag::{escape_html, tag};
