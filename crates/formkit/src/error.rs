/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for wrapper configuration and rendering.
//!
//! Every failure here is a deterministic configuration error, so nothing is
//! retried: errors propagate to the caller.

use thiserror::Error;

/// Errors that can occur while configuring or rendering wrappers.
#[derive(Debug, Error)]
pub enum FormError {
    /// `Config::wrapper` was asked for a name that is not in the mapping.
    #[error("Couldn't find wrapper with name {name}")]
    WrapperNotFound { name: String },

    /// A leaf names a component that is not registered.
    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },

    /// Rendering or a delegated accessor was used before `activate`.
    #[error("No active configuration; call activate() for this scope first")]
    NoActiveConfig,

    /// `activate` was asked for a context that was never set up.
    #[error("Context not found: {name}")]
    ContextNotFound { name: String },

    /// A YAML wrapper definition is structurally invalid.
    #[error("Invalid wrapper definition: {message}")]
    InvalidDefinition { message: String },

    /// YAML syntax or shape error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error (e.g., reading a definition file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for formkit operations.
pub type FormResult<T> = Result<T, FormError>;
