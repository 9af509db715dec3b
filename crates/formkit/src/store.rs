/*
 * store.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Named contexts and per-scope activation.
//!
//! A [`ContextStore`] maps context names to complete configurations. It is
//! written during application setup and read afterwards. Which configuration
//! is *active* is not stored here: each thread has its own slot, set by
//! [`ContextStore::activate`] and restored when the returned guard drops, so
//! concurrent request scopes never see each other's choice.

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use formkit_markup::Markup;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::config::{Config, DEFAULT_WRAPPER};
use crate::error::{FormError, FormResult};
use crate::field::FieldContext;
use crate::wrapper::Wrapper;

/// Name of the context new contexts are cloned from.
pub const DEFAULT_CONTEXT: &str = DEFAULT_WRAPPER;

thread_local! {
    // Activations on this thread, innermost last. Each entry carries the id
    // of the guard that owns it.
    static ACTIVE: RefCell<Vec<(u64, Arc<Config>)>> = const { RefCell::new(Vec::new()) };
    static NEXT_ACTIVATION: Cell<u64> = const { Cell::new(0) };
}

/// Process-wide registry of named configurations.
#[derive(Debug)]
pub struct ContextStore {
    contexts: RwLock<IndexMap<String, Arc<Config>>>,
    configured: AtomicBool,
}

impl ContextStore {
    /// A store holding a fresh `default` context.
    pub fn new() -> Self {
        let mut contexts = IndexMap::new();
        contexts.insert(DEFAULT_CONTEXT.to_string(), Arc::new(Config::new()));
        Self {
            contexts: RwLock::new(contexts),
            configured: AtomicBool::new(false),
        }
    }

    /// Create or replace the configuration for `context`.
    ///
    /// The `default` context always starts from a fresh [`Config`]; any other
    /// context starts as a copy of `default` as it is when `setup` begins.
    /// `configure` then mutates it before it is stored.
    pub fn setup<F>(&self, context: &str, configure: F) -> Arc<Config>
    where
        F: FnOnce(&mut Config),
    {
        let base = match context {
            DEFAULT_CONTEXT => None,
            _ => self
                .contexts
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(DEFAULT_CONTEXT)
                .cloned(),
        };
        let mut config = match base {
            Some(default) => Config::clone(&default),
            None => Config::new(),
        };

        // No lock is held here, so `configure` may read or set up the store.
        configure(&mut config);

        tracing::debug!(context, wrappers = config.wrapper_mapping().len(), "Configured context");
        let config = Arc::new(config);
        self.contexts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(context.to_string(), Arc::clone(&config));
        self.configured.store(true, Ordering::Release);
        config
    }

    /// Whether `setup` has run at least once.
    pub fn is_configured(&self) -> bool {
        self.configured.load(Ordering::Acquire)
    }

    /// Look up a context without activating it.
    pub fn get(&self, context: &str) -> FormResult<Arc<Config>> {
        self.contexts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(context)
            .cloned()
            .ok_or_else(|| FormError::ContextNotFound {
                name: context.to_string(),
            })
    }

    /// Context names in setup order.
    pub fn context_names(&self) -> Vec<String> {
        self.contexts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Make `context` the active configuration for the current thread until
    /// the returned guard is dropped.
    pub fn activate(&self, context: &str) -> FormResult<ActiveConfig> {
        let config = self.get(context)?;
        tracing::debug!(context, "Activating context");
        Ok(ActiveConfig::enter(config))
    }
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for an activated configuration.
///
/// Dereferences to the activated [`Config`]. Dropping it removes this
/// activation only: the innermost activation still alive becomes current
/// again, whatever order guards are dropped in.
#[must_use = "the configuration is only active while the guard is alive"]
pub struct ActiveConfig {
    config: Arc<Config>,
    id: u64,
    // The entry lives in a thread-local stack, so the guard must stay on this thread.
    _not_send: PhantomData<*const ()>,
}

impl ActiveConfig {
    fn enter(config: Arc<Config>) -> Self {
        let id = NEXT_ACTIVATION.with(|next| {
            let id = next.get();
            next.set(id.wrapping_add(1));
            id
        });
        ACTIVE.with(|stack| stack.borrow_mut().push((id, Arc::clone(&config))));
        Self {
            config,
            id,
            _not_send: PhantomData,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

impl Deref for ActiveConfig {
    type Target = Config;

    fn deref(&self) -> &Config {
        &self.config
    }
}

impl Drop for ActiveConfig {
    fn drop(&mut self) {
        ACTIVE.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(index) = stack.iter().rposition(|(id, _)| *id == self.id) {
                stack.remove(index);
            }
        });
    }
}

/// The configuration active on the current thread.
pub fn current() -> FormResult<Arc<Config>> {
    ACTIVE
        .with(|stack| stack.borrow().last().map(|(_, config)| Arc::clone(config)))
        .ok_or(FormError::NoActiveConfig)
}

/// Run `f` against the active configuration.
pub fn with_current<T, F>(f: F) -> FormResult<T>
where
    F: FnOnce(&Config) -> T,
{
    current().map(|config| f(&config))
}

static STORE: Lazy<ContextStore> = Lazy::new(ContextStore::new);

/// The process-wide store behind the free functions.
pub fn store() -> &'static ContextStore {
    &STORE
}

/// [`ContextStore::setup`] on the process-wide store.
pub fn setup<F>(context: &str, configure: F) -> Arc<Config>
where
    F: FnOnce(&mut Config),
{
    STORE.setup(context, configure)
}

/// [`ContextStore::activate`] on the process-wide store.
pub fn activate(context: &str) -> FormResult<ActiveConfig> {
    STORE.activate(context)
}

/// Whether the process-wide store has been set up.
pub fn is_configured() -> bool {
    STORE.is_configured()
}

/// Look up a wrapper in the active configuration.
pub fn wrapper(name: &str) -> FormResult<Arc<Wrapper>> {
    current()?.wrapper(name)
}

/// Render a field with the active configuration.
///
/// `wrapper` picks a wrapper by name; `None` uses the wrapper mapped to the
/// field's input type or the configured default.
pub fn render(wrapper: Option<&str>, field: &FieldContext) -> FormResult<Markup> {
    current()?.render(wrapper, field)
}
