//! Named preset storage.
//!
//! [`PresetRegistry`] is an additive-only map from preset name to
//! [`PresetConfig`]. Names are unique: registering a name twice is rejected
//! with [`Error::PresetNameUsed`] and the first preset is kept unchanged.
//! There is no update or removal.
//!
//! # Process-wide registry
//!
//! Most programs use the single process-wide registry through the free
//! functions [`add_preset`], [`get_preset`], [`has_preset`] and
//! [`preset_names`]. It starts out empty and lives until the process exits.
//! Access is serialized by a mutex, so registration from one thread and lookup
//! from another are safe.
//!
//! ```rust
//! use termstyle::{add_preset, get_preset, Code, Error, PresetConfig, StyleString};
//!
//! let warning = PresetConfig::new()
//!     .prefix(StyleString::new("[WARNING] ").pre(Code::Bright).pre(Code::ForegroundYellow));
//!
//! add_preset("doc-warning", warning.clone()).unwrap();
//! assert!(matches!(
//!     add_preset("doc-warning", warning),
//!     Err(Error::PresetNameUsed(_))
//! ));
//! assert!(get_preset("doc-warning").is_ok());
//! ```

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use super::config::PresetConfig;
use crate::error::{Error, Result};

/// An additive-only collection of named presets.
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: BTreeMap<String, PresetConfig>,
}

impl PresetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `config` under `name`.
    ///
    /// The registry stores its own copy, with the restore flags already folded
    /// into the style lists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PresetNameUsed`] if `name` is taken. The registry is
    /// left unchanged.
    pub fn add(&mut self, name: impl Into<String>, mut config: PresetConfig) -> Result<()> {
        let name = name.into();
        if self.presets.contains_key(&name) {
            tracing::debug!(preset = %name, "rejected duplicate preset");
            return Err(Error::PresetNameUsed(name));
        }
        config.inject_restores();
        tracing::debug!(preset = %name, "registered preset");
        self.presets.insert(name, config);
        Ok(())
    }

    /// Registers a batch of presets, all or nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PresetNameUsed`] for the first name that is already
    /// registered or repeated within the batch; nothing is inserted then.
    pub fn add_all<I, S>(&mut self, presets: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, PresetConfig)>,
        S: Into<String>,
    {
        let mut staged = self.clone();
        for (name, config) in presets {
            staged.add(name, config)?;
        }
        *self = staged;
        Ok(())
    }

    /// Looks up a preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PresetNotFound`] if no preset has this name.
    pub fn get(&self, name: &str) -> Result<&PresetConfig> {
        self.presets
            .get(name)
            .ok_or_else(|| Error::PresetNotFound(name.to_string()))
    }

    /// Checks if a preset exists in the registry.
    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Returns an iterator over all registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Returns the number of registered presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Returns true if no presets are registered.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

static PRESETS: Lazy<Mutex<PresetRegistry>> = Lazy::new(|| Mutex::new(PresetRegistry::new()));

/// Locks the process-wide registry.
///
/// Every mutation is a single map insert (or a whole-registry swap), so a
/// panic in another holder cannot leave it half-written; poisoning is ignored.
pub(crate) fn global() -> MutexGuard<'static, PresetRegistry> {
    PRESETS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs `f` against the named preset in the process-wide registry.
pub(crate) fn with_preset<R>(name: &str, f: impl FnOnce(&PresetConfig) -> R) -> Result<R> {
    let registry = global();
    registry.get(name).map(f)
}

/// Registers a preset in the process-wide registry.
///
/// # Errors
///
/// Returns [`Error::PresetNameUsed`] if `name` is already registered.
pub fn add_preset(name: impl Into<String>, config: PresetConfig) -> Result<()> {
    global().add(name, config)
}

/// Returns a copy of a preset from the process-wide registry, as stored
/// (restore flags already applied).
///
/// # Errors
///
/// Returns [`Error::PresetNotFound`] if no preset has this name.
pub fn get_preset(name: &str) -> Result<PresetConfig> {
    with_preset(name, PresetConfig::clone)
}

/// Checks whether the process-wide registry has a preset with this name.
pub fn has_preset(name: &str) -> bool {
    global().contains(name)
}

/// Lists the names in the process-wide registry, sorted.
pub fn preset_names() -> Vec<String> {
    global().names().map(str::to_string).collect()
}
