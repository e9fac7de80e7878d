//! Loading presets from YAML.
//!
//! A preset document maps preset names to preset definitions. Every field is
//! optional and falls back to its default; unknown keys are rejected.
//!
//! ```yaml
//! error:
//!   prefix:
//!     text: "[ERROR] "
//!     pre: [bright, foreground_red]
//!
//! input:
//!   prefix:
//!     text: "Whatever you type will have a green background"
//!   suffix:
//!     text: " >> "
//!     pre: [flash]
//!     post: [flash_reset, { bg: 28 }]
//!   config:
//!     trailing_restore: false
//!     trailing_newline: false
//! ```
//!
//! Loading is all-or-nothing: a syntax error, a bad color or a name collision
//! anywhere in the document leaves the registry untouched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::config::{Config, PresetConfig};
use super::registry::{global, PresetRegistry};
use crate::error::{Error, Result};
use crate::style::{Color, StyleString};

/// Recognized preset file extensions in priority order.
pub const PRESET_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

/// A preset as written in YAML. Colors stay raw until `resolve` so their
/// errors keep their own kind instead of becoming parse messages.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PresetDef {
    prefix: StyleDef,
    suffix: StyleDef,
    config: Config,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleDef {
    text: String,
    #[serde(alias = "prestyles")]
    pre: Vec<serde_yaml::Value>,
    #[serde(alias = "poststyles")]
    post: Vec<serde_yaml::Value>,
}

impl StyleDef {
    fn resolve(self) -> Result<StyleString> {
        Ok(StyleString {
            text: self.text,
            prestyles: resolve_colors(&self.pre)?,
            poststyles: resolve_colors(&self.post)?,
        })
    }
}

impl PresetDef {
    fn resolve(self) -> Result<PresetConfig> {
        Ok(PresetConfig::new()
            .prefix(self.prefix.resolve()?)
            .suffix(self.suffix.resolve()?)
            .config(self.config))
    }
}

fn resolve_colors(values: &[serde_yaml::Value]) -> Result<Vec<Color>> {
    values.iter().map(Color::parse_value).collect()
}

/// Parses a preset document without registering anything.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the YAML is malformed or a definition has
/// unknown keys, [`Error::BadColorId`] for a palette id outside `0..=255`, and
/// [`Error::InvalidColor`] for any other color that cannot be read.
pub fn parse_presets(yaml: &str) -> Result<BTreeMap<String, PresetConfig>> {
    parse_with_path(yaml, None)
}

fn parse_with_path(yaml: &str, path: Option<&Path>) -> Result<BTreeMap<String, PresetConfig>> {
    if yaml.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let defs: BTreeMap<String, PresetDef> =
        serde_yaml::from_str(yaml).map_err(|e| Error::Parse {
            path: path.map(Path::to_path_buf),
            message: e.to_string(),
        })?;

    defs.into_iter()
        .map(|(name, def)| {
            let preset = def.resolve().map_err(|e| {
                tracing::debug!(preset = %name, error = %e, "invalid color in preset");
                e
            })?;
            Ok((name, preset))
        })
        .collect()
}

fn read_presets(path: &Path) -> Result<BTreeMap<String, PresetConfig>> {
    let content = std::fs::read_to_string(path)?;
    let presets = parse_with_path(&content, Some(path))?;
    tracing::debug!(
        path = %path.display(),
        count = presets.len(),
        "loaded preset file"
    );
    Ok(presets)
}

impl PresetRegistry {
    /// Registers every preset defined in a YAML document.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`parse_presets`], or [`Error::PresetNameUsed`]
    /// on a name collision. Nothing is registered
    /// when an error is returned.
    pub fn add_yaml(&mut self, yaml: &str) -> Result<()> {
        let presets = parse_presets(yaml)?;
        self.add_all(presets)
    }

    /// Registers every preset defined in a YAML file.
    ///
    /// # Errors
    ///
    /// Same as [`add_yaml`](Self::add_yaml), plus [`Error::Io`] if the file
    /// cannot be read.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let presets = read_presets(path.as_ref())?;
        self.add_all(presets)
    }
}

/// Registers every preset in a YAML document with the process-wide registry.
///
/// # Errors
///
/// See [`PresetRegistry::add_yaml`].
pub fn load_presets(yaml: &str) -> Result<()> {
    let presets = parse_presets(yaml)?;
    global().add_all(presets)
}

/// Registers every preset in a YAML file with the process-wide registry.
///
/// # Errors
///
/// See [`PresetRegistry::add_file`].
pub fn load_presets_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let presets = read_presets(path.as_ref())?;
    global().add_all(presets)
}

/// Finds a preset file by base name in `dir`, trying each of
/// [`PRESET_EXTENSIONS`] in order.
pub fn find_preset_file<P: AsRef<Path>>(dir: P, name: &str) -> Option<PathBuf> {
    let dir = dir.as_ref();
    PRESET_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}{ext}")))
        .find(|candidate| candidate.is_file())
}
