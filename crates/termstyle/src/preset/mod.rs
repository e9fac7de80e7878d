//! Presets: named prefix/suffix bundles and the registry that holds them.

mod config;
mod file;
mod registry;

pub use config::{Config, PresetConfig};
pub use file::{
    find_preset_file, load_presets, load_presets_file, parse_presets, PRESET_EXTENSIONS,
};
pub use registry::{add_preset, get_preset, has_preset, preset_names, PresetRegistry};

pub(crate) use registry::with_preset;
