//! # termstyle - Named ANSI Style Presets
//!
//! `termstyle` lets command-line tools define named styling themes
//! ("presets") once and apply them wherever they write to the terminal,
//! instead of scattering escape sequences through the code.
//!
//! ## Core Concepts
//!
//! - [`Color`]: one SGR instruction, either a basic [`Code`], a 256-color
//!   [`Col256`] or a true color [`ColRgb`]
//! - [`StyleString`]: literal text framed by ordered pre/post style lists
//! - [`PresetConfig`]: a prefix and a suffix `StyleString` plus [`Config`] flags
//! - [`PresetRegistry`]: unique name → preset map; one instance is
//!   process-wide and backs [`add_preset`], [`print`] and [`style`]
//! - [`render`]: the single place prefixes and suffixes are composed
//! - [`ScopedPrint`]: writes the prefix on open and the suffix exactly once
//!   on close
//!
//! ## Quick Start
//!
//! ```rust
//! use termstyle::{add_preset, print_to, Code, PresetConfig, StyleString};
//!
//! let error = PresetConfig::new().prefix(
//!     StyleString::new("[ERROR] ")
//!         .pre(Code::Bright)
//!         .pre(Code::ForegroundRed),
//! );
//! add_preset("error", error).unwrap();
//!
//! let mut out = Vec::new();
//! print_to(&mut out, "error", "boom").unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "\x1b[1m\x1b[31m[ERROR] boom\x1b[0m\n"
//! );
//! ```
//!
//! Writing to the real terminal is the same call without the writer:
//! `termstyle::print("error", "boom")?`.
//!
//! ## Scoped Output
//!
//! ```rust,no_run
//! use termstyle::{add_preset, style, Code, Col256, Config, PresetConfig, StyleString};
//!
//! # fn main() -> termstyle::Result<()> {
//! let _guard = termstyle::init();
//!
//! add_preset(
//!     "input",
//!     PresetConfig::new()
//!         .prefix("Whatever you type will have a green background")
//!         .suffix(
//!             StyleString::new(" >> ")
//!                 .pre(Code::Flash)
//!                 .post(Code::FlashReset)
//!                 .post(Col256::background(28)?),
//!         )
//!         .config(Config {
//!             trailing_restore: false,
//!             trailing_newline: false,
//!             ..Config::default()
//!         }),
//! )?;
//!
//! let mut out = style("input")?;
//! out.print("ready")?;
//! out.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Preset Files
//!
//! Presets can also be loaded from YAML, see [`load_presets`] and
//! [`PresetRegistry::add_yaml`].

mod error;
pub mod output;
pub mod preset;
pub mod render;
pub mod style;

// Error type
pub use error::{
    Error, Result, EXIT_INCORRECT_CONSTRUCTION, EXIT_OTHER, EXIT_PRESET_NAME_USED,
    EXIT_PRESET_NOT_FOUND,
};

// Style exports
pub use style::{Code, Col256, ColRgb, Color, ColorMode, StyleString};

// Preset exports
pub use preset::{
    add_preset, find_preset_file, get_preset, has_preset, load_presets, load_presets_file,
    parse_presets, preset_names, Config, PresetConfig, PresetRegistry, PRESET_EXTENSIONS,
};

// Render exports
pub use render::{render, render_colors, render_style_string, RenderMode};

// Output exports
pub use output::{
    init, init_to, print, print_to, shutdown, shutdown_to, style, style_to, with_style,
    with_style_to, write_styled, ExitGuard, ScopedPrint,
};
