//! Composing presets into escape-coded strings.
//!
//! All prefix/suffix assembly happens here; the output functions only write
//! what [`render`] returns. Rendering is pure: the same preset and mode always
//! produce the same string, and empty style lists simply contribute nothing
//! (no bare `ESC[m` is ever emitted).
//!
//! ```rust
//! use termstyle::{render, Code, PresetConfig, PresetRegistry, RenderMode, StyleString};
//!
//! let mut registry = PresetRegistry::new();
//! registry
//!     .add(
//!         "error",
//!         PresetConfig::new().prefix(
//!             StyleString::new("[ERROR] ").pre(Code::Bright).pre(Code::ForegroundRed),
//!         ),
//!     )
//!     .unwrap();
//! let error = registry.get("error").unwrap();
//!
//! assert_eq!(render(error, RenderMode::Prefix), "\x1b[1m\x1b[31m[ERROR] ");
//! assert_eq!(render(error, RenderMode::Suffix), "\x1b[0m\n");
//! ```

use crate::preset::PresetConfig;
use crate::style::{Color, StyleString};

/// Which part of a preset to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Prefix followed by suffix.
    #[default]
    All,
    /// Only the prefix.
    Prefix,
    /// Only the suffix, including the optional trailing newline.
    Suffix,
}

/// Concatenates the escape sequence of each color, in order.
pub fn render_colors(colors: &[Color]) -> String {
    colors.iter().map(Color::escape).collect()
}

/// Renders prestyles, then the literal text, then poststyles.
pub fn render_style_string(style: &StyleString) -> String {
    let mut out = render_colors(&style.prestyles);
    out.push_str(&style.text);
    out.push_str(&render_colors(&style.poststyles));
    out
}

/// Renders a preset in the given mode.
///
/// The trailing newline, when enabled, is emitted once, at the very end of
/// the suffix.
pub fn render(preset: &PresetConfig, mode: RenderMode) -> String {
    match mode {
        RenderMode::Prefix => render_style_string(&preset.prefix),
        RenderMode::Suffix => {
            let mut out = render_style_string(&preset.suffix);
            if preset.config.trailing_newline {
                out.push('\n');
            }
            out
        }
        RenderMode::All => {
            let mut out = render(preset, RenderMode::Prefix);
            out.push_str(&render(preset, RenderMode::Suffix));
            out
        }
    }
}
