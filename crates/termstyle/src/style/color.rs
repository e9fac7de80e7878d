//! Color values and their ANSI SGR escape encodings.
//!
//! Three kinds of color are supported, unified by the [`Color`] sum type:
//!
//! - [`Code`]: one of the classic 16-color / attribute SGR codes (`ESC[31m`)
//! - [`Col256`]: an xterm 256-color palette entry (`ESC[38;5;208m`)
//! - [`ColRgb`]: a true color triple (`ESC[48;2;255;107;53m`)
//!
//! Every color renders to its own, independent escape sequence. Sequences are
//! never merged into a single SGR parameter list.
//!
//! # Example
//!
//! ```rust
//! use termstyle::{Code, Col256, ColRgb, Color, ColorMode};
//!
//! assert_eq!(Color::from(Code::ForegroundRed).escape(), "\x1b[31m");
//!
//! let orange = Col256::new(ColorMode::Foreground, 208).unwrap();
//! assert_eq!(Color::from(orange).escape(), "\x1b[38;5;208m");
//!
//! let rgb = ColRgb::new(ColorMode::Background, 255, 107, 53);
//! assert_eq!(rgb.to_string(), "\x1b[48;2;255;107;53m");
//!
//! assert!(Col256::new(ColorMode::Foreground, 300).is_err());
//! ```
//!
//! # Preset files
//!
//! In YAML preset files colors are written as:
//!
//! - a code name: `bright`, `foreground_red`, `FLASH_RESET`
//! - a 256-color entry: `{ fg: 208 }` or `{ bg: 28 }`
//! - an RGB color: `{ fg: [255, 107, 53] }` or `{ bg: "#ff6b35" }`

use std::fmt;

use crate::error::{Error, Result};

/// ANSI SGR codes for attributes and the 16 basic colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Code {
    Restore = 0,
    Bright = 1,
    Dim = 2,
    Italic = 3,
    Underline = 4,
    Flash = 5,
    Reverse = 7,
    Hidden = 8,
    Strike = 9,

    /// Resets both bright and dim.
    BrightReset = 22,
    ItalicReset = 23,
    UnderlineReset = 24,
    FlashReset = 25,
    ReverseReset = 27,
    HiddenReset = 28,
    StrikeReset = 29,

    ForegroundBlack = 30,
    ForegroundRed = 31,
    ForegroundGreen = 32,
    ForegroundYellow = 33,
    ForegroundBlue = 34,
    ForegroundPurple = 35,
    ForegroundCyan = 36,
    ForegroundWhite = 37,
    ForegroundReset = 39,

    BackgroundBlack = 40,
    BackgroundRed = 41,
    BackgroundGreen = 42,
    BackgroundYellow = 43,
    BackgroundBlue = 44,
    BackgroundPurple = 45,
    BackgroundCyan = 46,
    BackgroundWhite = 47,
    BackgroundReset = 49,
}

impl Code {
    /// SGR 22 resets dim as well as bright.
    pub const DIM_RESET: Code = Code::BrightReset;

    /// The numeric SGR parameter.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Looks up a code by its snake-case name, ignoring case.
    ///
    /// Accepts `"bright"`, `"FOREGROUND_RED"`, `"dim_reset"` and so on.
    pub fn from_name(name: &str) -> Option<Self> {
        let code = match name.trim().to_ascii_lowercase().as_str() {
            "restore" => Code::Restore,
            "bright" => Code::Bright,
            "dim" => Code::Dim,
            "italic" => Code::Italic,
            "underline" => Code::Underline,
            "flash" => Code::Flash,
            "reverse" => Code::Reverse,
            "hidden" => Code::Hidden,
            "strike" => Code::Strike,
            "bright_reset" | "dim_reset" => Code::BrightReset,
            "italic_reset" => Code::ItalicReset,
            "underline_reset" => Code::UnderlineReset,
            "flash_reset" => Code::FlashReset,
            "reverse_reset" => Code::ReverseReset,
            "hidden_reset" => Code::HiddenReset,
            "strike_reset" => Code::StrikeReset,
            "foreground_black" => Code::ForegroundBlack,
            "foreground_red" => Code::ForegroundRed,
            "foreground_green" => Code::ForegroundGreen,
            "foreground_yellow" => Code::ForegroundYellow,
            "foreground_blue" => Code::ForegroundBlue,
            "foreground_purple" => Code::ForegroundPurple,
            "foreground_cyan" => Code::ForegroundCyan,
            "foreground_white" => Code::ForegroundWhite,
            "foreground_reset" => Code::ForegroundReset,
            "background_black" => Code::BackgroundBlack,
            "background_red" => Code::BackgroundRed,
            "background_green" => Code::BackgroundGreen,
            "background_yellow" => Code::BackgroundYellow,
            "background_blue" => Code::BackgroundBlue,
            "background_purple" => Code::BackgroundPurple,
            "background_cyan" => Code::BackgroundCyan,
            "background_white" => Code::BackgroundWhite,
            "background_reset" => Code::BackgroundReset,
            _ => return None,
        };
        Some(code)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.value())
    }
}

/// Whether an extended color applies to the foreground or the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorMode {
    Foreground = 38,
    Background = 48,
}

impl ColorMode {
    /// The numeric SGR parameter (38 or 48).
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// An entry of the xterm 256-color palette.
///
/// The id is validated on construction, so a `Col256` value always holds an
/// id in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Col256 {
    mode: ColorMode,
    id: u8,
}

impl Col256 {
    /// Creates a palette color, failing with [`Error::BadColorId`] if `id` is
    /// outside `0..=255`.
    pub fn new(mode: ColorMode, id: impl Into<i64>) -> Result<Self> {
        let id = id.into();
        let id = u8::try_from(id).map_err(|_| Error::BadColorId(id))?;
        Ok(Self { mode, id })
    }

    /// Foreground palette color.
    pub fn foreground(id: impl Into<i64>) -> Result<Self> {
        Self::new(ColorMode::Foreground, id)
    }

    /// Background palette color.
    pub fn background(id: impl Into<i64>) -> Result<Self> {
        Self::new(ColorMode::Background, id)
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn id(&self) -> u8 {
        self.id
    }
}

impl fmt::Display for Col256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{};5;{}m", self.mode.value(), self.id)
    }
}

/// A true color (24-bit) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColRgb {
    pub mode: ColorMode,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColRgb {
    pub fn new(mode: ColorMode, r: u8, g: u8, b: u8) -> Self {
        Self { mode, r, g, b }
    }

    /// Parses a `#rrggbb` or `#rgb` hex code. The leading `#` is optional.
    pub fn from_hex(mode: ColorMode, hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor {
            value: hex.to_string(),
        };
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match digits.len() {
            // #rgb -> #rrggbb
            3 => Ok(Self::new(
                mode,
                channel(&digits[0..1])? * 17,
                channel(&digits[1..2])? * 17,
                channel(&digits[2..3])? * 17,
            )),
            6 => Ok(Self::new(
                mode,
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ColRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\x1b[{};2;{};{};{}m",
            self.mode.value(),
            self.r,
            self.g,
            self.b
        )
    }
}

/// A single styling instruction: a basic code, a palette color, or an RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Col16(Code),
    Col256(Col256),
    Rgb(ColRgb),
}

impl Color {
    /// Resets all attributes (`ESC[0m`).
    pub const RESTORE: Color = Color::Col16(Code::Restore);

    /// The escape sequence for this color.
    pub fn escape(&self) -> String {
        self.to_string()
    }

    /// True if this is the bare RESTORE code.
    pub fn is_restore(&self) -> bool {
        matches!(self, Color::Col16(Code::Restore))
    }

    /// Parses a color from a YAML value.
    ///
    /// Supports:
    /// - Strings: code names (`bright`, `foreground_red`)
    /// - Mappings with a single `fg`/`bg` key whose value is a palette index,
    ///   an `[r, g, b]` sequence, or a hex string
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self> {
        use serde_yaml::Value;

        match value {
            Value::String(name) => Code::from_name(name)
                .map(Color::Col16)
                .ok_or_else(|| invalid_color(value)),
            Value::Mapping(map) if map.len() == 1 => {
                let (key, inner) = map.iter().next().ok_or_else(|| invalid_color(value))?;
                let mode = match key.as_str() {
                    Some("fg") | Some("foreground") => ColorMode::Foreground,
                    Some("bg") | Some("background") => ColorMode::Background,
                    _ => return Err(invalid_color(value)),
                };
                Self::parse_extended(mode, inner)
            }
            _ => Err(invalid_color(value)),
        }
    }

    fn parse_extended(mode: ColorMode, value: &serde_yaml::Value) -> Result<Self> {
        use serde_yaml::Value;

        match value {
            Value::Number(n) => {
                let id = n.as_i64().ok_or_else(|| invalid_color(value))?;
                Ok(Color::Col256(Col256::new(mode, id)?))
            }
            Value::String(hex) => Ok(Color::Rgb(ColRgb::from_hex(mode, hex)?)),
            Value::Sequence(seq) if seq.len() == 3 => {
                let mut channels = [0u8; 3];
                for (slot, v) in channels.iter_mut().zip(seq) {
                    *slot = v
                        .as_u64()
                        .and_then(|n| u8::try_from(n).ok())
                        .ok_or_else(|| invalid_color(value))?;
                }
                let [r, g, b] = channels;
                Ok(Color::Rgb(ColRgb::new(mode, r, g, b)))
            }
            _ => Err(invalid_color(value)),
        }
    }
}

fn invalid_color(value: &serde_yaml::Value) -> Error {
    let value = serde_yaml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| format!("{:?}", value));
    Error::InvalidColor { value }
}

impl TryFrom<serde_yaml::Value> for Color {
    type Error = Error;

    fn try_from(value: serde_yaml::Value) -> Result<Self> {
        Color::parse_value(&value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Col16(code) => fmt::Display::fmt(code, f),
            Color::Col256(col) => fmt::Display::fmt(col, f),
            Color::Rgb(col) => fmt::Display::fmt(col, f),
        }
    }
}

impl From<Code> for Color {
    fn from(code: Code) -> Self {
        Color::Col16(code)
    }
}

impl From<Col256> for Color {
    fn from(col: Col256) -> Self {
        Color::Col256(col)
    }
}

impl From<ColRgb> for Color {
    fn from(col: ColRgb) -> Self {
        Color::Rgb(col)
    }
}
