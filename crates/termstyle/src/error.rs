//! Error types for preset registration, lookup and color construction.
//!
//! Every error here is a caller-input error: none of them are transient and
//! none are retried internally. They carry the offending key or value so the
//! host program can report it precisely.

use std::io;
use std::path::PathBuf;

/// Exit code for errors raised while building colors or parsing preset files.
pub const EXIT_INCORRECT_CONSTRUCTION: i32 = 100;
/// Exit code for [`Error::PresetNameUsed`].
pub const EXIT_PRESET_NAME_USED: i32 = 101;
/// Exit code for [`Error::PresetNotFound`].
pub const EXIT_PRESET_NOT_FOUND: i32 = 102;
/// Exit code for everything else (I/O failures).
pub const EXIT_OTHER: i32 = 200;

/// Errors that can occur when registering, loading or using presets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A preset with this name is already registered.
    #[error("Preset name \"{0}\" is already used.")]
    PresetNameUsed(String),

    /// No preset is registered under this name.
    #[error("Preset \"{0}\" not found.")]
    PresetNotFound(String),

    /// A 256-color id outside `0..=255`.
    #[error("Color id {0} is out of range (0-255).")]
    BadColorId(i64),

    /// A color value in a preset file that matches no known form.
    #[error("Invalid color '{value}'.")]
    InvalidColor { value: String },

    /// A preset file could not be parsed.
    #[error("Failed to parse presets{}: {}", location(.path), .message)]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// Writing styled output or reading a preset file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl Error {
    /// Create a parse error for inline (pathless) content.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            path: None,
            message: message.into(),
        }
    }

    /// The short, stable name of this error kind.
    pub fn name(&self) -> &'static str {
        match self {
            Error::PresetNameUsed(_) => "PresetNameUsed",
            Error::PresetNotFound(_) => "PresetNotFound",
            Error::BadColorId(_) => "BadColorID",
            Error::InvalidColor { .. } => "InvalidColor",
            Error::Parse { .. } => "Parse",
            Error::Io(_) => "Io",
        }
    }

    /// A process exit code suitable for `std::process::exit`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::PresetNameUsed(_) => EXIT_PRESET_NAME_USED,
            Error::PresetNotFound(_) => EXIT_PRESET_NOT_FOUND,
            Error::BadColorId(_) | Error::InvalidColor { .. } | Error::Parse { .. } => {
                EXIT_INCORRECT_CONSTRUCTION
            }
            Error::Io(_) => EXIT_OTHER,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
