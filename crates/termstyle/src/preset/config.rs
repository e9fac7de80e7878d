//! Preset definitions: prefix, suffix and behavior flags.

use serde::Deserialize;

use crate::style::{Color, StyleString};

/// Per-preset behavior flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Emit a RESTORE before anything else in the prefix.
    pub leading_restore: bool,
    /// Emit a RESTORE after everything else in the suffix.
    pub trailing_restore: bool,
    /// Append `\n` once the suffix is fully rendered.
    pub trailing_newline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            leading_restore: false,
            trailing_restore: true,
            trailing_newline: true,
        }
    }
}

/// A reusable styling theme: what to emit before and after some content.
///
/// # Example
///
/// ```rust
/// use termstyle::{Code, Config, PresetConfig, StyleString};
///
/// let error = PresetConfig::new()
///     .prefix(StyleString::new("[ERROR] ").pre(Code::Bright).pre(Code::ForegroundRed));
///
/// let prompt = PresetConfig::new()
///     .suffix(StyleString::new(" >> ").pre(Code::Flash).post(Code::FlashReset))
///     .config(Config {
///         trailing_restore: false,
///         trailing_newline: false,
///         ..Config::default()
///     });
/// # let _ = (error, prompt);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetConfig {
    pub prefix: StyleString,
    pub suffix: StyleString,
    pub config: Config,
}

impl PresetConfig {
    /// Creates a preset with empty prefix and suffix and default flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix, returning `self` for chaining.
    pub fn prefix(mut self, prefix: impl Into<StyleString>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the suffix, returning `self` for chaining.
    pub fn suffix(mut self, suffix: impl Into<StyleString>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the behavior flags, returning `self` for chaining.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Folds the restore flags into the style lists.
    ///
    /// Runs once, at registration. A RESTORE already at the front of the
    /// prefix prestyles (or the end of the suffix poststyles) is not doubled.
    pub(crate) fn inject_restores(&mut self) {
        if self.config.leading_restore
            && !self.prefix.prestyles.first().is_some_and(Color::is_restore)
        {
            self.prefix.prestyles.insert(0, Color::RESTORE);
        }
        if self.config.trailing_restore
            && !self.suffix.poststyles.last().is_some_and(Color::is_restore)
        {
            self.suffix.poststyles.push(Color::RESTORE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Code;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(!config.leading_restore);
        assert!(config.trailing_restore);
        assert!(config.trailing_newline);
    }

    #[test]
    fn test_inject_leading_restore_goes_first() {
        let mut preset = PresetConfig::new()
            .prefix(StyleString::new("x").pre(Code::Bright))
            .config(Config {
                leading_restore: true,
                ..Config::default()
            });
        preset.inject_restores();
        assert_eq!(
            preset.prefix.prestyles,
            vec![Color::RESTORE, Color::Col16(Code::Bright)]
        );
    }

    #[test]
    fn test_inject_trailing_restore_goes_last() {
        let mut preset = PresetConfig::new().suffix(StyleString::new("y").post(Code::Underline));
        preset.inject_restores();
        assert_eq!(
            preset.suffix.poststyles,
            vec![Color::Col16(Code::Underline), Color::RESTORE]
        );
    }

    #[test]
    fn test_inject_is_idempotent() {
        let mut preset = PresetConfig::new().config(Config {
            leading_restore: true,
            trailing_restore: true,
            trailing_newline: false,
        });
        preset.inject_restores();
        preset.inject_restores();
        assert_eq!(preset.prefix.prestyles, vec![Color::RESTORE]);
        assert_eq!(preset.suffix.poststyles, vec![Color::RESTORE]);
    }

    #[test]
    fn test_inject_disabled_flags_leave_lists_alone() {
        let mut preset = PresetConfig::new().config(Config {
            leading_restore: false,
            trailing_restore: false,
            trailing_newline: true,
        });
        preset.inject_restores();
        assert!(preset.prefix.prestyles.is_empty());
        assert!(preset.suffix.poststyles.is_empty());
    }
}
