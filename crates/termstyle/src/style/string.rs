//! Literal text framed by ordered style lists.

use super::color::Color;

/// A piece of literal text with the styles emitted before and after it.
///
/// Order matters: each prestyle is emitted, in list order, before `text`, and
/// each poststyle after it.
///
/// ```rust
/// use termstyle::{Code, StyleString};
///
/// let tag = StyleString::new("[DEBUG] ")
///     .pre(Code::Dim)
///     .pre(Code::ForegroundCyan)
///     .post(Code::DIM_RESET);
///
/// assert_eq!(tag.prestyles.len(), 2);
/// assert_eq!(tag.poststyles.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleString {
    pub text: String,
    pub prestyles: Vec<Color>,
    pub poststyles: Vec<Color>,
}

impl StyleString {
    /// Creates an unstyled string.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Appends a prestyle, returning `self` for chaining.
    pub fn pre(mut self, color: impl Into<Color>) -> Self {
        self.prestyles.push(color.into());
        self
    }

    /// Appends a poststyle, returning `self` for chaining.
    pub fn post(mut self, color: impl Into<Color>) -> Self {
        self.poststyles.push(color.into());
        self
    }

    /// True if there is neither text nor any style.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.prestyles.is_empty() && self.poststyles.is_empty()
    }
}

impl From<&str> for StyleString {
    fn from(text: &str) -> Self {
        StyleString::new(text)
    }
}

impl From<String> for StyleString {
    fn from(text: String) -> Self {
        StyleString::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Code, Col256};

    #[test]
    fn test_builder_keeps_order() {
        let s = StyleString::new("x")
            .pre(Code::Bright)
            .pre(Col256::foreground(208).unwrap())
            .post(Code::Restore);
        assert_eq!(
            s.prestyles,
            vec![
                Color::Col16(Code::Bright),
                Color::Col256(Col256::foreground(208).unwrap())
            ]
        );
        assert_eq!(s.poststyles, vec![Color::RESTORE]);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(StyleString::default().is_empty());
        assert!(!StyleString::from("a").is_empty());
        assert!(!StyleString::default().pre(Code::Dim).is_empty());
    }
}
