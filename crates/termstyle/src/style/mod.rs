//! Style encoding: colors, SGR codes and styled strings.

mod color;
mod string;

pub use color::{Code, Col256, ColRgb, Color, ColorMode};
pub use string::StyleString;
