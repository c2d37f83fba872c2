//! CSS color handling for diagram styling.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Accepts any CSS color string such as `"#ff9900"`, `"rgb(255, 153, 0)"` or
/// `"orange"`.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color string.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected input if it is not a valid CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cloudgram_core::color::Color;
    /// let orange = Color::new("#ED7100").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// # let _ = orange;
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| format!("Invalid color '{color_str}': {err}"))
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}
