use color::DynamicColor;
use std::str::FromStr;

/// Wrapper around the `DynamicColor` type from the color crate.
/// Parses CSS color strings so ring definitions can use anything a
/// stylesheet could ("#4CAF50", "rgb(255, 0, 0)", "gold", ...).
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }
}

impl Default for Color {
    /// Rings without a configured color fall back to gray
    fn default() -> Self {
        Self {
            color: DynamicColor::from_str("gray").unwrap(),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_hex_colors() {
        assert!(Color::new("#4CAF50").is_ok());
        assert!(Color::new("#FF0000").is_ok());
    }

    #[test]
    fn test_parses_named_and_functional_colors() {
        assert!(Color::new("red").is_ok());
        assert!(Color::new("rgb(33, 150, 243)").is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_display_is_nonempty() {
        let color = Color::new("#FFC107").unwrap();
        assert!(!color.to_string().is_empty());
    }
}
