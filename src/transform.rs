//! The decorator pattern replaced by composed functions
//!
//! The object-oriented decorator wraps a value in layer after layer of
//! single-purpose classes. With first-class functions the layers are just
//! unary functions `Color -> Color`, and stacking them is a [`compose!`] or
//! [`pipe!`] expression instead of a tower of wrapper types.
//!
//! Transformers come in two shapes:
//!
//! - configured builders ([`brighten`], [`darken`]) that take their
//!   parameter up front and return the transformer, ready to compose;
//! - plain unary functions ([`negate`], [`grayscale`]) used directly.
//!
//! Channel arithmetic saturates, and channels are `u8`, so out-of-range
//! colors are unrepresentable rather than checked at runtime.
//!
//! # Example
//!
//! ```rust
//! use meander::pipe;
//! use meander::transform::{brighten, grayscale, negate, Color};
//!
//! let stone = Color::new(120, 100, 80);
//!
//! let ghost = pipe!(stone, grayscale, brighten(40), negate);
//! assert_eq!(ghost, Color::new(115, 115, 115));
//! ```

use std::fmt;

/// An immutable RGB color.
///
/// Copyable value type; every transformation returns a new color.
///
/// ```rust
/// use meander::Color;
///
/// let teal = Color::new(0, 128, 128);
/// assert_eq!(teal.green(), 128);
/// assert_eq!(teal.to_string(), "#008080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Create a color from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// The red channel.
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// The green channel.
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// The blue channel.
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Apply the same function to all three channels.
    ///
    /// The building block for channel-wise transformers:
    ///
    /// ```rust
    /// use meander::Color;
    ///
    /// let dimmed = Color::new(100, 200, 50).map_channels(|c| c / 2);
    /// assert_eq!(dimmed, Color::new(50, 100, 25));
    /// ```
    pub fn map_channels<F>(self, f: F) -> Self
    where
        F: Fn(u8) -> u8,
    {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Color", 3)?;
        state.serialize_field("red", &self.red)?;
        state.serialize_field("green", &self.green)?;
        state.serialize_field("blue", &self.blue)?;
        state.end()
    }
}

/// Build a transformer that raises every channel by `amount`, saturating
/// at white.
///
/// ```rust
/// use meander::transform::{brighten, Color};
///
/// let slightly = brighten(10);
/// assert_eq!(slightly(Color::new(100, 250, 0)), Color::new(110, 255, 10));
/// ```
pub fn brighten(amount: u8) -> impl Fn(Color) -> Color {
    move |color| color.map_channels(|channel| channel.saturating_add(amount))
}

/// Build a transformer that lowers every channel by `amount`, saturating
/// at black.
pub fn darken(amount: u8) -> impl Fn(Color) -> Color {
    move |color| color.map_channels(|channel| channel.saturating_sub(amount))
}

/// Invert every channel.
///
/// Applying `negate` twice restores the original color.
///
/// ```rust
/// use meander::transform::{negate, Color};
///
/// let ink = Color::new(10, 20, 30);
/// assert_eq!(negate(ink), Color::new(245, 235, 225));
/// assert_eq!(negate(negate(ink)), ink);
/// ```
pub fn negate(color: Color) -> Color {
    color.map_channels(|channel| u8::MAX - channel)
}

/// Collapse the color to its channel average.
///
/// ```rust
/// use meander::transform::{grayscale, Color};
///
/// assert_eq!(grayscale(Color::new(90, 120, 150)), Color::new(120, 120, 120));
/// ```
pub fn grayscale(color: Color) -> Color {
    let sum = u16::from(color.red) + u16::from(color.green) + u16::from(color.blue);
    let average = (sum / 3) as u8;
    Color::new(average, average, average)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_channels() {
        let color = Color::new(1, 2, 3);
        assert_eq!(color.red(), 1);
        assert_eq!(color.green(), 2);
        assert_eq!(color.blue(), 3);
    }

    #[test]
    fn test_map_channels_returns_new_color() {
        let original = Color::new(10, 20, 30);
        let doubled = original.map_channels(|c| c * 2);

        assert_eq!(doubled, Color::new(20, 40, 60));
        assert_eq!(original, Color::new(10, 20, 30));
    }

    #[test]
    fn test_brighten_saturates_at_white() {
        let nearly_white = Color::new(250, 250, 250);
        assert_eq!(brighten(20)(nearly_white), Color::new(255, 255, 255));
    }

    #[test]
    fn test_darken_saturates_at_black() {
        let nearly_black = Color::new(5, 5, 5);
        assert_eq!(darken(20)(nearly_black), Color::new(0, 0, 0));
    }

    #[test]
    fn test_brighten_then_darken_restores_away_from_saturation() {
        let mid = Color::new(100, 120, 140);
        let roundtrip = crate::compose!(darken(30), brighten(30));
        assert_eq!(roundtrip(mid), mid);
    }

    #[test]
    fn test_negate_is_an_involution() {
        for color in [
            Color::new(0, 0, 0),
            Color::new(255, 255, 255),
            Color::new(1, 128, 254),
        ] {
            assert_eq!(negate(negate(color)), color);
        }
    }

    #[test]
    fn test_grayscale_equalizes_channels() {
        let gray = grayscale(Color::new(10, 20, 33));
        assert_eq!(gray.red(), gray.green());
        assert_eq!(gray.green(), gray.blue());
        assert_eq!(gray.red(), 21);
    }

    #[test]
    fn test_grayscale_is_idempotent() {
        let once = grayscale(Color::new(90, 120, 150));
        assert_eq!(grayscale(once), once);
    }

    #[test]
    fn test_transformers_compose_like_decorators() {
        let color = Color::new(100, 100, 100);

        // wrap-order reading: negate(brighten(color))
        let stacked = crate::compose!(negate, brighten(50));
        assert_eq!(stacked(color), Color::new(105, 105, 105));

        // flow-order reading of the same stack
        assert_eq!(crate::pipe!(color, brighten(50), negate), stacked(color));
    }

    #[test]
    fn test_display_formats_lowercase_hex() {
        assert_eq!(Color::new(0, 128, 255).to_string(), "#0080ff");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_channels() {
        let json = serde_json::to_string(&Color::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"red":1,"green":2,"blue":3}"#);
    }
}
