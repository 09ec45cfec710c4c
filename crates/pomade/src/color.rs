//! Color values as they appear in style strings.
//!
//! A [`Color`] is a validated value: unset (the terminal default), the
//! literal `default`, one of the sixteen ANSI palette names, or a six
//! character RGB string. Palette names and RGB values are written with a
//! leading `#` in style strings (`#blue`, `#ff8800`) but stored without it.

use std::fmt;

use crate::error::StyleError;

/// The ANSI palette names accepted after a `#` prefix in style strings
/// (`#red`, `#brightblue`), plus `default` for the terminal default color.
pub const ANSI_COLOR_NAMES: [&str; 17] = [
    "default",
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "brightblack",
    "brightred",
    "brightgreen",
    "brightyellow",
    "brightblue",
    "brightmagenta",
    "brightcyan",
    "brightwhite",
];

/// A validated color value.
///
/// The unset color (`Color::default()`) means "no explicit color"; renderers
/// fall back to whatever the terminal or surrounding context provides.
///
/// # Example
///
/// ```rust
/// use pomade::Color;
///
/// let coral = Color::parse("#ff7f50")?;
/// assert_eq!(coral.as_rgb(), Some((255, 127, 80)));
///
/// let named = Color::parse("#brightcyan")?;
/// assert!(named.is_named());
/// # Ok::<(), pomade::StyleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color(String);

impl Color {
    /// Parse a color token from a style string.
    ///
    /// Accepted forms:
    /// - `""` and `"default"` pass through unchanged,
    /// - `#` followed by a palette name (`#red`) stores the bare name,
    /// - `#` followed by six characters stores them as-is,
    /// - `#` followed by three characters doubles each one in place, so
    ///   `#f80` stores `ff8800`.
    ///
    /// Six and three character forms are accepted by length alone;
    /// [`as_rgb`](Self::as_rgb) reports whether the stored value actually
    /// decodes as hex.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColorFormat`] for anything else,
    /// including palette names missing their `#` prefix.
    pub fn parse(text: &str) -> Result<Self, StyleError> {
        if text.is_empty() || text == "default" {
            return Ok(Self(text.to_string()));
        }
        if let Some(body) = text.strip_prefix('#') {
            if ANSI_COLOR_NAMES.contains(&body) {
                return Ok(Self(body.to_string()));
            }
            match body.chars().count() {
                6 => return Ok(Self(body.to_string())),
                3 => return Ok(Self(body.chars().flat_map(|c| [c, c]).collect())),
                _ => {}
            }
        }
        Err(StyleError::InvalidColorFormat(text.to_string()))
    }

    /// The stored value: `""`, `"default"`, a palette name, or six
    /// characters of RGB.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no explicit color is set.
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the value is an ANSI palette name (including `default`).
    pub fn is_named(&self) -> bool {
        !self.0.is_empty() && ANSI_COLOR_NAMES.contains(&self.0.as_str())
    }

    /// Decode a six character RGB value into its channels.
    ///
    /// Returns `None` for unset and named values, and for stored values
    /// that are not actually hex.
    pub fn as_rgb(&self) -> Option<(u8, u8, u8)> {
        // A six byte value is all ASCII, so the slicing below is safe.
        if self.0.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&self.0[0..2], 16).ok()?;
        let g = u8::from_str_radix(&self.0[2..4], 16).ok()?;
        let b = u8::from_str_radix(&self.0[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

impl fmt::Display for Color {
    /// Writes the style-string spelling: palette names and RGB values get
    /// their `#` prefix back, so the output parses to an equal color.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() || self.0 == "default" {
            f.write_str(&self.0)
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = StyleError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl From<Color> for String {
    /// The style-string spelling, matching [`Color`]'s `Display` output.
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
