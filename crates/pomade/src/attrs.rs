//! Terminal text attributes and the sparse layers that build them.
//!
//! Resolution works on two shapes: [`Attrs`] is the fully resolved record a
//! renderer consumes, and [`AttrsOverride`] is one cascade layer, where every
//! field is optional. Folding overrides onto a base realizes the cascade:
//! a set field overwrites, an unset field lets the value underneath survive.

use crate::color::Color;

/// Fully resolved attributes for a span of text.
///
/// Every field is concrete. The zero value (`Attrs::default()`) is unstyled
/// text with terminal-default colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attrs {
    pub color: Color,
    pub bgcolor: Color,
    pub bold: bool,
    pub underline: bool,
    pub italic: bool,
    pub blink: bool,
    pub reverse: bool,
}

/// One cascade layer, parsed from a style string.
///
/// `None` means the layer says nothing about that field, so an earlier
/// layer's value survives. This is what makes `"bold"` and `"nobold"`
/// different from saying nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrsOverride {
    pub color: Option<Color>,
    pub bgcolor: Option<Color>,
    pub bold: Option<bool>,
    pub underline: Option<bool>,
    pub italic: Option<bool>,
    pub blink: Option<bool>,
    pub reverse: Option<bool>,
}

impl AttrsOverride {
    /// An override with every field explicitly set to its default value.
    ///
    /// This is the `noinherit` base: applied like any other layer, it
    /// erases whatever the layers underneath had accumulated.
    pub fn reset() -> Self {
        Self {
            color: Some(Color::default()),
            bgcolor: Some(Color::default()),
            bold: Some(false),
            underline: Some(false),
            italic: Some(false),
            blink: Some(false),
            reverse: Some(false),
        }
    }

    /// True when the override sets no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the fields this override sets, leaving the rest alone.
    pub fn apply_to(&self, attrs: &mut Attrs) {
        if let Some(color) = &self.color {
            attrs.color = color.clone();
        }
        if let Some(bgcolor) = &self.bgcolor {
            attrs.bgcolor = bgcolor.clone();
        }
        if let Some(bold) = self.bold {
            attrs.bold = bold;
        }
        if let Some(underline) = self.underline {
            attrs.underline = underline;
        }
        if let Some(italic) = self.italic {
            attrs.italic = italic;
        }
        if let Some(blink) = self.blink {
            attrs.blink = blink;
        }
        if let Some(reverse) = self.reverse {
            attrs.reverse = reverse;
        }
    }
}
