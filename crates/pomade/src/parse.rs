//! The style string interpreter.
//!
//! Style strings are whitespace separated tokens mixing attribute flags
//! (`bold`, `noblink`), colors (`#ff0044`, `bg:#1a1a1a`), and class
//! references (`class:header,accent`). Parsing yields the attribute override
//! the string spells out plus the class names it references; later tokens
//! win within a string.

use crate::attrs::AttrsOverride;
use crate::color::Color;
use crate::error::StyleError;

/// Parse a style string into an attribute override and referenced classes.
///
/// Recognized tokens:
/// - `bold`/`nobold`, `italic`/`noitalic`, `underline`/`nounderline`,
///   `blink`/`noblink`, `reverse`/`noreverse` set one flag on or off;
/// - `bg:<color>` sets the background, any other `<color>` token sets the
///   foreground (see [`Color::parse`] for the accepted forms);
/// - `class:a,b` records class references, lower-cased;
/// - `noinherit` anywhere makes the override start from an explicit
///   all-default base instead of an empty one, so it also erases what
///   earlier cascade layers had set;
/// - `roman`, `sans`, `mono`, `border:*`, and `[bracketed]` tokens are
///   accepted and ignored; they carry no terminal cell attribute.
///
/// Class references only make sense in inline style strings. With
/// `allow_class_refs` false (rule definitions) they are rejected.
///
/// # Errors
///
/// [`StyleError::InvalidColorFormat`] for an unparseable color token,
/// [`StyleError::UnexpectedClassReference`] for a `class:` token when
/// `allow_class_refs` is false, and [`StyleError::InvalidClassName`] for an
/// empty name inside a `class:` list.
#[allow(clippy::match_same_arms)] // Intentional: the no-op tokens are ignored for different reasons
pub fn parse_style_str(
    style_str: &str,
    allow_class_refs: bool,
) -> Result<(AttrsOverride, Vec<String>), StyleError> {
    let mut attrs = if style_str.split_whitespace().any(|part| part == "noinherit") {
        AttrsOverride::reset()
    } else {
        AttrsOverride::default()
    };
    let mut classes = Vec::new();

    for part in style_str.split_whitespace() {
        match part {
            // Already folded into the base above.
            "noinherit" => {}
            "bold" => attrs.bold = Some(true),
            "nobold" => attrs.bold = Some(false),
            "italic" => attrs.italic = Some(true),
            "noitalic" => attrs.italic = Some(false),
            "underline" => attrs.underline = Some(true),
            "nounderline" => attrs.underline = Some(false),
            "blink" => attrs.blink = Some(true),
            "noblink" => attrs.blink = Some(false),
            "reverse" => attrs.reverse = Some(true),
            "noreverse" => attrs.reverse = Some(false),
            // Font hints; a terminal cell has no font to vary.
            "roman" | "sans" | "mono" => {}
            _ if part.starts_with("border:") => {}
            _ if part.starts_with("class:") => {
                let names = &part["class:".len()..];
                if !allow_class_refs {
                    return Err(StyleError::UnexpectedClassReference(part.to_string()));
                }
                for name in names.split(',') {
                    if name.is_empty() {
                        return Err(StyleError::InvalidClassName(part.to_string()));
                    }
                    classes.push(name.to_lowercase());
                }
            }
            // Bracketed markers are internal bookkeeping, not attributes.
            _ if part.starts_with('[') && part.ends_with(']') => {}
            _ if part.starts_with("bg:") => {
                attrs.bgcolor = Some(Color::parse(&part["bg:".len()..])?);
            }
            _ => attrs.color = Some(Color::parse(part)?),
        }
    }

    Ok((attrs, classes))
}
