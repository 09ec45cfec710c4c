#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]

//! # Pomade
//!
//! CSS-like style cascading for terminal applications.
//!
//! Styles are written as short token strings (`"bold #ff0044 bg:#1a1a1a"`),
//! organized into ordered rules keyed by class combinations, and resolved
//! against inline styles with last-wins precedence. Rules never overwrite
//! what they do not mention, so `"nobold"` and saying nothing are different
//! things.
//!
//! ## Quick Start
//!
//! ```rust
//! use pomade::{Attrs, StyleSheet};
//!
//! let sheet = StyleSheet::new([
//!     ("", "bg:#101010"),
//!     ("header", "bold #00aaff"),
//!     ("error header", "#ff0044 underline"),
//! ])?;
//!
//! let attrs = sheet.resolve("class:header,error italic", &Attrs::default())?;
//! assert!(attrs.bold && attrs.italic && attrs.underline);
//! assert_eq!(attrs.color.as_str(), "ff0044");
//! assert_eq!(attrs.bgcolor.as_str(), "101010");
//! # Ok::<(), pomade::StyleError>(())
//! ```
//!
//! ## Matching
//!
//! A rule keyed by several classes fires only when the query carries all of
//! them: `"error header"` styles headers that are also errors, and nothing
//! else. The rule keyed by the empty string applies everywhere. Within the
//! matches, definition order decides ties, and the inline string always has
//! the final say.
//!
//! ## Cache keys
//!
//! Sheets are immutable. [`StyleSheet::id`] returns a token that is unique
//! per compiled sheet, so renderers can memoize resolutions and drop them
//! when a new sheet shows up.

pub mod attrs;
pub mod color;
pub mod error;
pub mod parse;
pub mod stylesheet;

pub use attrs::{Attrs, AttrsOverride};
pub use color::{ANSI_COLOR_NAMES, Color};
pub use error::StyleError;
pub use parse::parse_style_str;
pub use stylesheet::{SheetId, StyleSheet};
