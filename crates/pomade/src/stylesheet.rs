//! Ordered style rules and cascade resolution.
//!
//! A [`StyleSheet`] holds rules in definition order, each keyed by a class
//! combination. Resolution walks every rule whose combination is a subset of
//! the queried classes and folds the matches, in order, onto a default; the
//! inline style string is folded last. Later always wins, and fields a layer
//! leaves unset never overwrite what an earlier layer established.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace, warn};

use crate::attrs::{Attrs, AttrsOverride};
use crate::error::StyleError;
use crate::parse::parse_style_str;

/// Stable identity of a compiled [`StyleSheet`].
///
/// Renderers key memoized resolutions by this id. A rebuilt sheet gets a
/// fresh id, so stale cache entries are detected by a plain equality check.
/// Clones of a sheet share its id, since they hold identical rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(u64);

static NEXT_SHEET_ID: AtomicU64 = AtomicU64::new(1);

fn next_sheet_id() -> SheetId {
    SheetId(NEXT_SHEET_ID.fetch_add(1, Ordering::Relaxed))
}

/// Past this many queried classes the powerset gets noticeably expensive.
const POWERSET_WARN_THRESHOLD: usize = 12;

/// One rule: a canonical class combination and the override it applies.
#[derive(Debug, Clone)]
struct Rule {
    classes: Vec<String>,
    attrs: AttrsOverride,
}

/// An ordered list of style rules, resolved CSS-fashion.
///
/// Each rule pairs a class combination (a whitespace separated string of
/// class names; order and case do not matter) with a style string. Rules
/// defined later take priority over rules defined earlier.
///
/// # Example
///
/// ```rust
/// use pomade::{Attrs, StyleSheet};
///
/// let sheet = StyleSheet::new([
///     ("title", "#ff0000 bold underline"),
///     ("sidebar", "reverse"),
///     ("sidebar title", "nounderline"),
/// ])?;
///
/// let attrs = sheet.resolve("class:sidebar,title", &Attrs::default())?;
/// assert!(attrs.bold && attrs.reverse && !attrs.underline);
/// # Ok::<(), pomade::StyleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StyleSheet {
    rules: Vec<Rule>,
    id: SheetId,
}

impl StyleSheet {
    /// Compile an ordered list of `(class combination, style string)` rules.
    ///
    /// Combination keys are canonicalized: lower-cased, split on whitespace,
    /// sorted, and deduplicated. An empty key is the default rule, which
    /// applies to every query. Duplicate combinations are kept and all of
    /// them apply, still in definition order.
    ///
    /// Priority follows iteration order, so hand an ordered collection in;
    /// an unordered map forfeits control over which rule wins.
    ///
    /// # Errors
    ///
    /// Fails with the underlying [`StyleError`] when a style string does not
    /// parse, and with [`StyleError::UnexpectedClassReference`] when one
    /// contains a `class:` token.
    pub fn new<I, K, V>(rules: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for (combination, style_str) in rules {
            let (attrs, _) = parse_style_str(style_str.as_ref(), false)?;
            let mut classes: Vec<String> = combination
                .as_ref()
                .split_whitespace()
                .map(str::to_lowercase)
                .collect();
            classes.sort();
            classes.dedup();
            compiled.push(Rule { classes, attrs });
        }

        let id = next_sheet_id();
        debug!(
            sheet.id = id.0,
            sheet.rules = compiled.len(),
            "Style sheet compiled"
        );
        Ok(Self {
            rules: compiled,
            id,
        })
    }

    /// A sheet with no rules. Resolving against it applies only the inline
    /// style string on top of the provided default.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            id: next_sheet_id(),
        }
    }

    /// The sheet's identity token.
    pub fn id(&self) -> SheetId {
        self.id
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the sheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve an inline style string against the sheet's rules.
    ///
    /// The queried classes are the union of the inline string's `class:`
    /// references. Every rule whose combination is a subset of that set
    /// (including the empty combination) matches; matches apply in
    /// definition order on top of a copy of `default`, and the inline
    /// string's own attributes apply last.
    ///
    /// # Errors
    ///
    /// Fails with the underlying [`StyleError`] when the inline string does
    /// not parse. Rules never fail here; they were validated at
    /// construction.
    pub fn resolve(&self, style_str: &str, default: &Attrs) -> Result<Attrs, StyleError> {
        let (inline, mut classes) = parse_style_str(style_str, true)?;
        classes.sort();
        classes.dedup();

        if classes.len() > POWERSET_WARN_THRESHOLD {
            warn!(
                sheet.id = self.id.0,
                query.classes = classes.len(),
                "Resolving a large class set; subset enumeration grows exponentially"
            );
        }
        let combinations = powerset(&classes);

        let mut attrs = default.clone();
        let mut matched = 0usize;
        for rule in &self.rules {
            if combinations.contains(rule.classes.as_slice()) {
                rule.attrs.apply_to(&mut attrs);
                matched += 1;
            }
        }
        inline.apply_to(&mut attrs);

        trace!(
            sheet.id = self.id.0,
            query.classes = classes.len(),
            query.matched = matched,
            "Style resolved"
        );
        Ok(attrs)
    }
}

/// Every subset of `classes`, including the empty one. The input is sorted
/// and deduplicated, so each subset comes out in canonical order and can be
/// compared against stored rule combinations directly.
fn powerset(classes: &[String]) -> HashSet<Vec<String>> {
    let mut combinations = HashSet::with_capacity(1 << classes.len().min(16));
    combinations.insert(Vec::new());
    for class in classes {
        let extended: Vec<Vec<String>> = combinations
            .iter()
            .map(|combination| {
                let mut combination = combination.clone();
                combination.push(class.clone());
                combination
            })
            .collect();
        combinations.extend(extended);
    }
    combinations
}
