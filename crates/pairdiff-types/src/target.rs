//! Comparison targets: the `{a,b}` placeholder syntax.
//!
//! A request path such as `updated/listings.do/api/Listing/{id1,id2}` names two
//! documents at once. The optional leading segment picks the [`DiffMode`]; the
//! rest is a template holding exactly one placeholder group, and each fragment
//! of the group is substituted in turn to produce the two URLs to fetch.
//!
//! Literal braces and commas inside fragments cannot be escaped.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{TargetError, TargetResult};
use crate::mode::DiffMode;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("placeholder pattern is valid"));

/// Split a slash-joined request path into its diff mode and template.
///
/// The first segment is consumed only when it names a mode; otherwise the
/// default mode is returned and the path is left whole.
pub fn split_mode(path: &str) -> (DiffMode, &str) {
    let path = path.trim_start_matches('/');
    let (head, rest) = path.split_once('/').unwrap_or((path, ""));
    match DiffMode::from_segment(head) {
        Some(mode) => (mode, rest),
        None => (DiffMode::default(), path),
    }
}

/// A parsed request: the diff mode plus a template naming two documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonTarget {
    mode: DiffMode,
    template: String,
    placeholder: String,
    fragments: [String; 2],
}

impl ComparisonTarget {
    /// Parse a full request path, including an optional leading mode segment.
    pub fn parse(path: &str) -> TargetResult<Self> {
        let (mode, template) = split_mode(path);
        Self::from_template(mode, template)
    }

    /// Parse a template that has already had its mode segment removed.
    pub fn from_template(mode: DiffMode, template: &str) -> TargetResult<Self> {
        let mut groups = PLACEHOLDER.captures_iter(template);
        let captures = groups.next().ok_or(TargetError::MissingComparisonTarget)?;
        let extra = groups.count();
        if extra > 0 {
            return Err(TargetError::AmbiguousComparisonTarget { groups: extra + 1 });
        }

        let placeholder = captures[0].to_string();
        let fragments: Vec<&str> = captures[1].split(',').collect();
        match fragments.as_slice() {
            [first, second] if !first.is_empty() && !second.is_empty() => Ok(Self {
                mode,
                template: template.to_string(),
                placeholder,
                fragments: [first.to_string(), second.to_string()],
            }),
            _ => Err(TargetError::InvalidComparisonTarget {
                found: fragments.len(),
            }),
        }
    }

    pub fn mode(&self) -> DiffMode {
        self.mode
    }

    /// The template with its placeholder group still in place.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The placeholder group as written, braces included.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn fragments(&self) -> (&str, &str) {
        (&self.fragments[0], &self.fragments[1])
    }

    /// The template with the placeholder group replaced by `fragment`.
    pub fn substitute(&self, fragment: &str) -> String {
        self.template.replacen(&self.placeholder, fragment, 1)
    }

    /// Both concrete paths, original first.
    pub fn paths(&self) -> [String; 2] {
        [self.substitute(&self.fragments[0]), self.substitute(&self.fragments[1])]
    }

    /// Both concrete URLs under `scheme` (normally `https`), original first.
    pub fn urls(&self, scheme: &str) -> [String; 2] {
        self.paths().map(|path| format!("{scheme}://{path}"))
    }
}
