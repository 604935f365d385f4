use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// Which view of the change set a comparison returns.
///
/// The set is closed: a leading path segment that is not one of these names
/// is never turned into a mode, it stays part of the template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Paths present only in the target document.
    Added,
    /// Paths present only in the original document.
    Deleted,
    /// Paths present in both whose values differ.
    Updated,
    /// `added`, `deleted` and `updated` side by side.
    #[default]
    Detailed,
}

impl DiffMode {
    pub const ALL: [DiffMode; 4] = [Self::Added, Self::Deleted, Self::Updated, Self::Detailed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Updated => "updated",
            Self::Detailed => "detailed",
        }
    }

    /// Look up a mode by its path-segment name. Case-sensitive.
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == segment)
    }
}

impl fmt::Display for DiffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiffMode {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_segment(s).ok_or_else(|| TargetError::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_detailed() {
        assert_eq!(DiffMode::default(), DiffMode::Detailed);
    }

    #[test]
    fn segment_lookup() {
        assert_eq!(DiffMode::from_segment("added"), Some(DiffMode::Added));
        assert_eq!(DiffMode::from_segment("deleted"), Some(DiffMode::Deleted));
        assert_eq!(DiffMode::from_segment("updated"), Some(DiffMode::Updated));
        assert_eq!(DiffMode::from_segment("detailed"), Some(DiffMode::Detailed));
        assert_eq!(DiffMode::from_segment("Added"), None);
        assert_eq!(DiffMode::from_segment("listings.do"), None);
    }

    #[test]
    fn parse_unknown_mode() {
        let err = "everything".parse::<DiffMode>().unwrap_err();
        assert_eq!(err, TargetError::UnknownMode("everything".into()));
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        for mode in DiffMode::ALL {
            assert_eq!(mode.to_string().parse::<DiffMode>().unwrap(), mode);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&DiffMode::Updated).unwrap(), "\"updated\"");
        let mode: DiffMode = serde_json::from_str("\"added\"").unwrap();
        assert_eq!(mode, DiffMode::Added);
    }
}
