use serde::Serialize;
use std::fmt;

///
/// DeletePolicy
///
/// On-delete behavior configured on a reverse relationship.
/// Closed set; raw rule tokens outside the set classify as `Unknown`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeletePolicy {
    Cascade,
    SetNull,
    DoNothing,
    Protect,
    Unknown,
}

impl DeletePolicy {
    /// Classify a raw on-delete rule token supplied by the host framework.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        match raw {
            "cascade" => Self::Cascade,
            "set_null" => Self::SetNull,
            "do_nothing" => Self::DoNothing,
            "protect" => Self::Protect,
            _ => Self::Unknown,
        }
    }

    /// Uppercase label used in blocking reasons and serialized views.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET_NULL",
            Self::DoNothing => "DO_NOTHING",
            Self::Protect => "PROTECT",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// True for policies whose dependents are gathered into the preview.
    #[must_use]
    pub const fn collects(self) -> bool {
        match self {
            Self::Cascade | Self::SetNull | Self::DoNothing | Self::Protect => true,
            Self::Unknown => false,
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_classify_exactly() {
        assert_eq!(DeletePolicy::classify("cascade"), DeletePolicy::Cascade);
        assert_eq!(DeletePolicy::classify("set_null"), DeletePolicy::SetNull);
        assert_eq!(DeletePolicy::classify("do_nothing"), DeletePolicy::DoNothing);
        assert_eq!(DeletePolicy::classify("protect"), DeletePolicy::Protect);
    }

    #[test]
    fn unrecognized_tokens_classify_as_unknown() {
        for raw in ["restrict", "set_default", "CASCADE", "", "cascade "] {
            assert_eq!(
                DeletePolicy::classify(raw),
                DeletePolicy::Unknown,
                "token {raw:?} should be unknown"
            );
        }
    }

    #[test]
    fn unknown_is_the_only_non_collecting_policy() {
        assert!(DeletePolicy::Cascade.collects());
        assert!(DeletePolicy::SetNull.collects());
        assert!(DeletePolicy::DoNothing.collects());
        assert!(DeletePolicy::Protect.collects());
        assert!(!DeletePolicy::Unknown.collects());
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(DeletePolicy::SetNull.to_string(), "SET_NULL");
        assert_eq!(DeletePolicy::Protect.label(), "PROTECT");
    }
}
