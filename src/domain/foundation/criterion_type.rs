//! Criterion type value object (benefit or cost polarity).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity of a criterion: whether higher or lower values are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher values are better; the positive ideal is the maximum.
    Benefit,
    /// Lower values are better; the positive ideal is the minimum.
    Cost,
}

impl CriterionType {
    /// Parses the wire vocabulary ("benefit" / "cost").
    ///
    /// Returns `None` for anything else; callers turn that into an
    /// `InvalidCriterionType` validation error with the criterion's name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "benefit" => Some(CriterionType::Benefit),
            "cost" => Some(CriterionType::Cost),
            _ => None,
        }
    }

    /// Returns the wire-format string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionType::Benefit => "benefit",
            CriterionType::Cost => "cost",
        }
    }

    /// Returns true if higher values are better for this criterion.
    pub fn higher_is_better(&self) -> bool {
        matches!(self, CriterionType::Benefit)
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_wire_vocabulary() {
        assert_eq!(CriterionType::parse("benefit"), Some(CriterionType::Benefit));
        assert_eq!(CriterionType::parse("cost"), Some(CriterionType::Cost));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(CriterionType::parse("Benefit"), None);
        assert_eq!(CriterionType::parse("profit"), None);
        assert_eq!(CriterionType::parse(""), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for variant in [CriterionType::Benefit, CriterionType::Cost] {
            assert_eq!(CriterionType::parse(variant.as_str()), Some(variant));
        }
    }

    #[test]
    fn higher_is_better_only_for_benefit() {
        assert!(CriterionType::Benefit.higher_is_better());
        assert!(!CriterionType::Cost.higher_is_better());
    }

    #[test]
    fn displays_wire_format() {
        assert_eq!(format!("{}", CriterionType::Benefit), "benefit");
        assert_eq!(format!("{}", CriterionType::Cost), "cost");
    }

    #[test]
    fn serializes_to_lowercase_json() {
        assert_eq!(
            serde_json::to_string(&CriterionType::Benefit).unwrap(),
            "\"benefit\""
        );
        assert_eq!(serde_json::to_string(&CriterionType::Cost).unwrap(), "\"cost\"");
    }

    #[test]
    fn deserializes_from_lowercase_json() {
        let parsed: CriterionType = serde_json::from_str("\"cost\"").unwrap();
        assert_eq!(parsed, CriterionType::Cost);
    }
}
