use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Founder disposition on a match.
///
/// Refresh only ever writes `New`, and only on first insert. Every other
/// transition comes from the founder through [`parse_founder_action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    New,
    Interested,
    Saved,
    Declined,
}

impl MatchStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::New => "new",
            MatchStatus::Interested => "interested",
            MatchStatus::Saved => "saved",
            MatchStatus::Declined => "declined",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(MatchStatus::New),
            "interested" => Ok(MatchStatus::Interested),
            "saved" => Ok(MatchStatus::Saved),
            "declined" => Ok(MatchStatus::Declined),
            other => Err(CoreError::InvalidMatchStatus(other.to_string())),
        }
    }
}

/// Parse a founder-requested status change.
///
/// Only `interested`, `saved` and `declined` are accepted; a founder cannot
/// move a match back to `new`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidMatchStatus`] for any other value.
pub fn parse_founder_action(action: &str) -> Result<MatchStatus, CoreError> {
    match action.parse::<MatchStatus>() {
        Ok(MatchStatus::New) | Err(_) => Err(CoreError::InvalidMatchStatus(action.to_string())),
        Ok(status) => Ok(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn founder_actions_are_accepted() {
        assert_eq!(
            parse_founder_action("interested"),
            Ok(MatchStatus::Interested)
        );
        assert_eq!(parse_founder_action("saved"), Ok(MatchStatus::Saved));
        assert_eq!(parse_founder_action("declined"), Ok(MatchStatus::Declined));
    }

    #[test]
    fn unknown_action_is_invalid() {
        assert_eq!(
            parse_founder_action("ignored"),
            Err(CoreError::InvalidMatchStatus("ignored".to_string()))
        );
    }

    #[test]
    fn founder_cannot_reset_to_new() {
        assert!(parse_founder_action("new").is_err());
    }

    #[test]
    fn action_parsing_is_case_sensitive() {
        assert!(parse_founder_action("Interested").is_err());
    }

    #[test]
    fn status_strings_round_trip() {
        for status in [
            MatchStatus::New,
            MatchStatus::Interested,
            MatchStatus::Saved,
            MatchStatus::Declined,
        ] {
            assert_eq!(status.to_string().parse::<MatchStatus>(), Ok(status));
        }
    }
}
