//! Typed founder and investor attributes consumed by the scorer.
//!
//! Rows are decoded into these types once at the storage boundary; the
//! scorer never sees raw strings for the enum-valued columns.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Unverified,
    Verified,
    Rejected,
}

impl VerificationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VerificationStatus::Unverified => "unverified",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unverified" => Ok(VerificationStatus::Unverified),
            "verified" => Ok(VerificationStatus::Verified),
            "rejected" => Ok(VerificationStatus::Rejected),
            other => Err(CoreError::InvalidVerificationStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Active,
    Inactive,
}

impl ActivityStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityStatus::Active => "active",
            ActivityStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ActivityStatus::Active),
            "inactive" => Ok(ActivityStatus::Inactive),
            other => Err(CoreError::InvalidActivityStatus(other.to_string())),
        }
    }
}

/// Founder-side inputs to the scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FounderAttributes {
    pub founder_id: i64,
    pub stage: Option<String>,
    pub sector: Option<String>,
    pub country: Option<String>,
    pub min_check_size: Option<Decimal>,
}

/// Investor mandate inputs to the scorer.
///
/// `investment_stage`, `sector_focus` and `geography_focus` are free-text
/// blobs such as `"Seed, Series A"`; criteria match by substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestorAttributes {
    pub investor_id: i64,
    pub investment_stage: Option<String>,
    pub sector_focus: Option<String>,
    pub geography_focus: Option<String>,
    pub typical_check_min: Option<Decimal>,
    pub typical_check_max: Option<Decimal>,
    pub verification_status: VerificationStatus,
    pub activity_status: ActivityStatus,
}

impl InvestorAttributes {
    /// Active and not rejected. Unverified investors are eligible.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.activity_status == ActivityStatus::Active
            && self.verification_status != VerificationStatus::Rejected
    }
}

/// Pitch-readiness score, guaranteed to lie in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchScore(u8);

impl PitchScore {
    pub const MAX: u8 = 100;

    /// Build a score from a value already known to be small, capping at [`Self::MAX`].
    #[must_use]
    pub fn clamped(value: u8) -> Self {
        PitchScore(value.min(Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for PitchScore {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(PitchScore)
            .ok_or(CoreError::InvalidPitchScore(value))
    }
}

/// Parse a check-size amount such as `"50000"`, `"50,000"` or `"$1,500,000.00"`.
///
/// Commas, underscores, surrounding whitespace and a leading `$` are ignored.
///
/// # Errors
///
/// Returns [`CoreError::InvalidCheckSize`] for empty, non-numeric or negative input.
pub fn parse_check_size(raw: &str) -> Result<Decimal, CoreError> {
    let invalid = |reason: &str| CoreError::InvalidCheckSize {
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    if cleaned.is_empty() {
        return Err(invalid("empty value"));
    }

    let amount = Decimal::from_str(&cleaned).map_err(|e| invalid(&e.to_string()))?;
    if amount.is_sign_negative() {
        return Err(invalid("must not be negative"));
    }
    Ok(amount)
}
