//! Founder-investor compatibility scoring.
//!
//! Scores are additive: each satisfied criterion contributes its weight and,
//! for most criteria, a reason phrase. Criteria are evaluated in a fixed
//! order and reasons are emitted in that same order, so the joined reason
//! string is stable for a given pair of inputs.

use rust_decimal::Decimal;

use crate::attributes::{
    ActivityStatus, FounderAttributes, InvestorAttributes, PitchScore, VerificationStatus,
};

// ---------------------------------------------------------------------------
// Weight constants (must sum to exactly 100)
// ---------------------------------------------------------------------------

/// Founder stage appears in the investor's stage list.
pub const W_STAGE: i32 = 30;
/// Founder sector appears in the investor's sector focus.
pub const W_SECTOR: i32 = 25;
/// Founder's minimum check fits inside the investor's typical range.
pub const W_CHECK_SIZE: i32 = 15;
/// Founder country appears in the investor's geography focus.
pub const W_GEOGRAPHY: i32 = 10;
/// Investor is verified.
pub const W_VERIFIED: i32 = 6;
/// Investor is active.
pub const W_ACTIVE: i32 = 4;
/// Pitch readiness at or above [`STRONG_PITCH_MIN`].
pub const W_PITCH_STRONG: i32 = 10;
/// Pitch readiness at or above [`FAIR_PITCH_MIN`] but below strong.
pub const W_PITCH_FAIR: i32 = 5;

pub const STRONG_PITCH_MIN: u8 = 80;
pub const FAIR_PITCH_MIN: u8 = 60;

pub const MAX_SCORE: i32 =
    W_STAGE + W_SECTOR + W_CHECK_SIZE + W_GEOGRAPHY + W_VERIFIED + W_ACTIVE + W_PITCH_STRONG;

const _: () = assert!(MAX_SCORE == 100, "match weights must sum to exactly 100");

/// Pairs scoring below this are never persisted.
pub const DEFAULT_MATCH_THRESHOLD: i32 = 40;

pub const REASON_STAGE: &str = "stage alignment";
pub const REASON_SECTOR: &str = "sector alignment";
pub const REASON_CHECK_SIZE: &str = "check size compatibility";
pub const REASON_GEOGRAPHY: &str = "geographic focus";
pub const REASON_VERIFIED: &str = "verified investor";
pub const REASON_STRONG_PITCH: &str = "strong pitch readiness";

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Score and ordered justification for one founder-investor pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchScore {
    /// 0-100.
    pub score: i32,
    pub reasons: Vec<&'static str>,
}

impl MatchScore {
    /// Reasons joined with `", "`, as stored on the match row.
    #[must_use]
    pub fn reason_text(&self) -> String {
        self.reasons.join(", ")
    }

    #[must_use]
    pub fn qualifies(&self, threshold: i32) -> bool {
        self.score >= threshold
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub investor_id: i64,
    pub score: MatchScore,
}

/// Outcome of scoring one founder against a candidate set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateScores {
    /// Candidates at or above the threshold, in input order.
    pub qualifying: Vec<ScoredCandidate>,
    /// Count of eligible candidates that scored below the threshold.
    pub below_threshold: usize,
    /// Count of candidates dropped because they are not eligible.
    pub ineligible: usize,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score a founder against an investor mandate.
///
/// Missing or empty attributes fail their criterion; this never errors.
#[must_use]
pub fn score_match(
    founder: &FounderAttributes,
    investor: &InvestorAttributes,
    pitch: PitchScore,
) -> MatchScore {
    let mut score = 0;
    let mut reasons = Vec::new();

    if let (Some(stage), Some(stages)) = (
        non_empty(founder.stage.as_deref()),
        investor.investment_stage.as_deref(),
    ) {
        if stages.contains(stage) {
            score += W_STAGE;
            reasons.push(REASON_STAGE);
        }
    }

    if contains_ignore_case(
        investor.sector_focus.as_deref(),
        founder.sector.as_deref(),
    ) {
        score += W_SECTOR;
        reasons.push(REASON_SECTOR);
    }

    if check_size_fits(
        founder.min_check_size,
        investor.typical_check_min,
        investor.typical_check_max,
    ) {
        score += W_CHECK_SIZE;
        reasons.push(REASON_CHECK_SIZE);
    }

    if contains_ignore_case(
        investor.geography_focus.as_deref(),
        founder.country.as_deref(),
    ) {
        score += W_GEOGRAPHY;
        reasons.push(REASON_GEOGRAPHY);
    }

    if investor.verification_status == VerificationStatus::Verified {
        score += W_VERIFIED;
        reasons.push(REASON_VERIFIED);
    }

    if investor.activity_status == ActivityStatus::Active {
        score += W_ACTIVE;
    }

    if pitch.value() >= STRONG_PITCH_MIN {
        score += W_PITCH_STRONG;
        reasons.push(REASON_STRONG_PITCH);
    } else if pitch.value() >= FAIR_PITCH_MIN {
        score += W_PITCH_FAIR;
    }

    MatchScore { score, reasons }
}

/// Score a founder against every eligible investor and keep those at or
/// above `threshold`.
///
/// Ineligible investors (inactive or rejected) are counted but not scored.
#[must_use]
pub fn score_candidates(
    founder: &FounderAttributes,
    investors: &[InvestorAttributes],
    pitch: PitchScore,
    threshold: i32,
) -> CandidateScores {
    let mut out = CandidateScores::default();

    for investor in investors {
        if !investor.is_eligible() {
            out.ineligible += 1;
            continue;
        }

        let score = score_match(founder, investor, pitch);
        if score.qualifies(threshold) {
            out.qualifying.push(ScoredCandidate {
                investor_id: investor.investor_id,
                score,
            });
        } else {
            out.below_threshold += 1;
        }
    }

    out
}

/// Whitespace-only counts as absent; the value itself is compared untrimmed.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn contains_ignore_case(haystack: Option<&str>, needle: Option<&str>) -> bool {
    match (non_empty(haystack), non_empty(needle)) {
        (Some(haystack), Some(needle)) => haystack
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        _ => false,
    }
}

/// Zero amounts count as absent.
fn check_size_fits(
    founder_min: Option<Decimal>,
    investor_min: Option<Decimal>,
    investor_max: Option<Decimal>,
) -> bool {
    let present = |v: Option<Decimal>| v.filter(|d| !d.is_zero());
    match (
        present(founder_min),
        present(investor_min),
        present(investor_max),
    ) {
        (Some(ask), Some(min), Some(max)) => min <= ask && ask <= max,
        _ => false,
    }
}
