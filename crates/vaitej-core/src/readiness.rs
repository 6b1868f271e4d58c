//! Profile completion and pitch-readiness heuristics for founders.
//!
//! The pitch score produced here is one possible input to the scorer; the
//! scorer itself treats it as an opaque value in `0..=100`.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::attributes::PitchScore;

const P_COMPANY_NAME: u8 = 10;
const P_STAGE: u8 = 15;
const P_SECTOR: u8 = 15;
const P_BUSINESS_MODEL: u8 = 15;
const P_ACTIVELY_RAISING: u8 = 15;
const P_FOUNDING_YEAR: u8 = 10;
const P_COMPLETE_PROFILE: u8 = 20;

const _: () = assert!(
    P_COMPANY_NAME
        + P_STAGE
        + P_SECTOR
        + P_BUSINESS_MODEL
        + P_ACTIVELY_RAISING
        + P_FOUNDING_YEAR
        + P_COMPLETE_PROFILE
        == 100,
    "pitch readiness points must sum to exactly 100"
);

/// Completion percentage at which the profile counts as complete.
pub const COMPLETE_PROFILE_MIN: u8 = 80;
const INVESTOR_READY_MIN: u8 = 80;
const GOOD_PITCH_MIN: u8 = 50;
const OUTREACH_PITCH_MIN: u8 = 70;

pub const ALERT_INCOMPLETE: &str = "Complete your profile to increase investor visibility.";
pub const ALERT_WEAK_PITCH: &str = "Your pitch is decent, but missing key investor signals.";
pub const ALERT_READY: &str = "Your profile is investor-ready. Start outreach.";

/// The founder profile fields the heuristics look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FounderProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub company_name: Option<String>,
    pub founding_year: Option<i32>,
    pub stage: Option<String>,
    pub sector: Option<String>,
    pub business_model: Option<String>,
    pub actively_raising: bool,
    pub raise_target: Option<Decimal>,
    pub raise_raised: Option<Decimal>,
    pub fundraising_start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PitchLabel {
    #[serde(rename = "Investor-Ready")]
    InvestorReady,
    Good,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl std::fmt::Display for PitchLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PitchLabel::InvestorReady => write!(f, "Investor-Ready"),
            PitchLabel::Good => write!(f, "Good"),
            PitchLabel::NeedsWork => write!(f, "Needs Work"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessReport {
    pub completion_percent: u8,
    pub missing_fields: Vec<&'static str>,
    pub pitch_score: PitchScore,
    pub pitch_label: PitchLabel,
    pub alert: &'static str,
    /// Raised / target as a truncated percentage; can exceed 100.
    pub raise_percent: u32,
    pub weeks_elapsed: Option<i64>,
}

/// Assess a founder profile as of `today`.
#[must_use]
pub fn assess_readiness(profile: &FounderProfile, today: NaiveDate) -> ReadinessReport {
    let completion_percent = completion_percent(profile);
    let pitch_score = pitch_score(profile, completion_percent);

    ReadinessReport {
        completion_percent,
        missing_fields: missing_fields(profile),
        pitch_score,
        pitch_label: pitch_label(pitch_score),
        alert: advisory_alert(completion_percent, pitch_score),
        raise_percent: raise_percent(profile.raise_raised, profile.raise_target),
        weeks_elapsed: profile
            .fundraising_start_date
            .map(|start| (today - start).num_days().div_euclid(7)),
    }
}

fn has_text(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn has_year(value: Option<i32>) -> bool {
    value.is_some_and(|y| y != 0)
}

fn completion_percent(profile: &FounderProfile) -> u8 {
    let present = [
        has_text(profile.full_name.as_ref()),
        has_text(profile.email.as_ref()),
        has_text(profile.phone.as_ref()),
        has_text(profile.country.as_ref()),
        has_text(profile.company_name.as_ref()),
        has_year(profile.founding_year),
        has_text(profile.stage.as_ref()),
        has_text(profile.sector.as_ref()),
        has_text(profile.business_model.as_ref()),
    ];
    let total = present.len();
    let filled = present.iter().filter(|p| **p).count();
    // filled <= total, so the result is at most 100
    u8::try_from(filled * 100 / total).unwrap_or(100)
}

fn missing_fields(profile: &FounderProfile) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !has_text(profile.phone.as_ref()) {
        missing.push("Phone number");
    }
    if !has_text(profile.sector.as_ref()) {
        missing.push("Sector");
    }
    if !has_text(profile.business_model.as_ref()) {
        missing.push("Business model");
    }
    missing
}

fn pitch_score(profile: &FounderProfile, completion_percent: u8) -> PitchScore {
    let points = [
        (has_text(profile.company_name.as_ref()), P_COMPANY_NAME),
        (has_text(profile.stage.as_ref()), P_STAGE),
        (has_text(profile.sector.as_ref()), P_SECTOR),
        (has_text(profile.business_model.as_ref()), P_BUSINESS_MODEL),
        (profile.actively_raising, P_ACTIVELY_RAISING),
        (has_year(profile.founding_year), P_FOUNDING_YEAR),
        (
            completion_percent >= COMPLETE_PROFILE_MIN,
            P_COMPLETE_PROFILE,
        ),
    ];
    let total: u8 = points
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, p)| *p)
        .sum();
    PitchScore::clamped(total)
}

fn advisory_alert(completion_percent: u8, pitch_score: PitchScore) -> &'static str {
    if completion_percent < COMPLETE_PROFILE_MIN {
        ALERT_INCOMPLETE
    } else if pitch_score.value() < OUTREACH_PITCH_MIN {
        ALERT_WEAK_PITCH
    } else {
        ALERT_READY
    }
}

fn pitch_label(score: PitchScore) -> PitchLabel {
    if score.value() >= INVESTOR_READY_MIN {
        PitchLabel::InvestorReady
    } else if score.value() >= GOOD_PITCH_MIN {
        PitchLabel::Good
    } else {
        PitchLabel::NeedsWork
    }
}

fn raise_percent(raised: Option<Decimal>, target: Option<Decimal>) -> u32 {
    match target.filter(|t| !t.is_zero()) {
        Some(target) => {
            let raised = raised.unwrap_or(Decimal::ZERO);
            (raised * Decimal::ONE_HUNDRED / target)
                .trunc()
                .to_u32()
                .unwrap_or(0)
        }
        None => 0,
    }
}
