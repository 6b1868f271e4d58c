//! Domain types and pure logic for founder-investor matching.
//!
//! Everything in this crate is free of I/O apart from reading the profiles
//! seed file and the process environment.

pub mod app_config;
pub mod attributes;
pub mod config;
pub mod matches;
pub mod profiles;
pub mod readiness;
pub mod scoring;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use attributes::{
    parse_check_size, ActivityStatus, FounderAttributes, InvestorAttributes, PitchScore,
    VerificationStatus,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use matches::{parse_founder_action, MatchStatus};
pub use profiles::{
    load_profiles, parse_profiles, FounderAmounts, FounderSeed, InvestorAmounts, InvestorSeed,
    ProfilesFile,
};
pub use readiness::{assess_readiness, FounderProfile, PitchLabel, ReadinessReport};
pub use scoring::{
    score_candidates, score_match, CandidateScores, MatchScore, ScoredCandidate,
    DEFAULT_MATCH_THRESHOLD, MAX_SCORE,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid match status: {0}; expected one of interested, saved, declined")]
    InvalidMatchStatus(String),
    #[error("invalid verification status: {0}")]
    InvalidVerificationStatus(String),
    #[error("invalid activity status: {0}")]
    InvalidActivityStatus(String),
    #[error("invalid check size '{value}': {reason}")]
    InvalidCheckSize { value: String, reason: String },
    #[error("pitch score {0} is outside 0-100")]
    InvalidPitchScore(i64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
    #[error("failed to read profiles file {path}: {source}")]
    ProfilesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse profiles file: {0}")]
    ProfilesFileParse(#[from] serde_yaml::Error),
    #[error("profiles validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}
