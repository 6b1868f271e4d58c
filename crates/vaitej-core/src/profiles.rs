//! Seed file of founder and investor profiles.
//!
//! Used to bootstrap a development database. Check sizes are written as
//! strings (`"50,000"`) and parsed once here.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::attributes::{parse_check_size, ActivityStatus, VerificationStatus};
use crate::{ConfigError, CoreError};

#[derive(Debug, Clone, Deserialize)]
pub struct FounderSeed {
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub company_name: Option<String>,
    pub founding_year: Option<i32>,
    pub stage: String,
    pub sector: Option<String>,
    pub business_model: Option<String>,
    #[serde(default)]
    pub actively_raising: bool,
    pub min_check_size: Option<String>,
    pub raise_target: Option<String>,
    pub raise_raised: Option<String>,
    pub fundraising_start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvestorSeed {
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub fund_name: Option<String>,
    pub investment_stage: Option<String>,
    pub sector_focus: Option<String>,
    pub geography_focus: Option<String>,
    pub typical_check_min: Option<String>,
    pub typical_check_max: Option<String>,
    #[serde(default)]
    pub accredited: bool,
    #[serde(default = "default_verification")]
    pub verification_status: VerificationStatus,
    #[serde(default = "default_activity")]
    pub activity_status: ActivityStatus,
}

fn default_verification() -> VerificationStatus {
    VerificationStatus::Unverified
}

fn default_activity() -> ActivityStatus {
    ActivityStatus::Active
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfilesFile {
    #[serde(default)]
    pub founders: Vec<FounderSeed>,
    #[serde(default)]
    pub investors: Vec<InvestorSeed>,
}

/// Founder check-size fields parsed into amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FounderAmounts {
    pub min_check_size: Option<Decimal>,
    pub raise_target: Option<Decimal>,
    pub raise_raised: Option<Decimal>,
}

/// Investor check-size range parsed into amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvestorAmounts {
    pub typical_check_min: Option<Decimal>,
    pub typical_check_max: Option<Decimal>,
}

fn parse_optional_amount(raw: Option<&str>) -> Result<Option<Decimal>, CoreError> {
    raw.map(parse_check_size).transpose()
}

impl FounderSeed {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCheckSize`] if any amount is malformed.
    pub fn amounts(&self) -> Result<FounderAmounts, CoreError> {
        Ok(FounderAmounts {
            min_check_size: parse_optional_amount(self.min_check_size.as_deref())?,
            raise_target: parse_optional_amount(self.raise_target.as_deref())?,
            raise_raised: parse_optional_amount(self.raise_raised.as_deref())?,
        })
    }
}

impl InvestorSeed {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCheckSize`] if either bound is malformed.
    pub fn amounts(&self) -> Result<InvestorAmounts, CoreError> {
        Ok(InvestorAmounts {
            typical_check_min: parse_optional_amount(self.typical_check_min.as_deref())?,
            typical_check_max: parse_optional_amount(self.typical_check_max.as_deref())?,
        })
    }
}

/// Load and validate the profiles seed file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profiles(path: &Path) -> Result<ProfilesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfilesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_profiles(&content)
}

/// Parse and validate profiles from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_profiles(content: &str) -> Result<ProfilesFile, ConfigError> {
    let file: ProfilesFile = serde_yaml::from_str(content)?;
    validate_profiles(&file)?;
    Ok(file)
}

fn validate_profiles(file: &ProfilesFile) -> Result<(), ConfigError> {
    let mut seen_emails = HashSet::new();

    let mut check_identity = |email: &str, full_name: &str| -> Result<(), ConfigError> {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(ConfigError::Validation(format!(
                "invalid email '{email}'"
            )));
        }
        if full_name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "profile '{email}' has an empty full_name"
            )));
        }
        if !seen_emails.insert(email.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate email: '{email}'"
            )));
        }
        Ok(())
    };

    for founder in &file.founders {
        check_identity(&founder.email, &founder.full_name)?;
        if founder.stage.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "founder '{}' must have a stage",
                founder.email
            )));
        }
        founder.amounts()?;
    }

    for investor in &file.investors {
        check_identity(&investor.email, &investor.full_name)?;
        let amounts = investor.amounts()?;
        if let (Some(min), Some(max)) = (amounts.typical_check_min, amounts.typical_check_max) {
            if min > max {
                return Err(ConfigError::Validation(format!(
                    "investor '{}' has typical_check_min {min} above typical_check_max {max}",
                    investor.email
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
founders:
  - email: asha@example.com
    full_name: Asha Rao
    country: India
    company_name: Ledgerly
    founding_year: 2023
    stage: Seed
    sector: FinTech
    business_model: B2B SaaS
    actively_raising: true
    min_check_size: "50,000"
    raise_target: "1000000"
investors:
  - email: priya@fund.example
    full_name: Priya Nair
    fund_name: Monsoon Ventures
    investment_stage: Seed, Series A
    sector_focus: fintech, healthtech
    geography_focus: India, Southeast Asia
    typical_check_min: "20000"
    typical_check_max: "100000"
    verification_status: verified
  - email: tom@dormant.example
    full_name: Tom Hale
    activity_status: inactive
"#;

    #[test]
    fn parses_sample_profiles() {
        let file = parse_profiles(SAMPLE).expect("valid sample");
        assert_eq!(file.founders.len(), 1);
        assert_eq!(file.investors.len(), 2);

        let founder = &file.founders[0];
        assert!(founder.actively_raising);
        let amounts = founder.amounts().unwrap();
        assert_eq!(amounts.min_check_size, Some(Decimal::new(50_000, 0)));
        assert_eq!(amounts.raise_raised, None);

        let investor = &file.investors[0];
        assert_eq!(investor.verification_status, VerificationStatus::Verified);
        assert_eq!(investor.activity_status, ActivityStatus::Active);

        let dormant = &file.investors[1];
        assert_eq!(dormant.verification_status, VerificationStatus::Unverified);
        assert_eq!(dormant.activity_status, ActivityStatus::Inactive);
    }

    #[test]
    fn load_profiles_reads_file() {
        let mut tmp = tempfile::NamedTempFile::new().expect("temp file");
        tmp.write_all(SAMPLE.as_bytes()).expect("write sample");
        let file = load_profiles(tmp.path()).expect("load");
        assert_eq!(file.founders[0].email, "asha@example.com");
    }

    #[test]
    fn load_profiles_missing_file_is_io_error() {
        let err = load_profiles(Path::new("/nonexistent/profiles.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ProfilesFileIo { .. }));
    }

    #[test]
    fn rejects_duplicate_email_across_roles() {
        let yaml = r"
founders:
  - email: same@example.com
    full_name: A
    stage: Seed
investors:
  - email: SAME@example.com
    full_name: B
";
        let err = parse_profiles(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate email"));
    }

    #[test]
    fn rejects_founder_without_stage() {
        let yaml = r#"
founders:
  - email: a@example.com
    full_name: A
    stage: "  "
"#;
        let err = parse_profiles(yaml).unwrap_err();
        assert!(err.to_string().contains("must have a stage"));
    }

    #[test]
    fn rejects_malformed_check_size() {
        let yaml = r#"
investors:
  - email: b@example.com
    full_name: B
    typical_check_min: "lots"
"#;
        let err = parse_profiles(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Core(_)), "got {err:?}");
    }

    #[test]
    fn rejects_inverted_check_range() {
        let yaml = r#"
investors:
  - email: b@example.com
    full_name: B
    typical_check_min: "200000"
    typical_check_max: "100000"
"#;
        let err = parse_profiles(yaml).unwrap_err();
        assert!(err.to_string().contains("above typical_check_max"));
    }

    #[test]
    fn rejects_unknown_verification_status() {
        let yaml = r"
investors:
  - email: b@example.com
    full_name: B
    verification_status: pending
";
        let err = parse_profiles(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ProfilesFileParse(_)), "got {err:?}");
    }

    #[test]
    fn empty_file_is_valid() {
        let file = parse_profiles("{}").expect("empty mapping");
        assert!(file.founders.is_empty());
        assert!(file.investors.is_empty());
    }
}
