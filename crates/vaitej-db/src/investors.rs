//! Reads over `investor_profiles`.
//!
//! Status columns are stored as text and decoded into the core enums here.

use rust_decimal::Decimal;
use sqlx::PgPool;
use vaitej_core::{ActivityStatus, CoreError, InvestorAttributes, VerificationStatus};

use crate::DbError;

/// A row of investor scoring inputs with status columns still as text.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvestorAttributesRow {
    pub id: i64,
    pub investment_stage: Option<String>,
    pub sector_focus: Option<String>,
    pub geography_focus: Option<String>,
    pub typical_check_min: Option<Decimal>,
    pub typical_check_max: Option<Decimal>,
    pub verification_status: String,
    pub activity_status: String,
}

impl TryFrom<InvestorAttributesRow> for InvestorAttributes {
    type Error = CoreError;

    fn try_from(row: InvestorAttributesRow) -> Result<Self, Self::Error> {
        Ok(InvestorAttributes {
            investor_id: row.id,
            verification_status: row.verification_status.parse::<VerificationStatus>()?,
            activity_status: row.activity_status.parse::<ActivityStatus>()?,
            investment_stage: row.investment_stage,
            sector_focus: row.sector_focus,
            geography_focus: row.geography_focus,
            typical_check_min: row.typical_check_min,
            typical_check_max: row.typical_check_max,
        })
    }
}

const INVESTOR_COLUMNS: &str = "id, investment_stage, sector_focus, geography_focus, \
     typical_check_min, typical_check_max, verification_status, activity_status";

/// Returns every investor eligible for matching: active and not rejected,
/// ordered by id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or [`DbError::InvalidInput`]
/// if a status column holds an unknown value.
pub async fn list_eligible_investors(pool: &PgPool) -> Result<Vec<InvestorAttributes>, DbError> {
    let rows = sqlx::query_as::<_, InvestorAttributesRow>(&format!(
        "SELECT {INVESTOR_COLUMNS} \
         FROM investor_profiles \
         WHERE activity_status = 'active' AND verification_status <> 'rejected' \
         ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| InvestorAttributes::try_from(row).map_err(DbError::from))
        .collect()
}

/// Load one investor's scoring attributes regardless of eligibility.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no investor profile has this id,
/// [`DbError::InvalidInput`] for an unknown status value, or
/// [`DbError::Sqlx`] if the query fails.
pub async fn get_investor_attributes(
    pool: &PgPool,
    investor_id: i64,
) -> Result<InvestorAttributes, DbError> {
    let row = sqlx::query_as::<_, InvestorAttributesRow>(&format!(
        "SELECT {INVESTOR_COLUMNS} FROM investor_profiles WHERE id = $1"
    ))
    .bind(investor_id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound {
        entity: "investor",
        id: investor_id,
    })?;

    Ok(InvestorAttributes::try_from(row)?)
}
