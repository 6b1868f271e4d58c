//! Reads over `founder_profiles` joined to `users`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use vaitej_core::{FounderAttributes, FounderProfile};

use crate::DbError;

/// Scoring inputs for one founder. `country` lives on `users`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FounderAttributesRow {
    pub id: i64,
    pub stage: Option<String>,
    pub sector: Option<String>,
    pub country: Option<String>,
    pub min_check_size: Option<Decimal>,
}

impl From<FounderAttributesRow> for FounderAttributes {
    fn from(row: FounderAttributesRow) -> Self {
        FounderAttributes {
            founder_id: row.id,
            stage: row.stage,
            sector: row.sector,
            country: row.country,
            min_check_size: row.min_check_size,
        }
    }
}

/// Full founder profile as shown on the dashboard.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FounderProfileRow {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
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

impl From<FounderProfileRow> for FounderProfile {
    fn from(row: FounderProfileRow) -> Self {
        FounderProfile {
            full_name: Some(row.full_name),
            email: Some(row.email),
            phone: row.phone,
            country: row.country,
            company_name: row.company_name,
            founding_year: row.founding_year,
            stage: row.stage,
            sector: row.sector,
            business_model: row.business_model,
            actively_raising: row.actively_raising,
            raise_target: row.raise_target,
            raise_raised: row.raise_raised,
            fundraising_start_date: row.fundraising_start_date,
        }
    }
}

/// Load the scoring attributes for a founder profile.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no founder profile has this id, or
/// [`DbError::Sqlx`] if the query fails.
pub async fn get_founder_attributes(
    pool: &PgPool,
    founder_id: i64,
) -> Result<FounderAttributes, DbError> {
    let row = sqlx::query_as::<_, FounderAttributesRow>(
        "SELECT fp.id, fp.stage, fp.sector, u.country, fp.min_check_size \
         FROM founder_profiles fp \
         JOIN users u ON u.id = fp.user_id \
         WHERE fp.id = $1",
    )
    .bind(founder_id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound {
        entity: "founder",
        id: founder_id,
    })?;

    Ok(row.into())
}

/// Load the full profile row for a founder.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no founder profile has this id, or
/// [`DbError::Sqlx`] if the query fails.
pub async fn get_founder_profile(
    pool: &PgPool,
    founder_id: i64,
) -> Result<FounderProfileRow, DbError> {
    sqlx::query_as::<_, FounderProfileRow>(
        "SELECT fp.id, fp.user_id, u.full_name, u.email, u.phone, u.country, \
                fp.company_name, fp.founding_year, fp.stage, fp.sector, fp.business_model, \
                fp.actively_raising, fp.raise_target, fp.raise_raised, fp.fundraising_start_date \
         FROM founder_profiles fp \
         JOIN users u ON u.id = fp.user_id \
         WHERE fp.id = $1",
    )
    .bind(founder_id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound {
        entity: "founder",
        id: founder_id,
    })
}
