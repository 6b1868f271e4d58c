use sqlx::{PgConnection, PgPool};
use vaitej_core::{FounderSeed, InvestorSeed, ProfilesFile};

use crate::DbError;

/// Rows processed by [`seed_profiles`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub founders: usize,
    pub investors: usize,
}

/// Upsert users and their founder / investor profiles from a seed file.
///
/// Users are keyed by email and profiles by user. All upserts run inside a
/// single transaction; if any operation fails the entire batch is rolled back.
///
/// # Errors
///
/// Returns [`DbError::InvalidInput`] for a malformed amount, or
/// [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_profiles(pool: &PgPool, profiles: &ProfilesFile) -> Result<SeedSummary, DbError> {
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    for founder in &profiles.founders {
        let profile_id = seed_founder(&mut tx, founder).await?;
        tracing::debug!(email = %founder.email, profile_id, "founder seeded");
        summary.founders += 1;
    }

    for investor in &profiles.investors {
        let profile_id = seed_investor(&mut tx, investor).await?;
        tracing::debug!(email = %investor.email, profile_id, "investor seeded");
        summary.investors += 1;
    }

    tx.commit().await?;
    Ok(summary)
}

async fn upsert_user(
    conn: &mut PgConnection,
    role: &str,
    email: &str,
    full_name: &str,
    phone: Option<&str>,
    country: Option<&str>,
) -> Result<i64, DbError> {
    let user_id: i64 = sqlx::query_scalar(
        "INSERT INTO users (role, full_name, email, phone, country) \
         VALUES ($1, $2, $3, $4, $5) \
         ON CONFLICT (email) DO UPDATE SET \
             role = EXCLUDED.role, \
             full_name = EXCLUDED.full_name, \
             phone = EXCLUDED.phone, \
             country = EXCLUDED.country, \
             updated_at = NOW() \
         RETURNING id",
    )
    .bind(role)
    .bind(full_name)
    .bind(email.trim())
    .bind(phone)
    .bind(country)
    .fetch_one(conn)
    .await?;

    Ok(user_id)
}

async fn seed_founder(conn: &mut PgConnection, founder: &FounderSeed) -> Result<i64, DbError> {
    let amounts = founder.amounts()?;
    let user_id = upsert_user(
        conn,
        "founder",
        &founder.email,
        &founder.full_name,
        founder.phone.as_deref(),
        founder.country.as_deref(),
    )
    .await?;

    let profile_id: i64 = sqlx::query_scalar(
        "INSERT INTO founder_profiles \
             (user_id, company_name, founding_year, stage, sector, business_model, \
              actively_raising, min_check_size, raise_target, raise_raised, fundraising_start_date) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
         ON CONFLICT (user_id) DO UPDATE SET \
             company_name = EXCLUDED.company_name, \
             founding_year = EXCLUDED.founding_year, \
             stage = EXCLUDED.stage, \
             sector = EXCLUDED.sector, \
             business_model = EXCLUDED.business_model, \
             actively_raising = EXCLUDED.actively_raising, \
             min_check_size = EXCLUDED.min_check_size, \
             raise_target = EXCLUDED.raise_target, \
             raise_raised = EXCLUDED.raise_raised, \
             fundraising_start_date = EXCLUDED.fundraising_start_date, \
             updated_at = NOW() \
         RETURNING id",
    )
    .bind(user_id)
    .bind(&founder.company_name)
    .bind(founder.founding_year)
    .bind(founder.stage.trim())
    .bind(&founder.sector)
    .bind(&founder.business_model)
    .bind(founder.actively_raising)
    .bind(amounts.min_check_size)
    .bind(amounts.raise_target)
    .bind(amounts.raise_raised)
    .bind(founder.fundraising_start_date)
    .fetch_one(&mut *conn)
    .await?;

    Ok(profile_id)
}

async fn seed_investor(conn: &mut PgConnection, investor: &InvestorSeed) -> Result<i64, DbError> {
    let amounts = investor.amounts()?;
    let user_id = upsert_user(
        conn,
        "investor",
        &investor.email,
        &investor.full_name,
        investor.phone.as_deref(),
        investor.country.as_deref(),
    )
    .await?;

    let profile_id: i64 = sqlx::query_scalar(
        "INSERT INTO investor_profiles \
             (user_id, fund_name, investment_stage, sector_focus, geography_focus, \
              typical_check_min, typical_check_max, accredited, verification_status, activity_status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
         ON CONFLICT (user_id) DO UPDATE SET \
             fund_name = EXCLUDED.fund_name, \
             investment_stage = EXCLUDED.investment_stage, \
             sector_focus = EXCLUDED.sector_focus, \
             geography_focus = EXCLUDED.geography_focus, \
             typical_check_min = EXCLUDED.typical_check_min, \
             typical_check_max = EXCLUDED.typical_check_max, \
             accredited = EXCLUDED.accredited, \
             verification_status = EXCLUDED.verification_status, \
             activity_status = EXCLUDED.activity_status, \
             updated_at = NOW() \
         RETURNING id",
    )
    .bind(user_id)
    .bind(&investor.fund_name)
    .bind(&investor.investment_stage)
    .bind(&investor.sector_focus)
    .bind(&investor.geography_focus)
    .bind(amounts.typical_check_min)
    .bind(amounts.typical_check_max)
    .bind(investor.accredited)
    .bind(investor.verification_status.as_str())
    .bind(investor.activity_status.as_str())
    .fetch_one(&mut *conn)
    .await?;

    Ok(profile_id)
}
