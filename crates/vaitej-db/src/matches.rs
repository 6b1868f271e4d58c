//! Database operations for the `matches` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use vaitej_core::{parse_founder_action, CoreError, MatchScore, MatchStatus};

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `matches` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MatchRow {
    pub id: i64,
    pub founder_id: i64,
    pub investor_id: i64,
    pub match_score: i32,
    pub reason: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MatchRow {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidMatchStatus`] if the stored value is unknown.
    pub fn match_status(&self) -> Result<MatchStatus, CoreError> {
        self.status.parse()
    }
}

/// A visible match enriched with the investor's display fields.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MatchListingRow {
    pub id: i64,
    pub investor_id: i64,
    pub match_score: i32,
    pub reason: String,
    pub status: String,
    pub investor_name: String,
    pub fund_name: Option<String>,
    pub investment_stage: Option<String>,
    pub sector_focus: Option<String>,
    pub verification_status: String,
    pub updated_at: DateTime<Utc>,
}

/// Result of an upsert: the match id and whether the row was newly created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct UpsertOutcome {
    pub id: i64,
    pub inserted: bool,
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// Insert a match with status `new`, or overwrite score and reason on an
/// existing pair. The status of an existing match is never touched.
///
/// Accepts any Postgres executor so it can run inside the refresh transaction.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the statement fails.
pub async fn upsert_match<'e, E>(
    executor: E,
    founder_id: i64,
    investor_id: i64,
    score: &MatchScore,
) -> Result<UpsertOutcome, DbError>
where
    E: sqlx::PgExecutor<'e>,
{
    let outcome = sqlx::query_as::<_, UpsertOutcome>(
        "INSERT INTO matches (founder_id, investor_id, match_score, reason, status) \
         VALUES ($1, $2, $3, $4, 'new') \
         ON CONFLICT (founder_id, investor_id) DO UPDATE SET \
             match_score = EXCLUDED.match_score, \
             reason      = EXCLUDED.reason, \
             updated_at  = NOW() \
         RETURNING id, (xmax = 0) AS inserted",
    )
    .bind(founder_id)
    .bind(investor_id)
    .bind(score.score)
    .bind(score.reason_text())
    .fetch_one(executor)
    .await?;

    Ok(outcome)
}

/// Set the status of a match. Returns `false` when no match has this id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the update fails.
pub async fn update_match_status(
    pool: &PgPool,
    match_id: i64,
    status: MatchStatus,
) -> Result<bool, DbError> {
    let result = sqlx::query(
        "UPDATE matches SET status = $1, updated_at = NOW() \
         WHERE id = $2",
    )
    .bind(status.as_str())
    .bind(match_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Apply a founder-requested status change given as raw text.
///
/// Only `interested`, `saved` and `declined` are accepted. An unknown match id
/// is not an error; the return value reports whether a row changed.
///
/// # Errors
///
/// Returns [`DbError::InvalidInput`] for any other status, before touching
/// the database, or [`DbError::Sqlx`] if the update fails.
pub async fn set_match_status(pool: &PgPool, match_id: i64, raw: &str) -> Result<bool, DbError> {
    let status = parse_founder_action(raw)?;
    let updated = update_match_status(pool, match_id, status).await?;

    if updated {
        tracing::info!(match_id, status = %status, "match status updated");
    } else {
        tracing::debug!(match_id, status = %status, "no match with this id; nothing updated");
    }

    Ok(updated)
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// Returns a match by id, or `None` if not found.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_match(pool: &PgPool, match_id: i64) -> Result<Option<MatchRow>, DbError> {
    let row = sqlx::query_as::<_, MatchRow>(
        "SELECT id, founder_id, investor_id, match_score, reason, status, created_at, updated_at \
         FROM matches \
         WHERE id = $1",
    )
    .bind(match_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Returns up to `limit` non-declined matches for a founder, best score
/// first. Ties are broken by match id so the order is stable.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_visible_matches(
    pool: &PgPool,
    founder_id: i64,
    limit: i64,
) -> Result<Vec<MatchListingRow>, DbError> {
    let rows = sqlx::query_as::<_, MatchListingRow>(
        "SELECT m.id, m.investor_id, m.match_score, m.reason, m.status, \
                u.full_name AS investor_name, ip.fund_name, ip.investment_stage, \
                ip.sector_focus, ip.verification_status, m.updated_at \
         FROM matches m \
         JOIN investor_profiles ip ON ip.id = m.investor_id \
         JOIN users u ON u.id = ip.user_id \
         WHERE m.founder_id = $1 AND m.status <> 'declined' \
         ORDER BY m.match_score DESC, m.id ASC \
         LIMIT $2",
    )
    .bind(founder_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Count a founder's matches in the given status.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_matches_by_status(
    pool: &PgPool,
    founder_id: i64,
    status: MatchStatus,
) -> Result<i64, DbError> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM matches WHERE founder_id = $1 AND status = $2",
    )
    .bind(founder_id)
    .bind(status.as_str())
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_row_decodes_status() {
        let row = MatchRow {
            id: 1,
            founder_id: 2,
            investor_id: 3,
            match_score: 64,
            reason: "stage alignment".to_string(),
            status: "saved".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(row.match_status(), Ok(MatchStatus::Saved));

        let bad = MatchRow {
            status: "archived".to_string(),
            ..row
        };
        assert!(bad.match_status().is_err());
    }
}
