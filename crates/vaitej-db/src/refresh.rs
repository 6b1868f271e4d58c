//! Recompute a founder's matches against every eligible investor.

use sqlx::PgPool;
use vaitej_core::{score_candidates, PitchScore, ScoredCandidate};

use crate::founders::get_founder_attributes;
use crate::investors::list_eligible_investors;
use crate::matches::upsert_match;
use crate::DbError;

/// Counts reported by [`refresh_matches`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Eligible investors that were scored.
    pub considered: usize,
    pub inserted: usize,
    pub updated: usize,
    /// Scored below the threshold and left untouched.
    pub below_threshold: usize,
    /// Returned by the eligibility query but rejected by the in-process check.
    pub ineligible: usize,
}

impl RefreshSummary {
    #[must_use]
    pub fn upserted(&self) -> usize {
        self.inserted + self.updated
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.below_threshold + self.ineligible
    }
}

/// Score `founder_id` against all eligible investors and upsert every pair
/// scoring at least `threshold`.
///
/// All upserts run in one transaction. Existing matches keep their status;
/// pairs that fall below the threshold are left as they are.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if the founder does not exist,
/// [`DbError::Sqlx`] / [`DbError::InvalidInput`] if loading inputs fails, or
/// [`DbError::RefreshFailed`] if any write fails and the batch was rolled back.
pub async fn refresh_matches(
    pool: &PgPool,
    founder_id: i64,
    pitch: PitchScore,
    threshold: i32,
) -> Result<RefreshSummary, DbError> {
    let founder = get_founder_attributes(pool, founder_id).await?;
    let investors = list_eligible_investors(pool).await?;

    let scored = score_candidates(&founder, &investors, pitch, threshold);
    let mut summary = RefreshSummary {
        considered: investors.len() - scored.ineligible,
        below_threshold: scored.below_threshold,
        ineligible: scored.ineligible,
        ..RefreshSummary::default()
    };

    match write_matches(pool, founder_id, &scored.qualifying).await {
        Ok((inserted, updated)) => {
            summary.inserted = inserted;
            summary.updated = updated;
        }
        Err(e) => {
            tracing::error!(
                founder_id,
                qualifying = scored.qualifying.len(),
                error = %e,
                "match refresh failed; transaction rolled back"
            );
            return Err(DbError::RefreshFailed {
                founder_id,
                source: Box::new(e),
            });
        }
    }

    tracing::info!(
        founder_id,
        pitch_score = pitch.value(),
        considered = summary.considered,
        inserted = summary.inserted,
        updated = summary.updated,
        below_threshold = summary.below_threshold,
        "match refresh complete"
    );

    Ok(summary)
}

/// Upsert every qualifying candidate inside one transaction.
///
/// Returning early drops `tx` without committing, which rolls back.
async fn write_matches(
    pool: &PgPool,
    founder_id: i64,
    qualifying: &[ScoredCandidate],
) -> Result<(usize, usize), DbError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0usize;
    let mut updated = 0usize;

    for candidate in qualifying {
        let outcome =
            upsert_match(&mut *tx, founder_id, candidate.investor_id, &candidate.score).await?;
        tracing::debug!(
            founder_id,
            investor_id = candidate.investor_id,
            score = candidate.score.score,
            inserted = outcome.inserted,
            "match upserted"
        );
        if outcome.inserted {
            inserted += 1;
        } else {
            updated += 1;
        }
    }

    tx.commit().await?;
    Ok((inserted, updated))
}
