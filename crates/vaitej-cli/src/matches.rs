//! Match command handlers for the CLI.
//!
//! These are called from `main` after the database pool and config are
//! established.

use clap::Subcommand;
use serde::Serialize;
use vaitej_core::PitchScore;
use vaitej_db::MatchListingRow;

use crate::readiness::computed_pitch_score;

/// Sub-commands available under `matches`.
#[derive(Debug, Subcommand)]
pub enum MatchesCommands {
    /// Score a founder against every eligible investor and store the matches
    Refresh {
        /// Founder profile id
        #[arg(long)]
        founder: i64,
        /// Pitch-readiness score (0-100); computed from the profile when omitted
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        pitch_score: Option<u8>,
    },
    /// Show a founder's best matches, excluding declined ones
    List {
        /// Founder profile id
        #[arg(long)]
        founder: i64,
        /// Print the matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a match as interested, saved or declined
    SetStatus {
        /// Match id
        #[arg(long = "match")]
        match_id: i64,
        /// New status: interested, saved or declined
        #[arg(long)]
        status: String,
    },
}

#[derive(Debug, Serialize)]
pub(crate) struct MatchListItem {
    pub match_id: i64,
    pub investor_id: i64,
    pub investor_name: String,
    pub fund_name: Option<String>,
    pub investment_stage: Option<String>,
    pub sector_focus: Option<String>,
    pub verification_status: String,
    pub score: i32,
    pub reason: String,
    pub status: String,
}

impl From<MatchListingRow> for MatchListItem {
    fn from(row: MatchListingRow) -> Self {
        Self {
            match_id: row.id,
            investor_id: row.investor_id,
            investor_name: row.investor_name,
            fund_name: row.fund_name,
            investment_stage: row.investment_stage,
            sector_focus: row.sector_focus,
            verification_status: row.verification_status,
            score: row.match_score,
            reason: row.reason,
            status: row.status,
        }
    }
}

/// Refresh a founder's matches.
///
/// # Errors
///
/// Returns an error if the founder does not exist or the refresh fails.
pub(crate) async fn run_matches_refresh(
    pool: &sqlx::PgPool,
    config: &vaitej_core::AppConfig,
    founder_id: i64,
    pitch_score: Option<u8>,
) -> anyhow::Result<()> {
    let pitch = match pitch_score {
        Some(value) => PitchScore::try_from(i64::from(value))?,
        None => {
            let computed = computed_pitch_score(pool, founder_id).await?;
            tracing::info!(
                founder_id,
                pitch_score = computed.value(),
                "using pitch score computed from profile"
            );
            computed
        }
    };

    let summary =
        vaitej_db::refresh_matches(pool, founder_id, pitch, config.match_threshold).await?;

    println!(
        "founder {founder_id}: considered {}, inserted {}, updated {}, skipped {} (pitch score {})",
        summary.considered,
        summary.inserted,
        summary.updated,
        summary.skipped(),
        pitch.value()
    );
    Ok(())
}

/// List a founder's visible matches.
///
/// # Errors
///
/// Returns an error if the query fails.
pub(crate) async fn run_matches_list(
    pool: &sqlx::PgPool,
    config: &vaitej_core::AppConfig,
    founder_id: i64,
    json: bool,
) -> anyhow::Result<()> {
    let rows = vaitej_db::list_visible_matches(pool, founder_id, config.match_list_limit).await?;
    let items: Vec<MatchListItem> = rows.into_iter().map(MatchListItem::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("no matches for founder {founder_id}; run `matches refresh` first");
        return Ok(());
    }

    print!("{}", render_table(&items));
    Ok(())
}

/// Apply a founder's decision to a match.
///
/// # Errors
///
/// Returns an error for an unsupported status or if the update fails.
pub(crate) async fn run_matches_set_status(
    pool: &sqlx::PgPool,
    match_id: i64,
    status: &str,
) -> anyhow::Result<()> {
    if vaitej_db::set_match_status(pool, match_id, status).await? {
        println!("match {match_id} marked {status}");
    } else {
        println!("no match with id {match_id}; nothing changed");
    }
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

fn render_table(items: &[MatchListItem]) -> String {
    let mut out = format!(
        "{:<8}{:<7}{:<12}{:<24}{:<24}REASON\n",
        "MATCH", "SCORE", "STATUS", "INVESTOR", "FUND"
    );
    for item in items {
        out.push_str(&format!(
            "{:<8}{:<7}{:<12}{:<24}{:<24}{}\n",
            item.match_id,
            item.score,
            item.status,
            truncate(&item.investor_name, 20),
            truncate(item.fund_name.as_deref().unwrap_or("\u{2014}"), 20),
            item.reason
        ));
    }
    out
}
