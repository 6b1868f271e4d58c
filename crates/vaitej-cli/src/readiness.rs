//! Founder pitch-readiness report.

use chrono::Utc;
use serde::Serialize;
use vaitej_core::{assess_readiness, FounderProfile, MatchStatus, PitchScore, ReadinessReport};

#[derive(Debug, Serialize)]
pub(crate) struct ReadinessView {
    pub founder_id: i64,
    pub full_name: String,
    pub company_name: Option<String>,
    pub completion_percent: u8,
    pub missing_fields: Vec<&'static str>,
    pub pitch_score: u8,
    pub pitch_label: String,
    pub alert: &'static str,
    pub raise_percent: u32,
    pub weeks_elapsed: Option<i64>,
    pub interested_matches: i64,
}

impl ReadinessView {
    fn new(
        row: &vaitej_db::FounderProfileRow,
        report: &ReadinessReport,
        interested_matches: i64,
    ) -> Self {
        Self {
            founder_id: row.id,
            full_name: row.full_name.clone(),
            company_name: row.company_name.clone(),
            completion_percent: report.completion_percent,
            missing_fields: report.missing_fields.clone(),
            pitch_score: report.pitch_score.value(),
            pitch_label: report.pitch_label.to_string(),
            alert: report.alert,
            raise_percent: report.raise_percent,
            weeks_elapsed: report.weeks_elapsed,
            interested_matches,
        }
    }
}

/// Pitch score derived from the founder's stored profile.
///
/// # Errors
///
/// Returns an error if the founder does not exist or the query fails.
pub(crate) async fn computed_pitch_score(
    pool: &sqlx::PgPool,
    founder_id: i64,
) -> anyhow::Result<PitchScore> {
    let row = vaitej_db::get_founder_profile(pool, founder_id).await?;
    let report = assess_readiness(&FounderProfile::from(row), Utc::now().date_naive());
    Ok(report.pitch_score)
}

/// Print completion, pitch score and fundraising progress for a founder.
///
/// # Errors
///
/// Returns an error if the founder does not exist or a query fails.
pub(crate) async fn run_readiness(
    pool: &sqlx::PgPool,
    founder_id: i64,
    json: bool,
) -> anyhow::Result<()> {
    let row = vaitej_db::get_founder_profile(pool, founder_id).await?;
    let report = assess_readiness(&FounderProfile::from(row.clone()), Utc::now().date_naive());
    let interested =
        vaitej_db::count_matches_by_status(pool, founder_id, MatchStatus::Interested).await?;
    let view = ReadinessView::new(&row, &report, interested);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print!("{}", render_readiness(&view));
    Ok(())
}

fn render_readiness(view: &ReadinessView) -> String {
    let mut out = format!(
        "Founder: {} ({})\n",
        view.full_name,
        view.company_name.as_deref().unwrap_or("no company")
    );
    out.push_str(&format!("Profile completion: {}%\n", view.completion_percent));
    if !view.missing_fields.is_empty() {
        out.push_str(&format!("Missing: {}\n", view.missing_fields.join(", ")));
    }
    out.push_str(&format!(
        "Pitch score: {} ({})\n",
        view.pitch_score, view.pitch_label
    ));
    out.push_str(&format!("Raise progress: {}%\n", view.raise_percent));
    if let Some(weeks) = view.weeks_elapsed {
        out.push_str(&format!("Weeks fundraising: {weeks}\n"));
    }
    out.push_str(&format!(
        "Investors interested: {}\n",
        view.interested_matches
    ));
    out.push_str(view.alert);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ReadinessView {
        ReadinessView {
            founder_id: 1,
            full_name: "Asha Rao".to_string(),
            company_name: Some("Ledgerly".to_string()),
            completion_percent: 88,
            missing_fields: vec!["Phone number"],
            pitch_score: 85,
            pitch_label: "Investor-Ready".to_string(),
            alert: vaitej_core::readiness::ALERT_READY,
            raise_percent: 25,
            weeks_elapsed: None,
            interested_matches: 2,
        }
    }

    #[test]
    fn render_lists_missing_fields_and_alert() {
        let text = render_readiness(&view());
        assert!(text.starts_with("Founder: Asha Rao (Ledgerly)\n"));
        assert!(text.contains("Missing: Phone number\n"));
        assert!(text.contains("Pitch score: 85 (Investor-Ready)\n"));
        assert!(!text.contains("Weeks fundraising"));
        assert!(text.ends_with("Start outreach.\n"));
    }

    #[test]
    fn json_view_uses_plain_values() {
        let value = serde_json::to_value(view()).expect("serializable");
        assert_eq!(value["pitch_score"], 85);
        assert_eq!(value["pitch_label"], "Investor-Ready");
        assert_eq!(value["missing_fields"][0], "Phone number");
    }
}
