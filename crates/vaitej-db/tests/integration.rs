//! Offline unit tests for vaitej-db pool configuration and row types.
//! These tests do not require a live database connection.

use std::path::PathBuf;

use rust_decimal::Decimal;
use vaitej_core::{AppConfig, Environment, FounderAttributes};
use vaitej_db::{
    FounderAttributesRow, MatchListingRow, PoolConfig, RefreshSummary, UpsertOutcome,
};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        log_level: "info".to_string(),
        profiles_path: PathBuf::from("./config/profiles.yaml"),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        match_threshold: 40,
        match_list_limit: 10,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn founder_row_converts_to_scoring_attributes() {
    let row = FounderAttributesRow {
        id: 5,
        stage: Some("Seed".to_string()),
        sector: Some("FinTech".to_string()),
        country: None,
        min_check_size: Some(Decimal::new(50_000, 0)),
    };

    let attrs = FounderAttributes::from(row);
    assert_eq!(attrs.founder_id, 5);
    assert_eq!(attrs.stage.as_deref(), Some("Seed"));
    assert!(attrs.country.is_none());
    assert_eq!(attrs.min_check_size, Some(Decimal::new(50_000, 0)));
}

/// Compile-time smoke test: confirm that [`MatchListingRow`] carries the
/// investor display fields. No database required.
#[test]
fn match_listing_row_has_expected_fields() {
    let row = MatchListingRow {
        id: 1,
        investor_id: 2,
        match_score: 70,
        reason: "stage alignment, sector alignment".to_string(),
        status: "new".to_string(),
        investor_name: "Priya Nair".to_string(),
        fund_name: Some("Monsoon Ventures".to_string()),
        investment_stage: Some("Seed, Series A".to_string()),
        sector_focus: None,
        verification_status: "verified".to_string(),
        updated_at: chrono::Utc::now(),
    };

    assert_eq!(row.match_score, 70);
    assert_eq!(row.investor_name, "Priya Nair");
    assert!(row.sector_focus.is_none());
}

#[test]
fn refresh_summary_defaults_to_zero() {
    let summary = RefreshSummary::default();
    assert_eq!(summary.upserted(), 0);
    assert_eq!(summary.skipped(), 0);

    let outcome = UpsertOutcome {
        id: 3,
        inserted: true,
    };
    assert!(outcome.inserted);
}
