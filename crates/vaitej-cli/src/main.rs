mod matches;
mod readiness;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::matches::MatchesCommands;

#[derive(Debug, Parser)]
#[command(name = "vaitej-cli")]
#[command(about = "Founder-investor match engine command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Refresh, list and triage a founder's investor matches
    Matches {
        #[command(subcommand)]
        command: MatchesCommands,
    },
    /// Show profile completion and pitch readiness for a founder
    Readiness {
        /// Founder profile id
        #[arg(long)]
        founder: i64,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check database connectivity
    Ping,
    /// Apply pending migrations
    Migrate,
    /// Upsert founders and investors from the profiles seed file
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("vaitej-cli: no command given; run with --help for usage");
        return Ok(());
    };

    let config = vaitej_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = vaitej_db::PoolConfig::from_app_config(&config);
    let pool = vaitej_db::connect_pool(&config.database_url, pool_config).await?;

    match command {
        Commands::Db { command } => match command {
            DbCommands::Ping => run_db_ping(&pool).await?,
            DbCommands::Migrate => run_db_migrate(&pool).await?,
            DbCommands::Seed => run_db_seed(&pool, &config).await?,
        },
        Commands::Matches { command } => match command {
            MatchesCommands::Refresh {
                founder,
                pitch_score,
            } => matches::run_matches_refresh(&pool, &config, founder, pitch_score).await?,
            MatchesCommands::List { founder, json } => {
                matches::run_matches_list(&pool, &config, founder, json).await?;
            }
            MatchesCommands::SetStatus { match_id, status } => {
                matches::run_matches_set_status(&pool, match_id, &status).await?;
            }
        },
        Commands::Readiness { founder, json } => {
            readiness::run_readiness(&pool, founder, json).await?;
        }
    }

    Ok(())
}

async fn run_db_ping(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    vaitej_db::health_check(pool).await?;
    println!("database ok");
    Ok(())
}

async fn run_db_migrate(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let applied = vaitej_db::run_migrations(pool).await?;
    println!("applied {applied} migration(s)");
    Ok(())
}

async fn run_db_seed(pool: &sqlx::PgPool, config: &vaitej_core::AppConfig) -> anyhow::Result<()> {
    let profiles = vaitej_core::load_profiles(&config.profiles_path)?;
    let summary = vaitej_db::seed_profiles(pool, &profiles).await?;
    tracing::info!(
        path = %config.profiles_path.display(),
        founders = summary.founders,
        investors = summary.investors,
        "profiles seeded"
    );
    println!(
        "seeded {} founder(s) and {} investor(s) from {}",
        summary.founders,
        summary.investors,
        config.profiles_path.display()
    );
    Ok(())
}
