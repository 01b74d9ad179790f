//! Baseball simulation CLI
//!
//! Statiz CSV + 매치업 JSON → N경기 배치 시뮬레이션 → 요약 리포트

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "bb_sim")]
#[command(about = "Seeded Monte Carlo baseball game simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Simulate a batch of games between two rosters
    Simulate {
        /// Hitter season CSV (statiz_hitters.csv)
        #[arg(long)]
        hitters: PathBuf,

        /// Pitcher season CSV (statiz_pitchers.csv)
        #[arg(long)]
        pitchers: PathBuf,

        /// Pitcher delivery CSV (statiz_pitchers_type.csv)
        #[arg(long)]
        pitcher_types: Option<PathBuf>,

        /// Matchup JSON with away/home rosters
        #[arg(long)]
        matchup: PathBuf,

        /// Number of games
        #[arg(long, default_value = "100")]
        games: u32,

        /// Base seed (game i uses seed + i)
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Simulation config JSON (falls back to BB_SIM_CONFIG_PATH)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write summary and per-game results as JSON
        #[arg(long)]
        json_out: Option<PathBuf>,
    },

    /// Print derived player profiles as JSON
    Profiles {
        /// Hitter season CSV
        #[arg(long)]
        hitters: PathBuf,

        /// Pitcher season CSV
        #[arg(long)]
        pitchers: PathBuf,

        /// Pitcher delivery CSV
        #[arg(long)]
        pitcher_types: Option<PathBuf>,

        /// Simulation config JSON (season weights)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            hitters,
            pitchers,
            pitcher_types,
            matchup,
            games,
            seed,
            config,
            json_out,
        } => {
            println!("⚾ Loading season tables...");
            let config = bb_cli::load_config(config.as_deref())?;
            let registry = build_registry(&hitters, &pitchers, pitcher_types.as_deref(), &config)?;
            let (away, home) = bb_cli::load_matchup(&matchup)?.into_rosters()?;

            println!("🎲 Simulating {games} games ({} @ {}, seed {seed})...", away.name, home.name);
            let ctx = bb_core::SimContext::new(&registry, &config);
            let results = bb_core::run_batch(ctx, &away, &home, games, seed);
            let summary = bb_core::BatchSummary::from_results(&results);

            println!("\n{}", bb_cli::format_report(&away.name, &home.name, &summary));

            if let Some(path) = json_out {
                let response = bb_core::BatchResponse {
                    schema_version: bb_core::SCHEMA_VERSION,
                    away_team: away.name.clone(),
                    home_team: home.name.clone(),
                    seed,
                    away_avg_runs: summary.away_avg_runs(),
                    home_avg_runs: summary.home_avg_runs(),
                    away_win_rate: summary.away_win_rate(),
                    home_win_rate: summary.home_win_rate(),
                    summary,
                    results: Some(results),
                };
                let json = serde_json::to_string_pretty(&response)?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("📄 Results saved to: {}", path.display());
            }
        }

        Commands::Profiles {
            hitters,
            pitchers,
            pitcher_types,
            config,
        } => {
            let config = bb_cli::load_config(config.as_deref())?;
            let registry = build_registry(&hitters, &pitchers, pitcher_types.as_deref(), &config)?;

            let dump = serde_json::json!({
                "hitters": registry.sorted_hitters(),
                "pitchers": registry.sorted_pitchers(),
            });
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn build_registry(
    hitters: &std::path::Path,
    pitchers: &std::path::Path,
    pitcher_types: Option<&std::path::Path>,
    config: &bb_core::SimConfig,
) -> Result<bb_core::PlayerRegistry> {
    let hitter_rows = bb_cli::load_hitter_rows(hitters)?;
    let pitcher_rows = bb_cli::load_pitcher_rows(pitchers)?;
    let type_rows = match pitcher_types {
        Some(path) => bb_cli::load_pitcher_types(path)?,
        None => Vec::new(),
    };

    let registry =
        bb_core::PlayerRegistry::from_tables(&hitter_rows, &pitcher_rows, &type_rows, &config.profile);
    registry.validate().context("Derived profiles failed validation")?;
    tracing::info!(
        hitters = registry.hitter_count(),
        pitchers = registry.pitcher_count(),
        "profiles derived"
    );
    Ok(registry)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("bb_sim CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
