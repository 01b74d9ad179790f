//! bb_cli - input loading and report formatting for the simulation CLI
//!
//! Statiz CSV exports → season rows → `PlayerRegistry`
//! Matchup JSON → two `TeamRoster`s (away bats first)

use anyhow::{Context, Result};
use bb_core::{
    BatchSummary, HitterSeasonRow, PitcherSeasonRow, PitcherTypeRow, RosterData, SimConfig,
    TeamRoster,
};
use rustc_hash::FxHashSet;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 매치업 파일 (원정팀이 먼저 공격)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matchup {
    pub away: RosterData,
    pub home: RosterData,
}

impl Matchup {
    pub fn into_rosters(self) -> Result<(TeamRoster, TeamRoster)> {
        let away = self.away.into_roster().context("Invalid away roster")?;
        let home = self.home.into_roster().context("Invalid home roster")?;
        Ok((away, home))
    }
}

/// 행 중복 판별 키
trait RowKey {
    fn key(&self) -> (u16, &str, &str);
}

impl RowKey for HitterSeasonRow {
    fn key(&self) -> (u16, &str, &str) {
        (self.year, &self.team, &self.player)
    }
}

impl RowKey for PitcherSeasonRow {
    fn key(&self) -> (u16, &str, &str) {
        (self.year, &self.team, &self.player)
    }
}

fn read_csv_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<T>().enumerate() {
        let row: T = record
            .with_context(|| format!("Failed to parse row {} of {}", idx + 1, path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// 같은 (연도, 팀, 선수) 행은 첫 행만 유지
fn dedup_rows<T: RowKey>(rows: Vec<T>, path: &Path) -> Vec<T> {
    let before = rows.len();
    let mut seen = FxHashSet::default();
    let kept: Vec<T> = rows
        .into_iter()
        .filter(|row| {
            let (year, team, player) = row.key();
            seen.insert((year, team.to_string(), player.to_string()))
        })
        .collect();

    if kept.len() < before {
        tracing::warn!(
            path = %path.display(),
            dropped = before - kept.len(),
            "duplicate season rows dropped"
        );
    }
    kept
}

/// 타자 시즌 CSV (`Year, Team, Player, PA, AVG, ...`)
pub fn load_hitter_rows(path: &Path) -> Result<Vec<HitterSeasonRow>> {
    let rows = read_csv_rows(path)?;
    let rows = dedup_rows(rows, path);
    tracing::info!(path = %path.display(), rows = rows.len(), "hitter rows loaded");
    Ok(rows)
}

/// 투수 시즌 CSV (`Year, Team, Player, ERA, FIP, ...`)
pub fn load_pitcher_rows(path: &Path) -> Result<Vec<PitcherSeasonRow>> {
    let rows = read_csv_rows(path)?;
    let rows = dedup_rows(rows, path);
    tracing::info!(path = %path.display(), rows = rows.len(), "pitcher rows loaded");
    Ok(rows)
}

/// 투수 유형 CSV (`Name, Pitching_Type`)
pub fn load_pitcher_types(path: &Path) -> Result<Vec<PitcherTypeRow>> {
    let rows: Vec<PitcherTypeRow> = read_csv_rows(path)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "pitcher types loaded");
    Ok(rows)
}

pub fn load_matchup(path: &Path) -> Result<Matchup> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read matchup file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse matchup JSON: {}", path.display()))
}

/// `--config` 파일 → `BB_SIM_CONFIG_PATH` → 기본 설정
pub fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            SimConfig::from_json(&content)
                .with_context(|| format!("Failed to parse config JSON: {}", path.display()))?
        }
        None => bb_core::api::sim_config_from_env()?.unwrap_or_default(),
    };
    config.validate().context("Invalid simulation config")?;
    Ok(config)
}

/// 배치 결과 요약 텍스트
pub fn format_report(away: &str, home: &str, summary: &BatchSummary) -> String {
    let d = &summary.distribution;
    let pct = |n: u32| {
        if summary.games == 0 {
            0.0
        } else {
            f64::from(n) * 100.0 / f64::from(summary.games)
        }
    };

    let mut out = String::new();
    out.push_str(&format!("{away} (away) vs {home} (home), {} games\n", summary.games));
    out.push_str(&format!(
        "  {away} wins: {} ({:.1}%)\n",
        summary.away_wins,
        pct(summary.away_wins)
    ));
    out.push_str(&format!(
        "  {home} wins: {} ({:.1}%)\n",
        summary.home_wins,
        pct(summary.home_wins)
    ));
    out.push_str(&format!("  Draws: {}\n", summary.draws));
    out.push_str(&format!("  Extra-inning games: {}\n", summary.extra_inning_games));
    out.push_str(&format!(
        "  Avg runs: {away} {:.2}, {home} {:.2}\n",
        summary.away_avg_runs(),
        summary.home_avg_runs()
    ));
    out.push_str(&format!(
        "  Total runs: <6 {} ({:.1}%), 6-11 {} ({:.1}%), 12+ {} ({:.1}%)\n",
        d.low,
        pct(d.low),
        d.mid,
        pct(d.mid),
        d.high,
        pct(d.high)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bb_core::GameResult;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_load_hitter_rows_with_empty_cells() -> Result<()> {
        let file = write_temp(
            "Year,Team,Player,PA,AVG,OBP,SLG,wRC+,K%,BB%,BABIP,SB,SB%,RAVG,ROBP,LAVG,LOBP\n\
             2025,KIA,김도영,625,0.347,0.420,0.647,172.1,18.2,10.1,0.389,40,85.1,0.350,0.421,,\n\
             2024,KIA,김도영,600,0.300,0.380,0.550,150,20,9,0.350,30,80,,,,\n",
        )?;

        let rows = load_hitter_rows(file.path())?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].player, "김도영");
        assert_eq!(rows[0].wrc_plus, Some(172.1));
        assert_eq!(rows[0].lavg, None);
        assert_eq!(rows[1].ravg, None);
        Ok(())
    }

    #[test]
    fn test_duplicate_rows_dropped() -> Result<()> {
        let file = write_temp(
            "Year,Team,Player,ERA,FIP\n\
             2025,KT,조이현,4.10,4.40\n\
             2025,KT,조이현,9.99,9.99\n\
             2024,KT,조이현,4.50,4.60\n",
        )?;

        let rows = load_pitcher_rows(file.path())?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].era, Some(4.10));
        Ok(())
    }

    #[test]
    fn test_load_pitcher_types() -> Result<()> {
        let file = write_temp("Name,Pitching_Type\n네일,우투\n이준영,좌투\n우규민,우언\n")?;
        let rows = load_pitcher_types(file.path())?;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].pitching_type, "우언");
        Ok(())
    }

    #[test]
    fn test_bad_csv_reports_path() -> Result<()> {
        let file = write_temp("Year,Team,Player,ERA\nnot-a-year,KT,조이현,4.1\n")?;
        let err = load_pitcher_rows(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("row 1"));
        Ok(())
    }

    #[test]
    fn test_load_matchup() -> Result<()> {
        let lineup: Vec<String> = (0..9).map(|i| format!("h{i}")).collect();
        let body = serde_json::json!({
            "away": { "name": "KIA", "lineup": lineup, "starter": "네일", "bullpen": ["전상현"] },
            "home": { "name": "KT", "lineup": lineup, "starter": "조이현", "bullpen": ["박영현"],
                      "roles": { "closer": "박영현" } }
        });
        let file = write_temp(&body.to_string())?;

        let (away, home) = load_matchup(file.path())?.into_rosters()?;
        assert_eq!(away.name, "KIA");
        assert_eq!(home.roles.closer.as_deref(), Some("박영현"));
        Ok(())
    }

    #[test]
    fn test_demo_matchup_parses() -> Result<()> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/matchup.json");
        let (away, home) = load_matchup(&path)?.into_rosters()?;
        assert_eq!(away.lineup.len(), 9);
        assert_eq!(home.starter, "조이현");
        assert_eq!(away.roles.closer.as_deref(), Some("전상현"));
        Ok(())
    }

    #[test]
    fn test_load_config_file_overrides_default() -> Result<()> {
        let file = write_temp(r#"{ "game": { "regulation_innings": 9, "max_innings": 10 } }"#)?;
        let config = load_config(Some(file.path()))?;
        assert_eq!(config.game.max_innings, 10);
        Ok(())
    }

    #[test]
    fn test_invalid_config_rejected() -> Result<()> {
        let file = write_temp(r#"{ "running": { "dp_bases_loaded": 3.0 } }"#)?;
        assert!(load_config(Some(file.path())).is_err());
        Ok(())
    }

    #[test]
    fn test_format_report() {
        let results = [
            GameResult { home: 3, away: 5, innings: 9 },
            GameResult { home: 7, away: 7, innings: 12 },
        ];
        let summary = BatchSummary::from_results(&results);
        let report = format_report("KIA", "KT", &summary);

        assert!(report.contains("KIA wins: 1 (50.0%)"));
        assert!(report.contains("Draws: 1"));
        assert!(report.contains("Extra-inning games: 1"));
        assert!(report.contains("6-11 1 (50.0%)"));
    }
}
