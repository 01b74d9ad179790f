//! Per-season statistic rows
//!
//! One row per (year, team, player), with the column headers of the Statiz
//! exports. Every numeric column is optional: scraped tables leave cells empty
//! for players without enough plate appearances against a pitcher type, and the
//! profile derivation skips those cells instead of treating them as zero.
//!
//! Percent columns (`K%`, `BB%`, `SB%`) are stored as published (0-100) and
//! converted to fractions when profiles are derived.

use serde::{Deserialize, Serialize};

/// 시즌 단위 행 공통 인터페이스
pub trait SeasonRow {
    fn season(&self) -> u16;
    fn player(&self) -> &str;
}

/// 타자 시즌 기록
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitterSeasonRow {
    #[serde(rename = "Year")]
    pub year: u16,
    #[serde(rename = "Team", default)]
    pub team: String,
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "PA", default)]
    pub pa: Option<f64>,
    #[serde(rename = "AVG", default)]
    pub avg: Option<f64>,
    #[serde(rename = "OBP", default)]
    pub obp: Option<f64>,
    #[serde(rename = "SLG", default)]
    pub slg: Option<f64>,
    #[serde(rename = "wRC+", default)]
    pub wrc_plus: Option<f64>,
    /// 삼진 비율 (%)
    #[serde(rename = "K%", default)]
    pub k_pct: Option<f64>,
    /// 볼넷 비율 (%)
    #[serde(rename = "BB%", default)]
    pub bb_pct: Option<f64>,
    #[serde(rename = "BABIP", default)]
    pub babip: Option<f64>,
    #[serde(rename = "SB", default)]
    pub sb: Option<f64>,
    /// 도루 성공률 (%)
    #[serde(rename = "SB%", default)]
    pub sb_pct: Option<f64>,
    /// vs 우투수 타율
    #[serde(rename = "RAVG", default)]
    pub ravg: Option<f64>,
    #[serde(rename = "ROBP", default)]
    pub robp: Option<f64>,
    /// vs 좌투수 타율
    #[serde(rename = "LAVG", default)]
    pub lavg: Option<f64>,
    #[serde(rename = "LOBP", default)]
    pub lobp: Option<f64>,
}

impl HitterSeasonRow {
    /// 빈 행 (테스트/수동 입력용)
    pub fn new(year: u16, player: impl Into<String>) -> Self {
        Self {
            year,
            team: String::new(),
            player: player.into(),
            pa: None,
            avg: None,
            obp: None,
            slg: None,
            wrc_plus: None,
            k_pct: None,
            bb_pct: None,
            babip: None,
            sb: None,
            sb_pct: None,
            ravg: None,
            robp: None,
            lavg: None,
            lobp: None,
        }
    }
}

impl SeasonRow for HitterSeasonRow {
    fn season(&self) -> u16 {
        self.year
    }

    fn player(&self) -> &str {
        &self.player
    }
}

/// 투수 시즌 기록
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherSeasonRow {
    #[serde(rename = "Year")]
    pub year: u16,
    #[serde(rename = "Team", default)]
    pub team: String,
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "ERA", default)]
    pub era: Option<f64>,
    #[serde(rename = "FIP", default)]
    pub fip: Option<f64>,
}

impl PitcherSeasonRow {
    pub fn new(year: u16, player: impl Into<String>, era: Option<f64>, fip: Option<f64>) -> Self {
        Self { year, team: String::new(), player: player.into(), era, fip }
    }
}

impl SeasonRow for PitcherSeasonRow {
    fn season(&self) -> u16 {
        self.year
    }

    fn player(&self) -> &str {
        &self.player
    }
}

/// 투수 유형 (우투/좌투/우언)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherTypeRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Pitching_Type")]
    pub pitching_type: String,
}
