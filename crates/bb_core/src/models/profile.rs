//! Derived player profiles
//!
//! Profiles are computed once per batch from the season rows and never change
//! during a game. Unknown players resolve to the neutral profiles below.

use crate::error::ProfileError;
use serde::{Deserialize, Serialize};

/// 리그 평균 수준의 중립 타자 스탯
pub mod neutral {
    pub const AVG: f64 = 0.265;
    pub const OBP: f64 = 0.340;
    pub const SLG: f64 = 0.400;
    pub const WRC_PLUS: f64 = 100.0;
    pub const BABIP: f64 = 0.300;
    pub const K_RATE: f64 = 0.18;
    pub const BB_RATE: f64 = 0.09;
    /// 알 수 없는 투수의 quality (평균 이하 구간)
    pub const PITCHER_QUALITY: f64 = 4.5;
}

/// 투구 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Delivery {
    /// 우투
    #[default]
    Right,
    /// 좌투
    Left,
    /// 우언 (사이드암/언더핸드)
    Sidearm,
}

impl Delivery {
    /// Statiz 라벨 또는 영문 약어에서 변환
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "우투" | "R" | "RHP" | "right" | "Right" => Some(Delivery::Right),
            "좌투" | "L" | "LHP" | "left" | "Left" => Some(Delivery::Left),
            "우언" | "S" | "SIDE" | "sidearm" | "Sidearm" => Some(Delivery::Sidearm),
            _ => None,
        }
    }

    /// 타자 스플릿 선택 시 우투 스플릿을 쓰는지 (우언 포함)
    pub fn uses_right_split(self) -> bool {
        matches!(self, Delivery::Right | Delivery::Sidearm)
    }
}

/// 상대 투수 유형별 타율/출루율
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitLine {
    pub avg: f64,
    pub obp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitterProfile {
    pub name: String,
    pub avg: f64,
    pub obp: f64,
    pub slg: f64,
    /// wRC+ (100 = 리그 평균)
    pub wrc_plus: f64,
    pub babip: f64,
    pub k_rate: f64,
    pub bb_rate: f64,
    pub vs_right: SplitLine,
    pub vs_left: SplitLine,
    /// 강타자 판별용 장타력
    pub power: f64,
    /// 타석당 도루 시도율 (상한 적용됨)
    pub steal_attempt_rate: f64,
    pub steal_success_rate: f64,
}

impl HitterProfile {
    /// 기록이 없는 타자: 리그 평균 수준, 도루 시도 없음
    pub fn neutral(name: impl Into<String>) -> Self {
        let split = SplitLine { avg: neutral::AVG, obp: neutral::OBP };
        Self {
            name: name.into(),
            avg: neutral::AVG,
            obp: neutral::OBP,
            slg: neutral::SLG,
            wrc_plus: neutral::WRC_PLUS,
            babip: neutral::BABIP,
            k_rate: neutral::K_RATE,
            bb_rate: neutral::BB_RATE,
            vs_right: split,
            vs_left: split,
            power: neutral::SLG,
            steal_attempt_rate: 0.0,
            steal_success_rate: 0.0,
        }
    }

    pub fn split_against(&self, delivery: Delivery) -> SplitLine {
        if delivery.uses_right_split() {
            self.vs_right
        } else {
            self.vs_left
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        let rates = [
            ("avg", self.avg),
            ("obp", self.obp),
            ("babip", self.babip),
            ("k_rate", self.k_rate),
            ("bb_rate", self.bb_rate),
            ("vs_right.avg", self.vs_right.avg),
            ("vs_right.obp", self.vs_right.obp),
            ("vs_left.avg", self.vs_left.avg),
            ("vs_left.obp", self.vs_left.obp),
            ("steal_attempt_rate", self.steal_attempt_rate),
            ("steal_success_rate", self.steal_success_rate),
        ];
        for (stat, value) in rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(ProfileError::RateOutOfRange {
                    player: self.name.clone(),
                    stat,
                    value,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherProfile {
    pub name: String,
    /// (ERA + FIP) / 2, 낮을수록 좋음
    pub quality: f64,
    pub delivery: Delivery,
}

impl PitcherProfile {
    pub fn neutral(name: impl Into<String>) -> Self {
        Self { name: name.into(), quality: neutral::PITCHER_QUALITY, delivery: Delivery::Right }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.quality < 0.0 || self.quality.is_nan() {
            return Err(ProfileError::NegativeQuality {
                player: self.name.clone(),
                quality: self.quality,
            });
        }
        Ok(())
    }
}
