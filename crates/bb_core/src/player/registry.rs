//! Player registry: read-only profile lookup shared by every game task.

use super::profile_builder::{derive_hitter_profile, derive_pitcher_profile};
use crate::engine::config::ProfileConfig;
use crate::error::ProfileError;
use crate::models::{
    Delivery, HitterProfile, HitterSeasonRow, PitcherProfile, PitcherSeasonRow, PitcherTypeRow,
    SeasonRow,
};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// 이름 → 프로필 조회. 모르는 선수는 중립 프로필을 돌려준다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRegistry {
    hitters: FxHashMap<String, HitterProfile>,
    pitchers: FxHashMap<String, PitcherProfile>,
    neutral_hitter: HitterProfile,
    neutral_pitcher: PitcherProfile,
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self {
            hitters: FxHashMap::default(),
            pitchers: FxHashMap::default(),
            neutral_hitter: HitterProfile::neutral(""),
            neutral_pitcher: PitcherProfile::neutral(""),
        }
    }
}

impl PlayerRegistry {
    /// 시즌 테이블에서 모든 선수의 프로필을 한 번에 계산
    pub fn from_tables(
        hitter_rows: &[HitterSeasonRow],
        pitcher_rows: &[PitcherSeasonRow],
        pitcher_types: &[PitcherTypeRow],
        config: &ProfileConfig,
    ) -> Self {
        let mut registry = Self::default();

        for (name, rows) in group_by_player(hitter_rows) {
            let profile = derive_hitter_profile(name, &rows, config);
            registry.hitters.insert(name.to_string(), profile);
        }

        let deliveries: FxHashMap<&str, Delivery> = pitcher_types
            .iter()
            .filter_map(|t| Delivery::from_label(&t.pitching_type).map(|d| (t.name.as_str(), d)))
            .collect();

        for (name, rows) in group_by_player(pitcher_rows) {
            let delivery = deliveries.get(name).copied().unwrap_or_default();
            let profile = derive_pitcher_profile(name, &rows, delivery, config);
            registry.pitchers.insert(name.to_string(), profile);
        }

        // 유형 테이블에만 있는 투수도 등록 (quality 는 중립)
        for (&name, &delivery) in &deliveries {
            registry.pitchers.entry(name.to_string()).or_insert_with(|| PitcherProfile {
                delivery,
                ..PitcherProfile::neutral(name)
            });
        }

        tracing::debug!(
            hitters = registry.hitters.len(),
            pitchers = registry.pitchers.len(),
            "player registry built"
        );
        registry
    }

    pub fn insert_hitter(&mut self, profile: HitterProfile) {
        self.hitters.insert(profile.name.clone(), profile);
    }

    pub fn insert_pitcher(&mut self, profile: PitcherProfile) {
        self.pitchers.insert(profile.name.clone(), profile);
    }

    pub fn hitter(&self, name: &str) -> &HitterProfile {
        self.hitters.get(name).unwrap_or(&self.neutral_hitter)
    }

    pub fn pitcher(&self, name: &str) -> &PitcherProfile {
        self.pitchers.get(name).unwrap_or(&self.neutral_pitcher)
    }

    pub fn knows_hitter(&self, name: &str) -> bool {
        self.hitters.contains_key(name)
    }

    pub fn knows_pitcher(&self, name: &str) -> bool {
        self.pitchers.contains_key(name)
    }

    /// 투수 quality (모르면 4.5)
    pub fn pitcher_quality(&self, name: &str) -> f64 {
        self.pitcher(name).quality
    }

    /// 타자 장타력 (모르면 0.4)
    pub fn hitter_power(&self, name: &str) -> f64 {
        self.hitter(name).power
    }

    pub fn hitter_count(&self) -> usize {
        self.hitters.len()
    }

    pub fn pitcher_count(&self) -> usize {
        self.pitchers.len()
    }

    /// 이름순 정렬된 프로필 목록 (출력용)
    pub fn sorted_hitters(&self) -> Vec<&HitterProfile> {
        let mut list: Vec<_> = self.hitters.values().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    pub fn sorted_pitchers(&self) -> Vec<&PitcherProfile> {
        let mut list: Vec<_> = self.pitchers.values().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    /// 스케줄 전에 모든 프로필 검증
    pub fn validate(&self) -> Result<(), ProfileError> {
        for hitter in self.hitters.values() {
            hitter.validate()?;
        }
        for pitcher in self.pitchers.values() {
            pitcher.validate()?;
        }
        Ok(())
    }
}

fn group_by_player<R: SeasonRow>(rows: &[R]) -> FxHashMap<&str, Vec<&R>> {
    let mut groups: FxHashMap<&str, Vec<&R>> = FxHashMap::default();
    for row in rows {
        groups.entry(row.player()).or_default().push(row);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PlayerRegistry {
        let mut hitter = HitterSeasonRow::new(2025, "김도영");
        hitter.slg = Some(0.647);
        hitter.pa = Some(625.0);
        hitter.sb = Some(40.0);
        hitter.sb_pct = Some(85.0);

        let pitchers = vec![
            PitcherSeasonRow::new(2025, "네일", Some(2.53), Some(2.87)),
            PitcherSeasonRow::new(2025, "정해영", Some(2.49), Some(3.93)),
        ];
        let types = vec![
            PitcherTypeRow { name: "네일".into(), pitching_type: "우투".into() },
            PitcherTypeRow { name: "이준영".into(), pitching_type: "좌투".into() },
        ];
        PlayerRegistry::from_tables(&[hitter], &pitchers, &types, &ProfileConfig::default())
    }

    #[test]
    fn test_known_players_resolve() {
        let reg = registry();
        assert!(reg.knows_hitter("김도영"));
        assert!((reg.hitter_power("김도영") - 0.647).abs() < 1e-9);
        assert!((reg.hitter("김도영").steal_attempt_rate - 0.064).abs() < 1e-9);
        assert!((reg.pitcher_quality("네일") - 2.70).abs() < 1e-9);
        assert_eq!(reg.pitcher("네일").delivery, Delivery::Right);
    }

    #[test]
    fn test_unknown_players_are_neutral() {
        let reg = registry();
        assert!(!reg.knows_hitter("nobody"));
        assert_eq!(reg.hitter_power("nobody"), 0.4);
        assert_eq!(reg.hitter("nobody").steal_attempt_rate, 0.0);
        assert_eq!(reg.pitcher_quality("nobody"), 4.5);
        assert_eq!(reg.pitcher("nobody").delivery, Delivery::Right);
    }

    #[test]
    fn test_type_only_pitcher_keeps_delivery() {
        let reg = registry();
        assert!(reg.knows_pitcher("이준영"));
        assert_eq!(reg.pitcher("이준영").delivery, Delivery::Left);
        assert_eq!(reg.pitcher_quality("이준영"), 4.5);
        // 유형 정보가 없으면 우투
        assert_eq!(reg.pitcher("정해영").delivery, Delivery::Right);
    }

    #[test]
    fn test_validate_catches_negative_quality() {
        let mut reg = registry();
        assert!(reg.validate().is_ok());
        reg.insert_pitcher(PitcherProfile { quality: -1.0, ..PitcherProfile::neutral("bad") });
        assert!(reg.validate().is_err());
    }

    #[test]
    fn test_sorted_listing() {
        let reg = registry();
        let names: Vec<_> = reg.sorted_pitchers().iter().map(|p| p.name.clone()).collect();
        let mut expected = names.clone();
        expected.sort();
        assert_eq!(names, expected);
        assert_eq!(reg.pitcher_count(), 3);
        assert_eq!(reg.hitter_count(), 1);
    }
}
