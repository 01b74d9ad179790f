//! Team roster: batting order, starter, bullpen and bullpen roles.

use crate::error::RosterError;
use serde::{Deserialize, Serialize};

pub const LINEUP_SIZE: usize = 9;

/// 불펜 역할 배정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BullpenRoles {
    pub closer: Option<String>,
    pub setup: Option<String>,
    pub long_relief: Vec<String>,
    pub middle_relief: Vec<String>,
}

impl BullpenRoles {
    /// 불펜 순서 기반 기본 역할
    ///
    /// - 마무리: 마지막 투수
    /// - 셋업: 끝에서 두 번째
    /// - 롱릴리프: 앞의 두 명 (3명 이상일 때)
    /// - 중간계투: 롱릴리프와 셋업/마무리 사이 (5명 이상), 아니면 마지막 두 명을 뺀 나머지
    pub fn positional(bullpen: &[String]) -> Self {
        let n = bullpen.len();
        let closer = bullpen.last().cloned();
        let setup = if n > 1 { Some(bullpen[n - 2].clone()) } else { None };
        let long_relief = if n > 2 { bullpen[..2].to_vec() } else { Vec::new() };
        let middle_relief = if n > 4 {
            bullpen[2..n - 2].to_vec()
        } else if n > 2 {
            bullpen[..n - 2].to_vec()
        } else {
            Vec::new()
        };
        Self { closer, setup, long_relief, middle_relief }
    }

    fn apply(&mut self, overrides: RoleOverrides) {
        if let Some(closer) = overrides.closer {
            self.closer = Some(closer);
        }
        if let Some(setup) = overrides.setup {
            self.setup = Some(setup);
        }
        if let Some(long_relief) = overrides.long_relief {
            self.long_relief = long_relief;
        }
        if let Some(middle_relief) = overrides.middle_relief {
            self.middle_relief = middle_relief;
        }
    }
}

/// 역할 수동 지정 (지정한 항목만 덮어씀)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RoleOverrides {
    #[serde(default)]
    pub closer: Option<String>,
    #[serde(default)]
    pub setup: Option<String>,
    #[serde(default)]
    pub long_relief: Option<Vec<String>>,
    #[serde(default)]
    pub middle_relief: Option<Vec<String>>,
}

/// 로스터 입력 (JSON 매치업 파일/API 요청)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterData {
    pub name: String,
    pub lineup: Vec<String>,
    pub starter: String,
    pub bullpen: Vec<String>,
    #[serde(default)]
    pub roles: Option<RoleOverrides>,
}

impl RosterData {
    pub fn into_roster(self) -> Result<TeamRoster, RosterError> {
        let roster = TeamRoster::new(self.name, self.lineup, self.starter, self.bullpen, self.roles);
        roster.validate()?;
        Ok(roster)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRoster {
    pub name: String,
    pub lineup: Vec<String>,
    pub starter: String,
    pub bullpen: Vec<String>,
    pub roles: BullpenRoles,
}

impl TeamRoster {
    pub fn new(
        name: impl Into<String>,
        lineup: Vec<String>,
        starter: impl Into<String>,
        bullpen: Vec<String>,
        overrides: Option<RoleOverrides>,
    ) -> Self {
        let mut roles = BullpenRoles::positional(&bullpen);
        if let Some(overrides) = overrides {
            roles.apply(overrides);
        }
        Self { name: name.into(), lineup, starter: starter.into(), bullpen, roles }
    }

    /// 타순 순환 인덱스의 타자
    pub fn batter_at(&self, index: usize) -> &str {
        &self.lineup[index % self.lineup.len()]
    }

    /// 선발 + 불펜 전체
    pub fn pitchers(&self) -> impl Iterator<Item = &String> {
        std::iter::once(&self.starter).chain(self.bullpen.iter())
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        if self.lineup.len() != LINEUP_SIZE {
            return Err(RosterError::InvalidLineupSize {
                team: self.name.clone(),
                expected: LINEUP_SIZE,
                found: self.lineup.len(),
            });
        }
        if let Some(slot) = self.lineup.iter().position(|b| b.trim().is_empty()) {
            return Err(RosterError::EmptyBatter { team: self.name.clone(), slot });
        }
        if self.starter.trim().is_empty() {
            return Err(RosterError::MissingStarter { team: self.name.clone() });
        }

        let mut seen = std::collections::HashSet::new();
        for pitcher in self.pitchers() {
            if !seen.insert(pitcher.as_str()) {
                return Err(RosterError::DuplicatePitcher {
                    team: self.name.clone(),
                    pitcher: pitcher.clone(),
                });
            }
        }

        let in_bullpen = |p: &String| self.bullpen.contains(p);
        let named_roles = [("closer", self.roles.closer.as_ref()), ("setup", self.roles.setup.as_ref())];
        for (role, arm) in named_roles {
            if let Some(arm) = arm.filter(|a| !in_bullpen(*a)) {
                return Err(RosterError::UnknownRoleArm {
                    team: self.name.clone(),
                    role,
                    pitcher: arm.clone(),
                });
            }
        }
        let pools = [("long_relief", &self.roles.long_relief), ("middle_relief", &self.roles.middle_relief)];
        for (role, pool) in pools {
            if let Some(arm) = pool.iter().find(|a| !in_bullpen(*a)) {
                return Err(RosterError::UnknownRoleArm {
                    team: self.name.clone(),
                    role,
                    pitcher: arm.clone(),
                });
            }
        }
        Ok(())
    }
}
