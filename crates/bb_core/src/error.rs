use thiserror::Error;

/// 로스터 구성 오류 (경기 스케줄 전에 검증)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error("Invalid lineup size for {team}: expected {expected}, found {found}")]
    InvalidLineupSize { team: String, expected: usize, found: usize },

    #[error("Team {team} has no starting pitcher")]
    MissingStarter { team: String },

    #[error("Pitcher {pitcher} appears more than once on {team}")]
    DuplicatePitcher { team: String, pitcher: String },

    #[error("Role {role} on {team} names {pitcher}, who is not in the bullpen")]
    UnknownRoleArm { team: String, role: &'static str, pitcher: String },

    #[error("Team {team} has an empty batter name at slot {slot}")]
    EmptyBatter { team: String, slot: usize },
}

/// 설정 값 검증 오류
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Probability {name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: String, value: f64 },

    #[error("Season weight for {season} must be positive, got {weight}")]
    NonPositiveSeasonWeight { season: u16, weight: f64 },

    #[error("Season weight schedule is empty")]
    EmptySeasonWeights,

    #[error("Range {name} is inverted: {low} > {high}")]
    InvertedRange { name: &'static str, low: f64, high: f64 },

    #[error("Value {name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

/// 선수 프로필 검증 오류
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Pitcher {player} has negative quality {quality}")]
    NegativeQuality { player: String, quality: f64 },

    #[error("Hitter {player} has {stat} outside [0, 1]: {value}")]
    RateOutOfRange { player: String, stat: &'static str, value: f64 },
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl SimError {
    /// 입력 데이터를 고치면 재시도 가능한 오류인지
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SimError::Roster(_)
                | SimError::Profile(_)
                | SimError::SchemaVersion { .. }
                | SimError::Deserialization(_)
        )
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            SimError::Deserialization(err.to_string())
        } else {
            SimError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_error_message() {
        let err = RosterError::InvalidLineupSize { team: "KIA".into(), expected: 9, found: 8 };
        assert_eq!(err.to_string(), "Invalid lineup size for KIA: expected 9, found 8");
    }

    #[test]
    fn test_json_error_maps_to_deserialization() {
        let err: SimError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, SimError::Deserialization(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_config_error_is_not_input_error() {
        let err = SimError::from(ConfigError::EmptySeasonWeights);
        assert!(!err.is_input_error());
    }
}
