use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::thermo::{self, Defaults};

/// 화면 테마 설정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    System,
}

/// 애플리케이션 설정을 표현한다.
/// 엔진은 이 설정을 직접 읽지 않으며 `calc_defaults()`로 변환해 전달받는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드(ko/en/auto)
    pub language: String,
    pub theme: Theme,
    /// NCO 반응 기본 엔탈피 [kJ/mol]
    pub default_reaction_enthalpy_kj_per_mol: f64,
    /// 응축상 비열 기본값 [J/(g·K)]
    pub default_heat_capacity_j_per_g_k: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            theme: Theme::System,
            default_reaction_enthalpy_kj_per_mol: thermo::STANDARD_REACTION_ENTHALPY_KJ_PER_MOL,
            default_heat_capacity_j_per_g_k: thermo::DEFAULT_HEAT_CAPACITY_J_PER_G_K,
        }
    }
}

impl Config {
    /// 엔진에 넘길 기본값 묶음을 만든다.
    pub fn calc_defaults(&self) -> Defaults {
        Defaults {
            reaction_enthalpy_kj_per_mol: self.default_reaction_enthalpy_kj_per_mol,
            heat_capacity_j_per_g_k: self.default_heat_capacity_j_per_g_k,
            ..Defaults::default()
        }
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}
