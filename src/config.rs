use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::soap::lye::AlkaliKind;
use crate::units::MassUnit;

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 입력/표시에 사용할 질량 단위. 내부 계산은 항상 g 기준이다.
    pub display_unit: MassUnit,
    /// 기본 알칼리
    pub default_alkali: AlkaliKind,
    /// 기본 슈퍼팻 [%]
    pub default_superfat_pct: f64,
    /// 농도 방식의 기본 가성소다 농도 [%]
    pub default_lye_concentration_pct: f64,
    /// 비율 방식의 기본 물:알칼리 비율
    pub default_water_to_lye_ratio: f64,
    /// SAP 재정의 파일 경로. 없으면 빌트인 테이블만 사용한다.
    pub sap_table_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            display_unit: MassUnit::Gram,
            default_alkali: AlkaliKind::SodiumHydroxide,
            default_superfat_pct: 5.0,
            default_lye_concentration_pct: 33.0,
            default_water_to_lye_ratio: 2.0,
            sap_table_path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 직렬화/역직렬화 오류
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

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
