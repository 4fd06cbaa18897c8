use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 화면 표시 테마.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 코드 (auto/pt-br/en-us)
    pub language: String,
    /// 밝은/어두운 테마 선택. GUI 표시 전용이며 계산과 무관하다.
    pub theme: Theme,
    /// 결과 표시 전 인위적 지연 [ms]. 0이면 사용 안 함. GUI 전용 훅.
    pub simulated_latency_ms: u64,
    /// 금리 테이블 덮어쓰기 파일 경로. 없으면 내장 테이블을 쓴다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            theme: Theme::Light,
            simulated_latency_ms: 0,
            rates_file: None,
        }
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
            ConfigError::Io(e) => write!(f, "erro de E/S no arquivo de configuração: {e}"),
            ConfigError::Serde(e) => write!(f, "erro ao interpretar a configuração: {e}"),
            ConfigError::Serialize(e) => write!(f, "erro ao serializar a configuração: {e}"),
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
