use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 할부 개월 수 하나에 대응하는 월 금리 항목.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    /// 할부 개월 수 (1 이상)
    pub installments: u32,
    /// 월 금리 [%]
    pub rate_percent: f64,
}

/// 검증을 거친 불변 금리 테이블. 선언 순서가 곧 시뮬레이션 출력 순서다.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    entries: Vec<RateEntry>,
}

/// 금리 테이블 로드/검증 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum RateTableError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
    /// 할부 개월 수가 0인 항목
    ZeroInstallments,
    /// 음수이거나 유한하지 않은 금리
    InvalidRate { installments: u32, rate_percent: f64 },
    /// 중복된 할부 개월 수
    Duplicate(u32),
}

impl std::fmt::Display for RateTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateTableError::Io(e) => write!(f, "erro de E/S ao carregar a tabela de juros: {e}"),
            RateTableError::Parse(e) => write!(f, "erro ao interpretar a tabela de juros: {e}"),
            RateTableError::ZeroInstallments => {
                write!(f, "a tabela de juros contém parcela igual a zero")
            }
            RateTableError::InvalidRate {
                installments,
                rate_percent,
            } => write!(f, "taxa inválida para {installments}x: {rate_percent}"),
            RateTableError::Duplicate(n) => {
                write!(f, "parcela duplicada na tabela de juros: {n}x")
            }
        }
    }
}

impl std::error::Error for RateTableError {}

impl From<std::io::Error> for RateTableError {
    fn from(value: std::io::Error) -> Self {
        RateTableError::Io(value)
    }
}

impl From<toml::de::Error> for RateTableError {
    fn from(value: toml::de::Error) -> Self {
        RateTableError::Parse(value)
    }
}

impl RateTable {
    /// 항목 목록을 검증해 테이블을 만든다. 모든 항목은 parcela ≥ 1,
    /// 금리는 유한한 0 이상, 할부 개월 수는 중복 불가.
    /// 빈 테이블은 여기서는 허용한다(시뮬레이터가 거부한다).
    pub fn new(entries: Vec<RateEntry>) -> Result<Self, RateTableError> {
        for entry in &entries {
            if entry.installments == 0 {
                return Err(RateTableError::ZeroInstallments);
            }
            if !entry.rate_percent.is_finite() || entry.rate_percent < 0.0 {
                return Err(RateTableError::InvalidRate {
                    installments: entry.installments,
                    rate_percent: entry.rate_percent,
                });
            }
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|p| p.installments == entry.installments) {
                return Err(RateTableError::Duplicate(entry.installments));
            }
        }
        Ok(Self { entries })
    }

    /// 기본 내장 테이블(1~18개월). 기준 금리를 그대로 옮긴 상수라 검증 없이 구성한다.
    pub fn built_in() -> Self {
        Self {
            entries: BUILT_IN_RATES.to_vec(),
        }
    }

    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// rates.toml 파일 형식: [[rates]] 블록의 나열.
#[derive(Debug, Deserialize)]
struct RateFile {
    rates: Vec<RateEntry>,
}

/// TOML 문자열을 파싱하고 검증해 테이블을 만든다.
pub fn from_toml_str(src: &str) -> Result<RateTable, RateTableError> {
    let file: RateFile = toml::from_str(src)?;
    RateTable::new(file.rates)
}

/// 명시된 경로 → 작업 디렉터리의 rates.toml → 내장 테이블 순으로 로드한다.
/// 명시된 경로가 읽히지 않으면 오류이고, 내장 테이블로 폴백하지 않는다.
pub fn load_or_built_in(path: Option<&Path>) -> Result<RateTable, RateTableError> {
    if let Some(p) = path {
        let content = fs::read_to_string(p)?;
        return from_toml_str(&content);
    }
    let default_path = Path::new("rates.toml");
    if default_path.exists() {
        let content = fs::read_to_string(default_path)?;
        return from_toml_str(&content);
    }
    Ok(RateTable::built_in())
}

const BUILT_IN_RATES: &[RateEntry] = &[
    re(1, 8.082258064516135),
    re(2, 9.210000000000007),
    re(3, 9.931935483870964),
    re(4, 10.674838709677422),
    re(5, 11.417096774193542),
    re(6, 12.158064516129035),
    re(7, 13.02645161290323),
    re(8, 13.778387096774196),
    re(9, 14.52903225806452),
    re(10, 15.321935483870968),
    re(11, 16.049354838709684),
    re(12, 16.81935483870968),
    re(13, 18.494516129032256),
    re(14, 19.285806451612906),
    re(15, 20.074838709677424),
    re(16, 20.86129032258064),
    re(17, 21.65903225806451),
    re(18, 22.453548387096774),
];

const fn re(installments: u32, rate_percent: f64) -> RateEntry {
    RateEntry {
        installments,
        rate_percent,
    }
}
