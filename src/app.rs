use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::rates::RateTable;
use crate::ui_cli;
use crate::ui_cli::{MenuChoice, SimulationOutcome};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 금리 테이블 로드/검증 오류
    Rates(crate::rates::RateTableError),
    /// 시뮬레이션 전제조건 위반
    Simulation(crate::simulation::SimulationError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "erro de E/S: {e}"),
            AppError::Config(e) => write!(f, "erro de configuração: {e}"),
            AppError::Rates(e) => write!(f, "erro na tabela de juros: {e}"),
            AppError::Simulation(e) => write!(f, "erro de simulação: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<crate::rates::RateTableError> for AppError {
    fn from(value: crate::rates::RateTableError) -> Self {
        AppError::Rates(value)
    }
}

impl From<crate::simulation::SimulationError> for AppError {
    fn from(value: crate::simulation::SimulationError) -> Self {
        AppError::Simulation(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 마지막 시뮬레이션은 내보내기 메뉴를 위해 다음 실행으로 교체될 때까지만 유지한다.
pub fn run(
    config: &mut Config,
    mut tr: Translator,
    table: &RateTable,
    pack_dir: Option<&str>,
) -> Result<(), AppError> {
    let mut last_outcome: Option<SimulationOutcome> = None;
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Simulate => {
                last_outcome = Some(ui_cli::handle_simulate(&tr, table)?);
            }
            MenuChoice::ExportReport => ui_cli::handle_export(&tr, last_outcome.as_ref())?,
            MenuChoice::Settings => {
                let language_changed = ui_cli::handle_settings(&tr, config)?;
                config.save()?;
                if language_changed {
                    let code = i18n::resolve_language("auto", Some(config.language.as_str()));
                    tr = Translator::new_with_pack(&code, pack_dir);
                }
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
