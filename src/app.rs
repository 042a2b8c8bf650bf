use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::sap_db::{SapTable, SapTableError};
use crate::soap::water::WaterCalcError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;
use crate::units::ConversionError;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(ConversionError),
    /// SAP 테이블 로드/조회 오류
    SapTable(SapTableError),
    /// 물 계산 오류
    Water(WaterCalcError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::SapTable(e) => write!(f, "SAP 테이블 오류: {e}"),
            AppError::Water(e) => write!(f, "물 계산 오류: {e}"),
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

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<SapTableError> for AppError {
    fn from(value: SapTableError) -> Self {
        AppError::SapTable(value)
    }
}

impl From<WaterCalcError> for AppError {
    fn from(value: WaterCalcError) -> Self {
        AppError::Water(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 계산 단계에서 난 오류는 해당 요청만 중단하고 메뉴로 돌아간다.
/// 입출력 오류는 복구할 수 없으므로 그대로 전파한다.
pub fn run(config: &mut Config, sap: &SapTable, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Recipe => report(ui_cli::handle_recipe(tr, config, sap), tr)?,
            MenuChoice::UnitConversion => report(ui_cli::handle_unit_conversion(tr), tr)?,
            MenuChoice::SapTable => report(ui_cli::handle_sap_table(tr, sap), tr)?,
            MenuChoice::Settings => {
                report(ui_cli::handle_settings(tr, config), tr)?;
                config.save()?;
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

fn report(result: Result<(), AppError>, tr: &Translator) -> Result<(), AppError> {
    match result {
        Ok(()) => Ok(()),
        Err(AppError::Io(e)) => Err(AppError::Io(e)),
        Err(err) => {
            println!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            Ok(())
        }
    }
}
