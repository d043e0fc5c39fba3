use std::path::Path;

use crate::config::Config;
use crate::formulation::{Formulation, FormulationFileError};
use crate::i18n::{self, Translator};
use crate::thermo;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 배합 파일 로드 오류
    Formulation(FormulationFileError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Formulation(e) => write!(f, "배합 파일 오류: {e}"),
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

impl From<FormulationFileError> for AppError {
    fn from(value: FormulationFileError) -> Self {
        AppError::Formulation(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::SampleRun => ui_cli::handle_sample_run(tr, config)?,
            MenuChoice::FileRun => ui_cli::handle_file_run(tr, config)?,
            MenuChoice::MaterialLookup => ui_cli::handle_material_lookup(tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
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

/// 배합 파일 하나를 계산하고 종료하는 단발 실행 모드.
pub fn run_once(path: &Path, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let formulation = Formulation::load_from_toml(path)?;
    let result = thermo::calculate(&formulation, &config.calc_defaults());
    ui_cli::print_result(tr, &result);
    Ok(())
}
