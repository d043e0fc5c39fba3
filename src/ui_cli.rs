use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::AppError;
use crate::config::Config;
use crate::formulation::Formulation;
use crate::i18n::{keys, Translator};
use crate::material_db;
use crate::thermo::{self, CalcResult};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SampleRun,
    FileRun,
    MaterialLookup,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SAMPLE));
    println!("{}", tr.t(keys::MAIN_MENU_FILE));
    println!("{}", tr.t(keys::MAIN_MENU_MATERIALS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::SampleRun),
            "2" => return Ok(MenuChoice::FileRun),
            "3" => return Ok(MenuChoice::MaterialLookup),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 내장 샘플 배합을 계산해 결과를 출력한다.
pub fn handle_sample_run(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let formulation = Formulation::sample();
    let result = thermo::calculate(&formulation, &cfg.calc_defaults());
    print_result(tr, &result);
    Ok(())
}

/// TOML 배합 파일을 읽어 계산 결과를 출력한다.
pub fn handle_file_run(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let path = read_line(tr.t(keys::PROMPT_FORMULATION_PATH))?;
    let path = PathBuf::from(path.trim());
    let formulation = Formulation::load_from_toml(&path)?;
    let result = thermo::calculate(&formulation, &cfg.calc_defaults());
    print_result(tr, &result);
    Ok(())
}

/// 원료 물성 조회 메뉴를 처리한다.
pub fn handle_material_lookup(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MATERIALS_HEADING));
    let name = read_line(tr.t(keys::PROMPT_MATERIAL_NAME))?;
    let name = name.trim();
    if name.is_empty() {
        for mat in material_db::materials() {
            print_material(mat);
        }
    } else if let Some(mat) = material_db::find_material(name) {
        print_material(mat);
    } else {
        println!("{}", tr.t(keys::MATERIAL_NOT_FOUND));
    }
    println!("{}", tr.t(keys::GAS_TABLE_HEADING));
    for gas in material_db::gas_types() {
        let (mw, cp) = material_db::gas_reference_properties(*gas);
        println!("  {:<12} MW={:.2} g/mol, Cp={:.3} J/(g·K)", gas.label(), mw, cp);
    }
    Ok(())
}

fn print_material(mat: &material_db::MaterialData) {
    let nco = mat
        .nco_content_pct
        .map(|v| format!(", %NCO={v}"))
        .unwrap_or_default();
    println!(
        "  {:<12} [{}] MW={:.1} g/mol, Cp={:.2} J/(g·K){} - {}",
        mat.name,
        mat.kind.label(),
        mat.molecular_weight_g_per_mol,
        mat.heat_capacity_j_per_g_k,
        nco,
        mat.notes
    );
}

/// 설정 메뉴를 처리한다. 빈 입력은 기존 값을 유지한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_ENTHALPY),
        cfg.default_reaction_enthalpy_kj_per_mol
    );
    if let Some(v) = read_f64_optional(tr, tr.t(keys::SETTINGS_PROMPT_ENTHALPY))? {
        cfg.default_reaction_enthalpy_kj_per_mol = v;
    }
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_CP),
        cfg.default_heat_capacity_j_per_g_k
    );
    if let Some(v) = read_f64_optional(tr, tr.t(keys::SETTINGS_PROMPT_CP))? {
        cfg.default_heat_capacity_j_per_g_k = v;
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 계산 결과와 유도 과정을 출력한다.
pub fn print_result(tr: &Translator, result: &CalcResult) {
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "{}: {:.2} °C",
        tr.t(keys::RESULT_TEMPERATURE_RISE),
        result.temperature_rise_c
    );
    println!(
        "{}: {:.2} °C",
        tr.t(keys::RESULT_UNCORRECTED_DT),
        result.uncorrected_delta_t_c
    );
    println!(
        "{}: {:.2} kJ",
        tr.t(keys::RESULT_HEAT_RELEASE),
        result.heat_release_kj
    );
    println!(
        "{}: {:.4} mol",
        tr.t(keys::RESULT_NCO_MOLES),
        result.nco_moles_mol
    );
    println!(
        "{}: {:.2} J/K",
        tr.t(keys::RESULT_HEAT_CAPACITY),
        result.heat_capacity_j_per_k
    );
    println!(
        "{}: {:.2} J/K",
        tr.t(keys::RESULT_GAS_HEAT_CAPACITY),
        result.gas_heat_capacity_j_per_k
    );
    println!(
        "{}: {:.4}",
        tr.t(keys::RESULT_CRM_TOTAL),
        result.crm_total
    );
    println!("{}", tr.t(keys::STEPS_HEADING));
    for (index, step) in result.steps.iter().enumerate() {
        println!("{}) {}", index + 1, step.title);
        println!("   {}", step.equation);
        for (name, value) in &step.values {
            println!("   {name}: {value}");
        }
        println!("   => {}", step.result);
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 빈 입력이면 None, 숫자면 Some을 돌려준다. 잘못된 숫자는 재입력을 받는다.
fn read_f64_optional(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
