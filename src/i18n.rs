use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SAMPLE: &str = "main_menu.sample";
    pub const MAIN_MENU_FILE: &str = "main_menu.file";
    pub const MAIN_MENU_MATERIALS: &str = "main_menu.materials";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROMPT_FORMULATION_PATH: &str = "prompt.formulation_path";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_TEMPERATURE_RISE: &str = "result.temperature_rise";
    pub const RESULT_UNCORRECTED_DT: &str = "result.uncorrected_dt";
    pub const RESULT_HEAT_RELEASE: &str = "result.heat_release";
    pub const RESULT_NCO_MOLES: &str = "result.nco_moles";
    pub const RESULT_HEAT_CAPACITY: &str = "result.heat_capacity";
    pub const RESULT_GAS_HEAT_CAPACITY: &str = "result.gas_heat_capacity";
    pub const RESULT_CRM_TOTAL: &str = "result.crm_total";
    pub const STEPS_HEADING: &str = "result.steps_heading";

    pub const MATERIALS_HEADING: &str = "materials.heading";
    pub const PROMPT_MATERIAL_NAME: &str = "materials.prompt_name";
    pub const MATERIAL_NOT_FOUND: &str = "materials.not_found";
    pub const GAS_TABLE_HEADING: &str = "materials.gas_table_heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_ENTHALPY: &str = "settings.current_enthalpy";
    pub const SETTINGS_CURRENT_CP: &str = "settings.current_cp";
    pub const SETTINGS_PROMPT_ENTHALPY: &str = "settings.prompt_enthalpy";
    pub const SETTINGS_PROMPT_CP: &str = "settings.prompt_cp";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열로 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== PU Foam Heat Rise ===",
        MAIN_MENU_SAMPLE => "1) 샘플 배합 계산",
        MAIN_MENU_FILE => "2) TOML 배합 파일 계산",
        MAIN_MENU_MATERIALS => "3) 원료 물성 조회",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PROMPT_FORMULATION_PATH => "배합 TOML 파일 경로: ",
        RESULT_HEADING => "\n== 계산 결과 ==",
        RESULT_TEMPERATURE_RISE => "온도 상승(CRM 보정)",
        RESULT_UNCORRECTED_DT => "온도 상승(보정 전)",
        RESULT_HEAT_RELEASE => "발열량",
        RESULT_NCO_MOLES => "NCO 몰수",
        RESULT_HEAT_CAPACITY => "총 열용량",
        RESULT_GAS_HEAT_CAPACITY => "가스 열용량",
        RESULT_CRM_TOTAL => "CRM 합계",
        STEPS_HEADING => "\n-- 유도 과정 --",
        MATERIALS_HEADING => "\n-- 원료 물성 조회 --",
        PROMPT_MATERIAL_NAME => "원료 이름(빈 입력 시 전체 목록): ",
        MATERIAL_NOT_FOUND => "해당 원료가 데이터베이스에 없습니다.",
        GAS_TABLE_HEADING => "발포 가스 참고 물성:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_ENTHALPY => "현재 기본 반응 엔탈피 [kJ/mol]:",
        SETTINGS_CURRENT_CP => "현재 기본 비열 [J/(g·K)]:",
        SETTINGS_PROMPT_ENTHALPY => "새 반응 엔탈피 (엔터=유지): ",
        SETTINGS_PROMPT_CP => "새 기본 비열 (엔터=유지): ",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => "?",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== PU Foam Heat Rise ===",
        MAIN_MENU_SAMPLE => "1) Run sample formulation",
        MAIN_MENU_FILE => "2) Run formulation from TOML file",
        MAIN_MENU_MATERIALS => "3) Material property lookup",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROMPT_FORMULATION_PATH => "Formulation TOML path: ",
        RESULT_HEADING => "\n== Calculation Result ==",
        RESULT_TEMPERATURE_RISE => "Temperature rise (CRM corrected)",
        RESULT_UNCORRECTED_DT => "Temperature rise (uncorrected)",
        RESULT_HEAT_RELEASE => "Heat release",
        RESULT_NCO_MOLES => "NCO moles",
        RESULT_HEAT_CAPACITY => "Total heat capacity",
        RESULT_GAS_HEAT_CAPACITY => "Gas heat capacity",
        RESULT_CRM_TOTAL => "CRM total",
        STEPS_HEADING => "\n-- Derivation Steps --",
        MATERIALS_HEADING => "\n-- Material Property Lookup --",
        PROMPT_MATERIAL_NAME => "Material name (empty = list all): ",
        MATERIAL_NOT_FOUND => "Material not found in database.",
        GAS_TABLE_HEADING => "Blowing-agent reference properties:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_ENTHALPY => "Current default reaction enthalpy [kJ/mol]:",
        SETTINGS_CURRENT_CP => "Current default heat capacity [J/(g·K)]:",
        SETTINGS_PROMPT_ENTHALPY => "New reaction enthalpy (enter = keep): ",
        SETTINGS_PROMPT_CP => "New default heat capacity (enter = keep): ",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}
