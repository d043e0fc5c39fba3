use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// HFO-1233zd의 고정 분자량 [g/mol]. 입력값과 무관하게 이 값을 사용한다.
pub const HFO_1233ZD_MW_G_PER_MOL: f64 = 132.03;
/// HFO-1233zd의 고정 비열 [J/(g·K)].
pub const HFO_1233ZD_CP_J_PER_G_K: f64 = 0.85;

/// 촉매 종류. CRM(화학 위험 보정 계수) 계산에 사용된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CatalystType {
    #[default]
    None,
    #[serde(rename = "DMDEE")]
    Dmdee,
    SnOct2,
    #[serde(rename = "DBTDL")]
    Dbtdl,
}

/// 발포 가스(C파트) 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GasType {
    #[serde(rename = "CO2")]
    Co2,
    #[serde(rename = "N2")]
    N2,
    #[serde(rename = "HFC-245fa")]
    Hfc245fa,
    #[serde(rename = "HFC-365mfc")]
    Hfc365mfc,
    Pentane,
    Cyclopentane,
    #[serde(rename = "HFO-1233zd")]
    Hfo1233zd,
}

impl GasType {
    pub fn label(&self) -> &'static str {
        match self {
            GasType::Co2 => "CO2",
            GasType::N2 => "N2",
            GasType::Hfc245fa => "HFC-245fa",
            GasType::Hfc365mfc => "HFC-365mfc",
            GasType::Pentane => "Pentane",
            GasType::Cyclopentane => "Cyclopentane",
            GasType::Hfo1233zd => "HFO-1233zd",
        }
    }

    /// 물성이 고정된 가스면 (분자량, 비열)을 반환한다.
    /// 현재는 HFO-1233zd만 고정 물성을 가진다.
    pub fn fixed_properties(&self) -> Option<(f64, f64)> {
        match self {
            GasType::Hfo1233zd => Some((HFO_1233ZD_MW_G_PER_MOL, HFO_1233ZD_CP_J_PER_G_K)),
            _ => None,
        }
    }
}

/// 배합 성분. 종류별로 의미 있는 필드만 갖도록 태그된 합 타입으로 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Component {
    /// A파트 이소시아네이트. %NCO가 반응 몰수를 결정한다.
    Isocyanate {
        material_name: String,
        mass_g: f64,
        /// 미입력 또는 0이면 기본값 250 g/mol로 폴백한다.
        #[serde(default)]
        molecular_weight_g_per_mol: Option<f64>,
        #[serde(default)]
        heat_capacity_j_per_g_k: Option<f64>,
        nco_content_pct: f64,
        /// 자료표에 있는 재료별 반응 엔탈피 [kJ/mol]. 참고용으로만 보존하며
        /// 발열량 계산은 표준 엔탈피를 사용한다.
        #[serde(default)]
        reaction_enthalpy_kj_per_mol: Option<f64>,
    },
    Polyol {
        material_name: String,
        mass_g: f64,
        #[serde(default)]
        molecular_weight_g_per_mol: Option<f64>,
        #[serde(default)]
        heat_capacity_j_per_g_k: Option<f64>,
    },
    /// 촉매. 농도[%]는 유효 질량 스케일과 CRM 적용 조건에 쓰인다.
    Catalyst {
        material_name: String,
        mass_g: f64,
        #[serde(default)]
        catalyst_type: CatalystType,
        #[serde(default)]
        concentration_pct: Option<f64>,
        #[serde(default)]
        heat_capacity_j_per_g_k: Option<f64>,
    },
    Surfactant {
        material_name: String,
        mass_g: f64,
        #[serde(default)]
        concentration_pct: Option<f64>,
        #[serde(default)]
        heat_capacity_j_per_g_k: Option<f64>,
    },
    FlameRetardant {
        material_name: String,
        mass_g: f64,
        #[serde(default)]
        concentration_pct: Option<f64>,
        #[serde(default)]
        heat_capacity_j_per_g_k: Option<f64>,
    },
    Additive {
        material_name: String,
        mass_g: f64,
        #[serde(default)]
        molecular_weight_g_per_mol: Option<f64>,
        #[serde(default)]
        heat_capacity_j_per_g_k: Option<f64>,
    },
    /// C파트 발포 가스.
    Gas {
        material_name: String,
        mass_g: f64,
        gas_type: GasType,
        #[serde(default)]
        molecular_weight_g_per_mol: Option<f64>,
        #[serde(default)]
        heat_capacity_j_per_g_k: Option<f64>,
    },
}

impl Component {
    pub fn material_name(&self) -> &str {
        match self {
            Component::Isocyanate { material_name, .. }
            | Component::Polyol { material_name, .. }
            | Component::Catalyst { material_name, .. }
            | Component::Surfactant { material_name, .. }
            | Component::FlameRetardant { material_name, .. }
            | Component::Additive { material_name, .. }
            | Component::Gas { material_name, .. } => material_name,
        }
    }

    pub fn mass_g(&self) -> f64 {
        match self {
            Component::Isocyanate { mass_g, .. }
            | Component::Polyol { mass_g, .. }
            | Component::Catalyst { mass_g, .. }
            | Component::Surfactant { mass_g, .. }
            | Component::FlameRetardant { mass_g, .. }
            | Component::Additive { mass_g, .. }
            | Component::Gas { mass_g, .. } => *mass_g,
        }
    }

    /// 성분에 기재된 비열 [J/(g·K)]. 종류에 따라 없을 수 있다.
    pub fn heat_capacity_j_per_g_k(&self) -> Option<f64> {
        match self {
            Component::Isocyanate {
                heat_capacity_j_per_g_k,
                ..
            }
            | Component::Polyol {
                heat_capacity_j_per_g_k,
                ..
            }
            | Component::Catalyst {
                heat_capacity_j_per_g_k,
                ..
            }
            | Component::Surfactant {
                heat_capacity_j_per_g_k,
                ..
            }
            | Component::FlameRetardant {
                heat_capacity_j_per_g_k,
                ..
            }
            | Component::Additive {
                heat_capacity_j_per_g_k,
                ..
            } => *heat_capacity_j_per_g_k,
            Component::Gas {
                gas_type,
                heat_capacity_j_per_g_k,
                ..
            } => match gas_type.fixed_properties() {
                Some((_, cp)) => Some(cp),
                None => *heat_capacity_j_per_g_k,
            },
        }
    }

    /// 성분에 기재된 분자량 [g/mol]. 고정 물성 가스는 항상 고정값을 돌려준다.
    pub fn molecular_weight_g_per_mol(&self) -> Option<f64> {
        match self {
            Component::Isocyanate {
                molecular_weight_g_per_mol,
                ..
            }
            | Component::Polyol {
                molecular_weight_g_per_mol,
                ..
            }
            | Component::Additive {
                molecular_weight_g_per_mol,
                ..
            } => *molecular_weight_g_per_mol,
            Component::Gas {
                gas_type,
                molecular_weight_g_per_mol,
                ..
            } => match gas_type.fixed_properties() {
                Some((mw, _)) => Some(mw),
                None => *molecular_weight_g_per_mol,
            },
            Component::Catalyst { .. }
            | Component::Surfactant { .. }
            | Component::FlameRetardant { .. } => None,
        }
    }

    /// 촉매/계면활성제/난연제 여부. 열용량 집계 시 유효 질량 스케일 대상이다.
    pub fn is_minor_additive(&self) -> bool {
        matches!(
            self,
            Component::Catalyst { .. }
                | Component::Surfactant { .. }
                | Component::FlameRetardant { .. }
        )
    }

    pub fn concentration_pct(&self) -> Option<f64> {
        match self {
            Component::Catalyst {
                concentration_pct, ..
            }
            | Component::Surfactant {
                concentration_pct, ..
            }
            | Component::FlameRetardant {
                concentration_pct, ..
            } => *concentration_pct,
            _ => None,
        }
    }
}

/// 배합: A파트(이소시아네이트), B파트(폴리올/첨가제), C파트(발포 가스).
/// 각 파트 내 순서는 입력 순서이며 계산 결과에는 영향을 주지 않는다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Formulation {
    #[serde(default)]
    pub part_a: Vec<Component>,
    #[serde(default)]
    pub part_b: Vec<Component>,
    #[serde(default)]
    pub part_c: Vec<Component>,
}

impl Formulation {
    /// A/B파트의 촉매 성분을 입력 순서대로 돌려준다.
    pub fn catalysts(&self) -> impl Iterator<Item = &Component> {
        self.part_a
            .iter()
            .chain(self.part_b.iter())
            .filter(|c| matches!(c, Component::Catalyst { .. }))
    }

    /// TOML 배합 파일을 로드한다.
    pub fn load_from_toml(path: &Path) -> Result<Formulation, FormulationFileError> {
        let content = fs::read_to_string(path)?;
        let formulation: Formulation = toml::from_str(&content)?;
        Ok(formulation)
    }

    /// 데모/테스트용 내장 샘플 배합(연질폼 표준 배합).
    pub fn sample() -> Formulation {
        Formulation {
            part_a: vec![Component::Isocyanate {
                material_name: "TDI 80/20".to_string(),
                mass_g: 45.0,
                molecular_weight_g_per_mol: Some(174.2),
                heat_capacity_j_per_g_k: Some(1.9),
                nco_content_pct: 48.3,
                reaction_enthalpy_kj_per_mol: Some(-105.0),
            }],
            part_b: vec![
                Component::Polyol {
                    material_name: "PEG-400".to_string(),
                    mass_g: 100.0,
                    molecular_weight_g_per_mol: Some(400.0),
                    heat_capacity_j_per_g_k: Some(2.1),
                },
                Component::Catalyst {
                    material_name: "DABCO 33-LV".to_string(),
                    mass_g: 2.0,
                    catalyst_type: CatalystType::None,
                    concentration_pct: None,
                    heat_capacity_j_per_g_k: Some(2.5),
                },
            ],
            part_c: Vec::new(),
        }
    }
}

/// 배합 파일 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum FormulationFileError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for FormulationFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormulationFileError::Io(e) => write!(f, "배합 파일 입출력 오류: {e}"),
            FormulationFileError::Parse(e) => write!(f, "배합 파일 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for FormulationFileError {}

impl From<std::io::Error> for FormulationFileError {
    fn from(value: std::io::Error) -> Self {
        FormulationFileError::Io(value)
    }
}

impl From<toml::de::Error> for FormulationFileError {
    fn from(value: toml::de::Error) -> Self {
        FormulationFileError::Parse(value)
    }
}
