//! 자주 쓰는 PU 원료의 참고 물성 테이블과 이름 조회를 제공한다.
//! 값은 참고용이며 실제 배합 설계 시 제조사 TDS로 검증해야 한다.

use crate::formulation::{GasType, HFO_1233ZD_CP_J_PER_G_K, HFO_1233ZD_MW_G_PER_MOL};

/// 원료 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Isocyanate,
    Polyol,
    Catalyst,
    Surfactant,
    FlameRetardant,
}

impl MaterialKind {
    pub fn label(&self) -> &'static str {
        match self {
            MaterialKind::Isocyanate => "isocyanate",
            MaterialKind::Polyol => "polyol",
            MaterialKind::Catalyst => "catalyst",
            MaterialKind::Surfactant => "surfactant",
            MaterialKind::FlameRetardant => "flame-retardant",
        }
    }
}

#[derive(Debug)]
pub struct MaterialData {
    pub name: &'static str,
    pub kind: MaterialKind,
    pub molecular_weight_g_per_mol: f64,
    pub heat_capacity_j_per_g_k: f64,
    /// 이소시아네이트만 의미 있는 %NCO.
    pub nco_content_pct: Option<f64>,
    pub notes: &'static str,
}

static MATERIALS: &[MaterialData] = &[
    MaterialData {
        name: "MDI",
        kind: MaterialKind::Isocyanate,
        molecular_weight_g_per_mol: 250.0,
        heat_capacity_j_per_g_k: 1.8,
        nco_content_pct: Some(31.5),
        notes: "경질폼에 가장 널리 쓰이는 이소시아네이트.",
    },
    MaterialData {
        name: "TDI 80/20",
        kind: MaterialKind::Isocyanate,
        molecular_weight_g_per_mol: 174.2,
        heat_capacity_j_per_g_k: 1.9,
        nco_content_pct: Some(48.3),
        notes: "연질폼 표준 이소시아네이트 (2,4/2,6 이성질체 80:20).",
    },
    MaterialData {
        name: "PEG-400",
        kind: MaterialKind::Polyol,
        molecular_weight_g_per_mol: 400.0,
        heat_capacity_j_per_g_k: 2.1,
        nco_content_pct: None,
        notes: "연질폼 배합에 흔한 폴리에테르 폴리올.",
    },
    MaterialData {
        name: "DABCO 33-LV",
        kind: MaterialKind::Catalyst,
        molecular_weight_g_per_mol: 112.2,
        heat_capacity_j_per_g_k: 2.5,
        nco_content_pct: None,
        notes: "DPG 희석 33% 아민 겔화 촉매.",
    },
    MaterialData {
        name: "TCPP",
        kind: MaterialKind::FlameRetardant,
        molecular_weight_g_per_mol: 327.6,
        heat_capacity_j_per_g_k: 1.5,
        nco_content_pct: None,
        notes: "염소계 유기인 난연제.",
    },
];

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

/// 이름으로 원료를 찾는다. 대소문자를 구분하지 않는다.
pub fn find_material(name: &str) -> Option<&'static MaterialData> {
    let wanted = name.trim();
    MATERIALS.iter().find(|m| m.name.eq_ignore_ascii_case(wanted))
}

/// 발포 가스의 참고 물성 (분자량 [g/mol], 비열 [J/(g·K)]).
/// HFO-1233zd는 엔진이 강제하는 고정 물성과 동일한 값을 돌려준다.
pub fn gas_reference_properties(gas: GasType) -> (f64, f64) {
    match gas {
        GasType::Co2 => (44.01, 0.844),
        GasType::N2 => (28.01, 1.04),
        GasType::Hfc245fa => (134.05, 0.89),
        GasType::Hfc365mfc => (148.07, 0.93),
        GasType::Pentane => (72.15, 1.66),
        GasType::Cyclopentane => (70.13, 1.84),
        GasType::Hfo1233zd => (HFO_1233ZD_MW_G_PER_MOL, HFO_1233ZD_CP_J_PER_G_K),
    }
}

/// 조회 화면에 보여줄 가스 목록.
pub fn gas_types() -> &'static [GasType] {
    &[
        GasType::Co2,
        GasType::N2,
        GasType::Hfc245fa,
        GasType::Hfc365mfc,
        GasType::Pentane,
        GasType::Cyclopentane,
        GasType::Hfo1233zd,
    ]
}
