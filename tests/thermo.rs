//! 단열 발열 엔진 회귀 테스트.
use pu_foam_heat_rise::formulation::{CatalystType, Component, Formulation, GasType};
use pu_foam_heat_rise::thermo::{self, Defaults};

fn iso(mass_g: f64, nco_content_pct: f64, mw: Option<f64>) -> Component {
    Component::Isocyanate {
        material_name: "ISO".to_string(),
        mass_g,
        molecular_weight_g_per_mol: mw,
        heat_capacity_j_per_g_k: None,
        nco_content_pct,
        reaction_enthalpy_kj_per_mol: None,
    }
}

fn polyol(mass_g: f64, cp: Option<f64>) -> Component {
    Component::Polyol {
        material_name: "POLYOL".to_string(),
        mass_g,
        molecular_weight_g_per_mol: None,
        heat_capacity_j_per_g_k: cp,
    }
}

fn gas(mass_g: f64, gas_type: GasType, mw: Option<f64>) -> Component {
    Component::Gas {
        material_name: gas_type.label().to_string(),
        mass_g,
        gas_type,
        molecular_weight_g_per_mol: mw,
        heat_capacity_j_per_g_k: None,
    }
}

#[test]
fn empty_formulation_degenerates_to_zero() {
    let result = thermo::calculate(&Formulation::default(), &Defaults::default());
    assert_eq!(result.temperature_rise_c, 0.0);
    assert_eq!(result.uncorrected_delta_t_c, 0.0);
    assert_eq!(result.heat_release_kj, 0.0);
    assert_eq!(result.nco_moles_mol, 0.0);
    assert_eq!(result.heat_capacity_j_per_k, 0.0);
    assert_eq!(result.gas_heat_capacity_j_per_k, 0.0);
    assert_eq!(result.crm_total, 1.0);
    assert!(result.crm_breakdown.is_empty());
}

#[test]
fn single_isocyanate_nco_moles_and_heat() {
    let formulation = Formulation {
        part_a: vec![iso(45.0, 48.3, Some(174.2))],
        ..Formulation::default()
    };
    let result = thermo::calculate(&formulation, &Defaults::default());
    assert!(
        (result.nco_moles_mol - 0.1248).abs() < 1e-4,
        "nco_moles={}",
        result.nco_moles_mol
    );
    assert!(
        (result.heat_release_kj - result.nco_moles_mol * 80.0).abs() < 1e-9,
        "heat={} moles={}",
        result.heat_release_kj,
        result.nco_moles_mol
    );
}

#[test]
fn missing_or_zero_molecular_weight_falls_back_to_250() {
    for mw in [None, Some(0.0)] {
        let formulation = Formulation {
            part_a: vec![iso(100.0, 30.0, mw)],
            ..Formulation::default()
        };
        let result = thermo::calculate(&formulation, &Defaults::default());
        // 100 × 0.30 / 250 = 0.12 mol
        assert!(
            (result.nco_moles_mol - 0.12).abs() < 1e-12,
            "mw={mw:?} moles={}",
            result.nco_moles_mol
        );
    }
}

#[test]
fn zero_nco_contributes_nothing() {
    let formulation = Formulation {
        part_a: vec![iso(100.0, 0.0, Some(174.2))],
        ..Formulation::default()
    };
    let result = thermo::calculate(&formulation, &Defaults::default());
    assert_eq!(result.nco_moles_mol, 0.0);
    assert_eq!(result.heat_release_kj, 0.0);
    // 열용량에는 여전히 기본 비열로 기여한다.
    assert!((result.heat_capacity_j_per_k - 200.0).abs() < 1e-9);
}

#[test]
fn part_b_minor_additive_uses_effective_mass() {
    let formulation = Formulation {
        part_b: vec![Component::Catalyst {
            material_name: "CAT".to_string(),
            mass_g: 10.0,
            catalyst_type: CatalystType::None,
            concentration_pct: Some(50.0),
            heat_capacity_j_per_g_k: Some(2.5),
        }],
        ..Formulation::default()
    };
    let result = thermo::calculate(&formulation, &Defaults::default());
    // 10 × 0.5 × 2.5 = 12.5 J/K
    assert!(
        (result.heat_capacity_j_per_k - 12.5).abs() < 1e-9,
        "cp={}",
        result.heat_capacity_j_per_k
    );
}

#[test]
fn heat_capacity_monotonic_in_mass() {
    let base = Formulation {
        part_a: vec![iso(45.0, 48.3, Some(174.2))],
        part_b: vec![polyol(100.0, Some(2.1))],
        ..Formulation::default()
    };
    let mut bigger = base.clone();
    bigger.part_b[0] = polyol(150.0, Some(2.1));
    let cp_base = thermo::calculate(&base, &Defaults::default()).heat_capacity_j_per_k;
    let cp_bigger = thermo::calculate(&bigger, &Defaults::default()).heat_capacity_j_per_k;
    assert!(cp_bigger >= cp_base, "{cp_bigger} < {cp_base}");
}

#[test]
fn gas_contribution_omits_temperature_factor() {
    let formulation = Formulation {
        part_c: vec![gas(44.01, GasType::Co2, Some(44.01))],
        ..Formulation::default()
    };
    let result = thermo::calculate(&formulation, &Defaults::default());
    // 1 mol × R, T는 곱하지 않는다.
    assert!(
        (result.gas_heat_capacity_j_per_k - 8.314).abs() < 1e-9,
        "gas_cp={}",
        result.gas_heat_capacity_j_per_k
    );
    assert!((result.heat_capacity_j_per_k - 8.314).abs() < 1e-9);
}

#[test]
fn gas_without_molecular_weight_is_safe() {
    let formulation = Formulation {
        part_c: vec![gas(50.0, GasType::Pentane, None), gas(10.0, GasType::N2, Some(0.0))],
        ..Formulation::default()
    };
    let result = thermo::calculate(&formulation, &Defaults::default());
    assert_eq!(result.gas_heat_capacity_j_per_k, 0.0);
    assert!(result.temperature_rise_c.is_finite());
    assert!(result.heat_capacity_j_per_k.is_finite());
}

#[test]
fn hfo_1233zd_properties_are_pinned() {
    // 사용자가 다른 분자량을 넣어도 132.03 g/mol로 계산해야 한다.
    let formulation = Formulation {
        part_c: vec![gas(132.03, GasType::Hfo1233zd, Some(999.0))],
        ..Formulation::default()
    };
    let result = thermo::calculate(&formulation, &Defaults::default());
    assert!(
        (result.gas_heat_capacity_j_per_k - 8.314).abs() < 1e-9,
        "gas_cp={}",
        result.gas_heat_capacity_j_per_k
    );
}

#[test]
fn nan_mass_treated_as_zero() {
    let formulation = Formulation {
        part_a: vec![iso(f64::NAN, 48.3, Some(174.2))],
        part_b: vec![polyol(f64::NAN, Some(2.1))],
        ..Formulation::default()
    };
    let result = thermo::calculate(&formulation, &Defaults::default());
    assert_eq!(result.nco_moles_mol, 0.0);
    assert_eq!(result.heat_capacity_j_per_k, 0.0);
    assert_eq!(result.temperature_rise_c, 0.0);
    assert!(result.temperature_rise_c.is_finite());
}

#[test]
fn sample_formulation_end_to_end() {
    let result = thermo::calculate(&Formulation::sample(), &Defaults::default());
    // A파트 45×1.9 + B파트 100×2.1 + 2×2.5 = 300.5 J/K
    assert!(
        (result.heat_capacity_j_per_k - 300.5).abs() < 1e-9,
        "cp={}",
        result.heat_capacity_j_per_k
    );
    assert!((result.nco_moles_mol - 0.1248).abs() < 1e-4);
    let expected_dt = result.heat_release_kj * 1000.0 / 300.5;
    assert!(
        (result.uncorrected_delta_t_c - expected_dt).abs() < 1e-9,
        "dt={}",
        result.uncorrected_delta_t_c
    );
    // 샘플 촉매는 촉매 종류 None/농도 미입력이라 CRM 보정이 없다.
    assert_eq!(result.crm_total, 1.0);
    assert_eq!(result.temperature_rise_c, result.uncorrected_delta_t_c);
}

#[test]
fn step_order_without_gas_or_catalyst() {
    let result = thermo::calculate(&Formulation::sample(), &Defaults::default());
    let titles: Vec<&str> = result.steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Calculate NCO Moles",
            "Calculate Heat Release",
            "Calculate Total Heat Capacity",
            "Calculate Base Temperature Rise (Uncorrected)",
        ]
    );
}

#[test]
fn step_order_with_gas_and_catalyst() {
    let formulation = Formulation {
        part_a: vec![iso(45.0, 48.3, Some(174.2))],
        part_b: vec![Component::Catalyst {
            material_name: "DMDEE".to_string(),
            mass_g: 1.0,
            catalyst_type: CatalystType::Dmdee,
            concentration_pct: Some(1.0),
            heat_capacity_j_per_g_k: None,
        }],
        part_c: vec![gas(44.01, GasType::Co2, Some(44.01))],
    };
    let result = thermo::calculate(&formulation, &Defaults::default());
    let titles: Vec<&str> = result.steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Calculate NCO Moles",
            "Calculate Heat Release",
            "Calculate Total Heat Capacity",
            "Calculate Gas Heat Capacity",
            "Calculate Base Temperature Rise (Uncorrected)",
            "Calculate CRM for DMDEE",
            "Calculate Total CRM (Weighted Average)",
            "Apply CRM Correction",
        ]
    );
    assert_eq!(result.crm_breakdown.len(), 1);
    // DMDEE c=1% → CRM = 1 + 0.1×1^1.25 = 1.1
    assert!((result.crm_total - 1.1).abs() < 1e-9);
    assert!(
        (result.temperature_rise_c - result.uncorrected_delta_t_c * 1.1).abs() < 1e-9,
        "corrected={} base={}",
        result.temperature_rise_c,
        result.uncorrected_delta_t_c
    );
}

#[test]
fn gas_step_carries_illustrative_t_scaled_value_only() {
    let formulation = Formulation {
        part_c: vec![gas(44.01, GasType::Co2, Some(44.01))],
        ..Formulation::default()
    };
    let result = thermo::calculate(&formulation, &Defaults::default());
    let gas_step = result
        .steps
        .iter()
        .find(|s| s.title == "Calculate Gas Heat Capacity")
        .expect("gas step present");
    // 누적 총합에는 T가 곱해지지 않았고, 트레이스에만 T 배수 표시가 있다.
    assert!((result.gas_heat_capacity_j_per_k - 8.314).abs() < 1e-9);
    assert!(gas_step
        .values
        .iter()
        .any(|(name, _)| name == "C_gas × T (illustrative)"));
}

#[test]
fn explicit_defaults_override_constants() {
    let defaults = Defaults {
        reaction_enthalpy_kj_per_mol: -100.0,
        heat_capacity_j_per_g_k: 1.0,
        ..Defaults::default()
    };
    let formulation = Formulation {
        part_a: vec![iso(100.0, 30.0, Some(250.0))],
        ..Formulation::default()
    };
    let result = thermo::calculate(&formulation, &defaults);
    // 0.12 mol × 100 kJ/mol = 12 kJ, 열용량 100 × 1.0 = 100 J/K
    assert!((result.heat_release_kj - 12.0).abs() < 1e-9);
    assert!((result.heat_capacity_j_per_k - 100.0).abs() < 1e-9);
    assert!((result.uncorrected_delta_t_c - 120.0).abs() < 1e-9);
}
