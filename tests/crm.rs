//! CRM(화학 위험 보정 계수) 회귀 테스트.
use pu_foam_heat_rise::formulation::{CatalystType, Component};
use pu_foam_heat_rise::thermo::crm;

fn catalyst(name: &str, mass_g: f64, kind: CatalystType, conc: Option<f64>) -> Component {
    Component::Catalyst {
        material_name: name.to_string(),
        mass_g,
        catalyst_type: kind,
        concentration_pct: conc,
        heat_capacity_j_per_g_k: None,
    }
}

#[test]
fn none_type_is_identity() {
    assert_eq!(crm::modifier(CatalystType::None, 5.0), 1.0);
}

#[test]
fn zero_or_negative_concentration_is_identity() {
    assert_eq!(crm::modifier(CatalystType::Dmdee, 0.0), 1.0);
    assert_eq!(crm::modifier(CatalystType::SnOct2, -1.0), 1.0);
    assert_eq!(crm::modifier(CatalystType::Dbtdl, f64::NAN), 1.0);
}

#[test]
fn dmdee_formula_points() {
    assert!((crm::modifier(CatalystType::Dmdee, 1.0) - 1.1).abs() < 1e-12);
    let expected = 1.0 + 0.1 * 2.0_f64.powf(1.25);
    assert!((crm::modifier(CatalystType::Dmdee, 2.0) - expected).abs() < 1e-12);
}

#[test]
fn tin_catalyst_formula_points() {
    assert!((crm::modifier(CatalystType::SnOct2, 1.0) - 2.2).abs() < 1e-12);
    assert!((crm::modifier(CatalystType::Dbtdl, 1.0) - 2.2).abs() < 1e-12);
    let expected = 1.8 + 0.4 * 4.0_f64.powf(1.5);
    assert!((crm::modifier(CatalystType::SnOct2, 4.0) - expected).abs() < 1e-12);
}

#[test]
fn no_qualifying_catalyst_yields_unit_total() {
    let catalysts = vec![
        catalyst("A", 0.0, CatalystType::Dmdee, Some(1.0)),
        catalyst("B", 2.0, CatalystType::Dmdee, Some(0.0)),
        catalyst("C", 2.0, CatalystType::Dmdee, None),
    ];
    let agg = crm::aggregate(&catalysts);
    assert_eq!(agg.total, 1.0);
    assert!(agg.breakdown.is_empty());
}

#[test]
fn equal_masses_average_to_mean() {
    let catalysts = vec![
        catalyst("DMDEE", 2.0, CatalystType::Dmdee, Some(1.0)),
        catalyst("SnOct2", 2.0, CatalystType::SnOct2, Some(1.0)),
    ];
    let agg = crm::aggregate(&catalysts);
    // (1.1 + 2.2) / 2 = 1.65
    assert!((agg.total - 1.65).abs() < 1e-12, "total={}", agg.total);
    assert_eq!(agg.breakdown.len(), 2);
    assert_eq!(agg.breakdown[0].catalyst_name, "DMDEE");
    assert_eq!(agg.breakdown[1].catalyst_name, "SnOct2");
}

#[test]
fn unequal_masses_bias_toward_heavier_catalyst() {
    let catalysts = vec![
        catalyst("DMDEE", 3.0, CatalystType::Dmdee, Some(1.0)),
        catalyst("SnOct2", 1.0, CatalystType::SnOct2, Some(1.0)),
    ];
    let agg = crm::aggregate(&catalysts);
    let expected = 0.75 * 1.1 + 0.25 * 2.2;
    assert!((agg.total - expected).abs() < 1e-12, "total={}", agg.total);
    assert!(agg.total < 1.65, "질량이 큰 DMDEE 쪽으로 치우쳐야 한다");
}

#[test]
fn none_type_with_concentration_still_qualifies_with_unit_crm() {
    let catalysts = vec![
        catalyst("NEUTRAL", 2.0, CatalystType::None, Some(5.0)),
        catalyst("SnOct2", 2.0, CatalystType::SnOct2, Some(1.0)),
    ];
    let agg = crm::aggregate(&catalysts);
    // (1.0 + 2.2) / 2 = 1.6
    assert!((agg.total - 1.6).abs() < 1e-12, "total={}", agg.total);
    assert_eq!(agg.breakdown[0].crm, 1.0);
}

#[test]
fn non_catalyst_components_are_ignored() {
    let components = vec![
        Component::Polyol {
            material_name: "PEG-400".to_string(),
            mass_g: 100.0,
            molecular_weight_g_per_mol: Some(400.0),
            heat_capacity_j_per_g_k: Some(2.1),
        },
        catalyst("DMDEE", 2.0, CatalystType::Dmdee, Some(1.0)),
    ];
    let agg = crm::aggregate(&components);
    assert_eq!(agg.breakdown.len(), 1);
    assert!((agg.total - 1.1).abs() < 1e-12);
}
