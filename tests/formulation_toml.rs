//! 배합 TOML 로드와 엔진 연동 테스트.
use pu_foam_heat_rise::formulation::{Component, Formulation, GasType};
use pu_foam_heat_rise::thermo::{self, Defaults};

const SAMPLE_TOML: &str = r#"
[[part_a]]
type = "isocyanate"
material_name = "TDI 80/20"
mass_g = 45.0
molecular_weight_g_per_mol = 174.2
heat_capacity_j_per_g_k = 1.9
nco_content_pct = 48.3

[[part_b]]
type = "polyol"
material_name = "PEG-400"
mass_g = 100.0
molecular_weight_g_per_mol = 400.0
heat_capacity_j_per_g_k = 2.1

[[part_b]]
type = "catalyst"
material_name = "DMDEE"
mass_g = 2.0
catalyst_type = "DMDEE"
concentration_pct = 1.0

[[part_b]]
type = "flame-retardant"
material_name = "TCPP"
mass_g = 10.0
heat_capacity_j_per_g_k = 1.5

[[part_c]]
type = "gas"
material_name = "HFO-1233zd"
gas_type = "HFO-1233zd"
mass_g = 132.03
molecular_weight_g_per_mol = 999.0
"#;

fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, content).expect("write temp formulation");
    path
}

#[test]
fn load_formulation_from_toml_file() {
    let path = write_temp("pu_foam_formulation_full.toml", SAMPLE_TOML);
    let formulation = Formulation::load_from_toml(&path).expect("load formulation");
    assert_eq!(formulation.part_a.len(), 1);
    assert_eq!(formulation.part_b.len(), 3);
    assert_eq!(formulation.part_c.len(), 1);
    assert!(matches!(
        formulation.part_a[0],
        Component::Isocyanate { .. }
    ));
    assert!(matches!(
        formulation.part_b[2],
        Component::FlameRetardant { .. }
    ));
    let Component::Gas { gas_type, .. } = &formulation.part_c[0] else {
        panic!("part_c[0] should be a gas component");
    };
    assert_eq!(*gas_type, GasType::Hfo1233zd);
}

#[test]
fn loaded_formulation_calculates_with_pinned_gas_properties() {
    let path = write_temp("pu_foam_formulation_calc.toml", SAMPLE_TOML);
    let formulation = Formulation::load_from_toml(&path).expect("load formulation");
    let result = thermo::calculate(&formulation, &Defaults::default());
    // 분자량 999 입력은 무시되고 고정값 132.03이 쓰인다: 1 mol × R.
    assert!(
        (result.gas_heat_capacity_j_per_k - 8.314).abs() < 1e-9,
        "gas_cp={}",
        result.gas_heat_capacity_j_per_k
    );
    assert_eq!(result.crm_breakdown.len(), 1);
    assert!((result.crm_total - 1.1).abs() < 1e-9);
    // 촉매는 기재 비열이 없으므로 기본 2.0, 농도 1% 유효 질량으로 기여한다.
    let expected_cp = 45.0 * 1.9 + 100.0 * 2.1 + 2.0 * 0.01 * 2.0 + 10.0 * 1.5 + 8.314;
    assert!(
        (result.heat_capacity_j_per_k - expected_cp).abs() < 1e-9,
        "cp={} expected={}",
        result.heat_capacity_j_per_k,
        expected_cp
    );
}

#[test]
fn missing_parts_default_to_empty() {
    let path = write_temp(
        "pu_foam_formulation_partial.toml",
        r#"
[[part_a]]
type = "isocyanate"
material_name = "MDI"
mass_g = 100.0
nco_content_pct = 31.5
"#,
    );
    let formulation = Formulation::load_from_toml(&path).expect("load formulation");
    assert!(formulation.part_b.is_empty());
    assert!(formulation.part_c.is_empty());
    let result = thermo::calculate(&formulation, &Defaults::default());
    // 분자량 미기재 → 250 g/mol 폴백: 100 × 0.315 / 250 = 0.126 mol
    assert!((result.nco_moles_mol - 0.126).abs() < 1e-12);
}

#[test]
fn unreadable_file_reports_io_error() {
    let path = std::env::temp_dir().join("pu_foam_formulation_missing.toml");
    let _ = std::fs::remove_file(&path);
    let err = Formulation::load_from_toml(&path).expect_err("missing file should fail");
    assert!(err.to_string().contains("입출력"), "err={err}");
}
