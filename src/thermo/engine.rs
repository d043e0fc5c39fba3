use super::{
    crm::{self, CrmAggregate, CrmEntry},
    gas::{self, GasAccumulation},
    heat_capacity::{self, HeatCapacityBreakdown},
    nco::{self, NcoAccumulation},
    Defaults, GAS_CONSTANT_J_PER_MOL_K, REFERENCE_TEMPERATURE_K,
};
use crate::formulation::Formulation;

/// 유도 과정 한 단계. 제목/수식/입력값/결과 문자열을 담는다.
#[derive(Debug, Clone)]
pub struct CalcStep {
    pub title: String,
    pub equation: String,
    /// 표시 순서를 유지하는 (이름, 값) 쌍.
    pub values: Vec<(String, String)>,
    pub result: String,
}

/// 계산 결과 레코드. 생성 이후 수정되지 않는 순수 값이다.
#[derive(Debug, Clone)]
pub struct CalcResult {
    /// CRM 보정 온도 상승 [°C]
    pub temperature_rise_c: f64,
    /// 보정 전 온도 상승 [°C]
    pub uncorrected_delta_t_c: f64,
    /// 발열량 [kJ]
    pub heat_release_kj: f64,
    /// 반응 NCO 몰수 [mol]
    pub nco_moles_mol: f64,
    /// 총 열용량 [J/K] (가스 기여 포함)
    pub heat_capacity_j_per_k: f64,
    /// 가스 열용량 [J/K]
    pub gas_heat_capacity_j_per_k: f64,
    /// 질량 가중 CRM (기본 1.0)
    pub crm_total: f64,
    /// 적용 대상 촉매별 CRM 내역
    pub crm_breakdown: Vec<CrmEntry>,
    /// 순서 있는 유도 과정
    pub steps: Vec<CalcStep>,
}

/// 배합으로부터 단열 온도 상승을 계산한다.
///
/// 네 누적기는 서로 독립이며, 결과는 항상 유한한 값이다. 비어 있거나
/// 무효한 입력은 0 기여로 처리되고 오류는 발생하지 않는다.
pub fn calculate(formulation: &Formulation, defaults: &Defaults) -> CalcResult {
    let nco_acc = nco::accumulate(&formulation.part_a, defaults);
    let cp_breakdown = heat_capacity::aggregate(&formulation.part_a, &formulation.part_b, defaults);
    let gas_acc = gas::accumulate(&formulation.part_c);
    let crm_agg = crm::aggregate(formulation.catalysts());

    let total_heat_capacity = cp_breakdown.total_j_per_k() + gas_acc.total_j_per_k;
    // kJ → J 단위 환산 후 나눈다. 열용량 0 이하면 ΔT도 0이다.
    let uncorrected_delta_t = if total_heat_capacity > 0.0 {
        nco_acc.total_heat_release_kj * 1000.0 / total_heat_capacity
    } else {
        0.0
    };
    let temperature_rise = uncorrected_delta_t * crm_agg.total;

    let steps = build_steps(
        &nco_acc,
        &cp_breakdown,
        &gas_acc,
        &crm_agg,
        total_heat_capacity,
        uncorrected_delta_t,
        temperature_rise,
        defaults,
    );

    CalcResult {
        temperature_rise_c: temperature_rise,
        uncorrected_delta_t_c: uncorrected_delta_t,
        heat_release_kj: nco_acc.total_heat_release_kj,
        nco_moles_mol: nco_acc.total_moles_mol,
        heat_capacity_j_per_k: total_heat_capacity,
        gas_heat_capacity_j_per_k: gas_acc.total_j_per_k,
        crm_total: crm_agg.total,
        crm_breakdown: crm_agg.breakdown,
        steps,
    }
}

/// 유도 과정을 조립한다. 단계 순서와 조건부 포함(가스 단계는 가스 열용량>0,
/// CRM 단계는 내역이 있을 때)은 외부 소비자가 의존하는 계약이다.
#[allow(clippy::too_many_arguments)]
fn build_steps(
    nco_acc: &NcoAccumulation,
    cp_breakdown: &HeatCapacityBreakdown,
    gas_acc: &GasAccumulation,
    crm_agg: &CrmAggregate,
    total_heat_capacity: f64,
    uncorrected_delta_t: f64,
    temperature_rise: f64,
    defaults: &Defaults,
) -> Vec<CalcStep> {
    let mut steps = Vec::new();

    let iso_mass_sum: f64 = nco_acc.traces.iter().map(|t| t.mass_g).sum();
    let nco_list = nco_acc
        .traces
        .iter()
        .map(|t| format!("{}: {}%", t.material_name, t.nco_content_pct))
        .collect::<Vec<_>>()
        .join(", ");
    let mw_list = nco_acc
        .traces
        .iter()
        .map(|t| format!("{}: {} g/mol", t.material_name, t.molecular_weight_g_per_mol))
        .collect::<Vec<_>>()
        .join(", ");
    steps.push(CalcStep {
        title: "Calculate NCO Moles".to_string(),
        equation: "n_NCO = (mass_iso × %NCO/100) / MW_iso".to_string(),
        values: vec![
            ("mass_iso".to_string(), format!("{iso_mass_sum:.2} g")),
            ("%NCO_content".to_string(), nco_list),
            ("MW_iso".to_string(), mw_list),
        ],
        result: format!("{:.4} mol", nco_acc.total_moles_mol),
    });

    steps.push(CalcStep {
        title: "Calculate Heat Release".to_string(),
        equation: "Q = n_NCO × ΔH_rxn".to_string(),
        values: vec![
            (
                "n_NCO".to_string(),
                format!("{:.4} mol", nco_acc.total_moles_mol),
            ),
            (
                "ΔH_rxn".to_string(),
                format!(
                    "{} kJ/mol (standard for all isocyanate reactions)",
                    defaults.reaction_enthalpy_kj_per_mol
                ),
            ),
        ],
        result: format!("{:.2} kJ", nco_acc.total_heat_release_kj),
    });

    steps.push(CalcStep {
        title: "Calculate Total Heat Capacity".to_string(),
        equation: "Cp_total = Σ(mass_i × Cp_i) + Cp_gas".to_string(),
        values: vec![
            (
                "A Side".to_string(),
                format!("{:.2} J/K", cp_breakdown.part_a_j_per_k),
            ),
            (
                "B Side".to_string(),
                format!(
                    "{:.2} J/K (includes optional Cp for catalysts/surfactants/flame-retardants)",
                    cp_breakdown.part_b_j_per_k
                ),
            ),
            (
                "C Side (Gas)".to_string(),
                format!(
                    "{:.2} J/K (calculated via C_gas = (m/MW) × R × T)",
                    gas_acc.total_j_per_k
                ),
            ),
        ],
        result: format!("{total_heat_capacity:.2} J/K"),
    });

    if gas_acc.total_j_per_k > 0.0 {
        steps.push(CalcStep {
            title: "Calculate Gas Heat Capacity".to_string(),
            equation: "C_gas = (m/MW) × R × T".to_string(),
            values: vec![
                (
                    "m (total gas mass)".to_string(),
                    format!("{:.2} g", gas_acc.total_mass_g),
                ),
                (
                    "MW (molecular weight)".to_string(),
                    format!("{:.2} g/mol", gas_acc.average_mw_g_per_mol),
                ),
                (
                    "R (gas constant)".to_string(),
                    format!("{GAS_CONSTANT_J_PER_MOL_K} J/mol·K"),
                ),
                (
                    "T (temperature)".to_string(),
                    format!("{REFERENCE_TEMPERATURE_K} K"),
                ),
                (
                    "C_gas × T (illustrative)".to_string(),
                    format!(
                        "{:.2} J at {REFERENCE_TEMPERATURE_K} K",
                        gas_acc.total_j_per_k * REFERENCE_TEMPERATURE_K
                    ),
                ),
            ],
            result: format!("{:.2} J/K", gas_acc.total_j_per_k),
        });
    }

    steps.push(CalcStep {
        title: "Calculate Base Temperature Rise (Uncorrected)".to_string(),
        equation: "ΔT_base = Q / Cp_total".to_string(),
        values: vec![
            (
                "Q".to_string(),
                format!("{:.2} kJ", nco_acc.total_heat_release_kj),
            ),
            (
                "Cp_total".to_string(),
                format!("{total_heat_capacity:.2} J/K"),
            ),
        ],
        result: format!("{uncorrected_delta_t:.2}°C"),
    });

    if !crm_agg.breakdown.is_empty() {
        for entry in &crm_agg.breakdown {
            let equation = if (entry.crm - 1.0).abs() < f64::EPSILON {
                "CRM = 1.0 (No catalytic effect)"
            } else {
                "CRM = f(type, concentration)"
            };
            steps.push(CalcStep {
                title: format!("Calculate CRM for {}", entry.catalyst_name),
                equation: equation.to_string(),
                values: vec![
                    ("Catalyst".to_string(), entry.catalyst_name.clone()),
                    (
                        "Concentration".to_string(),
                        format!("{:.2}%", entry.concentration_pct),
                    ),
                ],
                result: format!("CRM = {:.4}", entry.crm),
            });
        }

        steps.push(CalcStep {
            title: "Calculate Total CRM (Weighted Average)".to_string(),
            equation: "CRM_total = Σ(w_i × CRM_i)".to_string(),
            values: vec![
                (
                    "Catalyst Count".to_string(),
                    format!("{}", crm_agg.breakdown.len()),
                ),
                ("Weighting Method".to_string(), "Mass-based".to_string()),
            ],
            result: format!("CRM_total = {:.4}", crm_agg.total),
        });

        steps.push(CalcStep {
            title: "Apply CRM Correction".to_string(),
            equation: "ΔT_corrected = ΔT_base × CRM_total".to_string(),
            values: vec![
                ("ΔT_base".to_string(), format!("{uncorrected_delta_t:.2}°C")),
                ("CRM_total".to_string(), format!("{:.4}", crm_agg.total)),
            ],
            result: format!("{temperature_rise:.2}°C"),
        });
    }

    steps
}
