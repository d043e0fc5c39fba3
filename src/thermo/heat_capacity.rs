use super::{positive_opt, positive_or_zero, Defaults};
use crate::formulation::Component;

/// 응축상 열용량 집계 결과 [J/K]. 파트별 소계를 유지해 트레이스에 쓴다.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeatCapacityBreakdown {
    pub part_a_j_per_k: f64,
    pub part_b_j_per_k: f64,
}

impl HeatCapacityBreakdown {
    pub fn total_j_per_k(&self) -> f64 {
        self.part_a_j_per_k + self.part_b_j_per_k
    }
}

/// A/B파트 전 성분의 열용량을 집계한다.
///
/// A파트는 전체 질량 × (비열 또는 기본값)이다. B파트의 촉매/계면활성제/
/// 난연제는 소량 첨가제라 활성 농도가 현열 기여를 결정하므로 유효 질량
/// (질량 × 농도/100)에 자체 비열(미입력/0 이하면 기본값)을 적용하고,
/// 그 외 성분은 전체 질량을 쓴다.
pub fn aggregate(
    part_a: &[Component],
    part_b: &[Component],
    defaults: &Defaults,
) -> HeatCapacityBreakdown {
    let mut out = HeatCapacityBreakdown::default();
    for comp in part_a {
        let mass = positive_or_zero(comp.mass_g());
        let cp = positive_opt(comp.heat_capacity_j_per_g_k())
            .unwrap_or(defaults.heat_capacity_j_per_g_k);
        out.part_a_j_per_k += mass * cp;
    }
    for comp in part_b {
        let mass = positive_or_zero(comp.mass_g());
        let cp = positive_opt(comp.heat_capacity_j_per_g_k())
            .unwrap_or(defaults.heat_capacity_j_per_g_k);
        if comp.is_minor_additive() {
            let conc =
                positive_opt(comp.concentration_pct()).unwrap_or(defaults.concentration_pct);
            out.part_b_j_per_k += mass * (conc / 100.0) * cp;
        } else {
            out.part_b_j_per_k += mass * cp;
        }
    }
    out
}
