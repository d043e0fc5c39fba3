use super::{positive_opt, positive_or_zero, GAS_CONSTANT_J_PER_MOL_K};
use crate::formulation::Component;

/// 발포 가스 열용량 누적 결과.
#[derive(Debug, Clone, Copy, Default)]
pub struct GasAccumulation {
    /// 누적 가스 열용량 [J/K]. (m/MW)×R 의 합이며 온도 인자는 곱하지 않는다.
    pub total_j_per_k: f64,
    /// 가스 총 질량 [g] (트레이스 표시용)
    pub total_mass_g: f64,
    /// 성분 수 기준 평균 분자량 [g/mol] (트레이스 표시용)
    pub average_mw_g_per_mol: f64,
}

/// C파트 가스 성분의 이상기체 열용량을 누적한다.
///
/// 문서식은 C_gas = (m/MW) × R × T 이지만 총 열용량에 더해지는 값은
/// T를 곱하지 않은 (m/MW)×R 이다. T 배수는 유도 과정 트레이스에서
/// 표시 전용으로만 계산한다. 질량 또는 분자량이 0/무효인 성분은 0으로
/// 기여한다.
pub fn accumulate(part_c: &[Component]) -> GasAccumulation {
    let mut acc = GasAccumulation::default();
    let mut mw_sum = 0.0;
    let mut count = 0usize;
    for comp in part_c {
        let Component::Gas { .. } = comp else {
            continue;
        };
        let mass = positive_or_zero(comp.mass_g());
        let mw = positive_opt(comp.molecular_weight_g_per_mol()).unwrap_or(0.0);
        acc.total_mass_g += mass;
        mw_sum += mw;
        count += 1;
        if mass > 0.0 && mw > 0.0 {
            acc.total_j_per_k += (mass / mw) * GAS_CONSTANT_J_PER_MOL_K;
        }
    }
    if count > 0 {
        acc.average_mw_g_per_mol = mw_sum / count as f64;
    }
    acc
}
