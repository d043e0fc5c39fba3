use super::{positive_opt, positive_or_zero, Defaults};
use crate::formulation::Component;

/// 이소시아네이트 성분별 트레이스 값. 유도 과정 표시에 쓰인다.
#[derive(Debug, Clone)]
pub struct IsocyanateTrace {
    pub material_name: String,
    pub mass_g: f64,
    pub nco_content_pct: f64,
    pub molecular_weight_g_per_mol: f64,
}

/// NCO 몰수/발열량 누적 결과.
#[derive(Debug, Clone, Default)]
pub struct NcoAccumulation {
    pub total_moles_mol: f64,
    pub total_heat_release_kj: f64,
    pub traces: Vec<IsocyanateTrace>,
}

/// A파트의 이소시아네이트 성분에서 NCO 몰수와 발열량을 누적한다.
///
/// `moles = mass × (%NCO/100) / MW` 이며 분자량 미입력/0은 기본값으로
/// 폴백한다. %NCO가 없거나 0 이하인 성분은 오류 없이 0으로 기여한다.
/// 발열량은 재료별 엔탈피가 아니라 표준 엔탈피 절댓값을 쓴다.
pub fn accumulate(part_a: &[Component], defaults: &Defaults) -> NcoAccumulation {
    let mut acc = NcoAccumulation::default();
    for comp in part_a {
        let Component::Isocyanate {
            material_name,
            mass_g,
            molecular_weight_g_per_mol,
            nco_content_pct,
            ..
        } = comp
        else {
            continue;
        };
        let mass = positive_or_zero(*mass_g);
        let nco = positive_or_zero(*nco_content_pct);
        let mw = positive_opt(*molecular_weight_g_per_mol)
            .unwrap_or(defaults.isocyanate_mw_g_per_mol);
        acc.traces.push(IsocyanateTrace {
            material_name: material_name.clone(),
            mass_g: mass,
            nco_content_pct: nco,
            molecular_weight_g_per_mol: mw,
        });
        if nco <= 0.0 || mw <= 0.0 {
            continue;
        }
        let moles = mass * (nco / 100.0) / mw;
        acc.total_moles_mol += moles;
        acc.total_heat_release_kj += moles * defaults.reaction_enthalpy_kj_per_mol.abs();
    }
    acc
}
