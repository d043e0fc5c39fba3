//! 단열 발열(ΔT) 추정 엔진 모듈 모음.
//!
//! 네 개의 누적기(NCO 몰수/발열량, 응축상 열용량, 이상기체 열용량, CRM)를
//! 합성해 보정된 온도 상승과 유도 과정 트레이스를 만든다. 엔진은 상태가 없고
//! 입력만의 함수이며 실패하지 않는다.

pub mod crm;
pub mod engine;
pub mod gas;
pub mod heat_capacity;
pub mod nco;

pub use engine::{calculate, CalcResult, CalcStep};

/// NCO 반응 표준 엔탈피 [kJ/mol]. 재료별 입력값과 무관하게 이 값을 사용한다.
pub const STANDARD_REACTION_ENTHALPY_KJ_PER_MOL: f64 = -80.0;
/// 이소시아네이트 분자량 미입력/0일 때의 폴백 [g/mol].
pub const DEFAULT_ISOCYANATE_MW_G_PER_MOL: f64 = 250.0;
/// 응축상 성분 비열 기본값 [J/(g·K)].
pub const DEFAULT_HEAT_CAPACITY_J_PER_G_K: f64 = 2.0;
/// 농도 미입력 시 기본값 [%] (열용량 집계 전용).
pub const DEFAULT_CONCENTRATION_PCT: f64 = 100.0;
/// 이상기체 상수 [J/(mol·K)].
pub const GAS_CONSTANT_J_PER_MOL_K: f64 = 8.314;
/// 트레이스 표시 전용 기준 온도 [K].
pub const REFERENCE_TEMPERATURE_K: f64 = 298.15;

/// 엔진이 사용하는 기본값 묶음.
/// 전역 설정을 직접 읽지 않고 호출 측이 명시적으로 전달한다.
#[derive(Debug, Clone, Copy)]
pub struct Defaults {
    /// 반응 엔탈피 [kJ/mol]. 발열량에는 절댓값이 들어간다.
    pub reaction_enthalpy_kj_per_mol: f64,
    /// 이소시아네이트 분자량 폴백 [g/mol]
    pub isocyanate_mw_g_per_mol: f64,
    /// 비열 기본값 [J/(g·K)]
    pub heat_capacity_j_per_g_k: f64,
    /// 농도 기본값 [%]
    pub concentration_pct: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            reaction_enthalpy_kj_per_mol: STANDARD_REACTION_ENTHALPY_KJ_PER_MOL,
            isocyanate_mw_g_per_mol: DEFAULT_ISOCYANATE_MW_G_PER_MOL,
            heat_capacity_j_per_g_k: DEFAULT_HEAT_CAPACITY_J_PER_G_K,
            concentration_pct: DEFAULT_CONCENTRATION_PCT,
        }
    }
}

/// 유한한 양수만 통과시키고 그 외(NaN/∞/0 이하)는 0으로 강제한다.
pub(crate) fn positive_or_zero(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Option<f64>에서 유한한 양수만 취한다.
pub(crate) fn positive_opt(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite() && *x > 0.0)
}
