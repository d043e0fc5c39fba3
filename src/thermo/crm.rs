use super::positive_or_zero;
use crate::formulation::{CatalystType, Component};

/// 촉매별 CRM 내역. 보고/트레이스에 노출된다.
#[derive(Debug, Clone)]
pub struct CrmEntry {
    pub catalyst_name: String,
    pub concentration_pct: f64,
    pub crm: f64,
}

/// 질량 가중 CRM 집계 결과.
#[derive(Debug, Clone)]
pub struct CrmAggregate {
    /// 무차원 가중 평균. 적용 대상 촉매가 없으면 1.0.
    pub total: f64,
    /// 적용 대상(질량>0, 농도>0) 촉매의 입력 순서 내역.
    pub breakdown: Vec<CrmEntry>,
}

impl Default for CrmAggregate {
    fn default() -> Self {
        Self {
            total: 1.0,
            breakdown: Vec::new(),
        }
    }
}

/// 촉매 종류와 농도[%]에서 개별 CRM을 계산한다.
///
/// None 또는 농도 0 이하는 촉매 효과가 없어 1.0이다.
pub fn modifier(catalyst_type: CatalystType, concentration_pct: f64) -> f64 {
    if !concentration_pct.is_finite() || concentration_pct <= 0.0 {
        return 1.0;
    }
    match catalyst_type {
        CatalystType::Dmdee => 1.0 + 0.1 * concentration_pct.powf(1.25),
        CatalystType::SnOct2 | CatalystType::Dbtdl => {
            1.8 + 0.4 * concentration_pct.powf(1.5)
        }
        CatalystType::None => 1.0,
    }
}

/// 촉매들의 질량 가중 CRM을 집계한다.
///
/// 질량>0, 농도>0 인 촉매만 포함하며 가중치는 질량 비율이다(농도 가중이
/// 아니다). 해당 촉매가 없으면 총 CRM은 1.0이고 내역은 비어 있다.
pub fn aggregate<'a, I>(catalysts: I) -> CrmAggregate
where
    I: IntoIterator<Item = &'a Component>,
{
    let mut weighted = Vec::new();
    let mut total_mass = 0.0;
    for comp in catalysts {
        let Component::Catalyst {
            material_name,
            mass_g,
            catalyst_type,
            concentration_pct,
            ..
        } = comp
        else {
            continue;
        };
        let mass = positive_or_zero(*mass_g);
        let conc = positive_or_zero(concentration_pct.unwrap_or(0.0));
        if mass <= 0.0 || conc <= 0.0 {
            continue;
        }
        weighted.push((
            mass,
            CrmEntry {
                catalyst_name: material_name.clone(),
                concentration_pct: conc,
                crm: modifier(*catalyst_type, conc),
            },
        ));
        total_mass += mass;
    }
    if weighted.is_empty() || total_mass <= 0.0 {
        return CrmAggregate::default();
    }
    let total = weighted
        .iter()
        .map(|(mass, entry)| (mass / total_mass) * entry.crm)
        .sum();
    CrmAggregate {
        total,
        breakdown: weighted.into_iter().map(|(_, entry)| entry).collect(),
    }
}
