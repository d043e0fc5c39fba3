//! 1K PU 폼 배합의 단열 발열(ΔT)을 추정하는 계산 라이브러리.
//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 GUI 확장도 쉽게 한다.

pub mod app;
pub mod config;
pub mod formulation;
pub mod i18n;
pub mod material_db;
pub mod thermo;
pub mod ui_cli;
