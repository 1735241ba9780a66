//! 포트폴리오 예측 도메인 모델.
//!
//! - [`allocation`] - 포트폴리오 배분 (티커 + 비중)
//! - [`market_data`] - 일봉 데이터 구조체
//! - [`provider`] - 시장 데이터 제공자 trait
//! - [`forecast`] - 예측 요청/결과 타입

pub mod allocation;
pub mod forecast;
pub mod market_data;
pub mod provider;

pub use allocation::*;
pub use forecast::*;
pub use market_data::*;
pub use provider::*;
