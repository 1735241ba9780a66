//! # Folio Core
//!
//! 포트폴리오 예측 시스템의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 포트폴리오 배분(Allocation) 및 일봉(DailyBar) 타입
//! - 예측 요청/결과 구조체
//! - 시장 데이터 제공자 trait
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
