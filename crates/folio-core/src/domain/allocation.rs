//! 포트폴리오 배분 타입.
//!
//! 하나의 포트폴리오는 (티커, 비중) 배분의 비어 있지 않은 집합으로 표현됩니다.
//! 비중 합이 1이라는 가정은 호출자의 책임이며, 엔진 내부에서는 검증하지 않습니다.

use serde::{Deserialize, Serialize};

use crate::types::Ticker;

/// 비중 합 정규화 판정에 사용하는 허용 오차.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// 포트폴리오 내 단일 종목 배분.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// 종목 티커
    pub ticker: Ticker,
    /// 포트폴리오 가치 대비 비중 (0, 1]
    pub weight: f64,
}

impl Allocation {
    /// 새 배분을 생성합니다.
    pub fn new(ticker: impl Into<Ticker>, weight: f64) -> Self {
        Self {
            ticker: ticker.into(),
            weight,
        }
    }
}

/// 배분 비중의 합을 반환합니다.
pub fn weight_sum(allocations: &[Allocation]) -> f64 {
    allocations.iter().map(|a| a.weight).sum()
}

/// 배분 비중의 합이 1인지 (허용 오차 내에서) 확인합니다.
///
/// 검증용이 아니라 진단용입니다. 합이 1이 아니어도 예측은 수행되며,
/// 그 결과의 의미는 호출자의 책임입니다.
pub fn is_normalized(allocations: &[Allocation]) -> bool {
    (weight_sum(allocations) - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
}
