//! 시장 데이터 타입 및 구조체.
//!
//! 시장 데이터 제공자가 반환하는 일봉(종가) 데이터를 정의합니다.
//! 한 티커당 날짜 오름차순으로 정렬된 하나의 시퀀스를 기대합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Price;

/// 일별 종가 데이터.
///
/// 제공자 경계에서 생성되며, 예측 엔진은 이 타입만 신뢰합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// 거래일 (달력 날짜)
    pub date: NaiveDate,
    /// 종가 (양수)
    pub close: Price,
}

impl DailyBar {
    /// 새 일봉을 생성합니다.
    pub fn new(date: NaiveDate, close: Price) -> Self {
        Self { date, close }
    }
}

/// 시퀀스의 마지막 종가를 반환합니다.
pub fn last_close(bars: &[DailyBar]) -> Option<Price> {
    bars.last().map(|b| b.close)
}
