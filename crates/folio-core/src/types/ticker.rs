//! 티커 심볼 타입.
//!
//! 시장 데이터 제공자와 예측 엔진 사이에서 종목을 식별하는 심볼입니다.
//! 예: "AAPL", "VTI", "SPY".

use serde::{Deserialize, Serialize};
use std::fmt;

/// 거래 가능한 종목의 티커 심볼.
///
/// 생성 시 대문자로 정규화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// 새 티커를 생성합니다.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into().trim().to_uppercase())
    }

    /// 티커 문자열을 반환합니다.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
