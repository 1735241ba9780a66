//! 예측 엔진 에러 타입.
//!
//! 세 경우 모두 현재 호출에 대해 종결적이며, 엔진 내부에서 재시도하지
//! 않습니다. 요청 전체를 다시 시도할지는 호출자의 책임입니다.

use chrono::NaiveDate;
use thiserror::Error;

use folio_core::MarketDataError;

/// 예측 엔진 에러.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// 제공자가 요청한 티커/기간의 가격 이력을 제공하지 못함
    #[error("Market data unavailable: {0}")]
    DataUnavailable(#[from] MarketDataError),

    /// 목표일이 오늘보다 엄격히 이후가 아님
    #[error("Invalid horizon: target date {target} is not after today")]
    InvalidHorizon { target: NaiveDate },

    /// 배분 집합이 비어 있음
    #[error("Forecast request has no allocations")]
    EmptyAllocations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_unavailable_from_market_error() {
        let err: ForecastError = MarketDataError::NoData {
            ticker: "AAPL".to_string(),
        }
        .into();
        assert!(matches!(err, ForecastError::DataUnavailable(_)));
    }
}
