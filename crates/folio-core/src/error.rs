//! 시장 데이터 경계의 에러 타입.
//!
//! 이 모듈은 시장 데이터 제공자 경계에서 사용되는 에러 타입을 정의합니다.
//! 예측 엔진은 이 에러를 재시도하지 않고 호출자에게 그대로 전달합니다.

use thiserror::Error;

/// 시장 데이터 제공자 에러.
#[derive(Debug, Error)]
pub enum MarketDataError {
    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    Network(String),

    /// 요청 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 인증/권한 에러
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 요청 한도 초과
    #[error("Rate limit exceeded")]
    RateLimited,

    /// API 에러 코드
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// 파싱/역직렬화 에러
    #[error("Parse error: {0}")]
    Parse(String),

    /// 요청한 티커/기간에 대한 데이터 없음
    #[error("No bars available for {ticker}")]
    NoData { ticker: String },
}

/// 시장 데이터 작업을 위한 Result 타입.
pub type MarketDataResult<T> = Result<T, MarketDataError>;

impl MarketDataError {
    /// 재시도 가능한 에러인지 확인합니다.
    ///
    /// 엔진 내부에서는 재시도하지 않으며, 상위 호출자가 요청 전체를
    /// 다시 시도할지 판단할 때 사용합니다.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MarketDataError::Network(_)
                | MarketDataError::Timeout(_)
                | MarketDataError::RateLimited
        )
    }

    /// 인증 에러인지 확인합니다.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, MarketDataError::Unauthorized(_))
    }
}

impl From<serde_json::Error> for MarketDataError {
    fn from(err: serde_json::Error) -> Self {
        MarketDataError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let network_err = MarketDataError::Network("connection refused".to_string());
        assert!(network_err.is_retryable());
        assert!(MarketDataError::RateLimited.is_retryable());

        let no_data = MarketDataError::NoData {
            ticker: "AAPL".to_string(),
        };
        assert!(!no_data.is_retryable());
    }

    #[test]
    fn test_error_auth() {
        let auth_err = MarketDataError::Unauthorized("invalid key".to_string());
        assert!(auth_err.is_auth_error());
        assert!(!auth_err.is_retryable());
    }
}
