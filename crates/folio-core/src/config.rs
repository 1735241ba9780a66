//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//!
//! API 키와 기본 URL 같은 환경 의존 값은 명시적인 설정 객체로 전달되며,
//! 예측 엔진 내부에서는 절대 환경 변수를 직접 읽지 않습니다.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 시장 데이터 제공자 설정
    pub market_data: MarketDataConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 시장 데이터 제공자 설정.
///
/// 브로커리지 데이터 API 접속 정보입니다. 시크릿은 `secrecy`로 감싸
/// 로그/디버그 출력에 노출되지 않도록 합니다.
#[derive(Debug, Deserialize)]
pub struct MarketDataConfig {
    /// REST API 기본 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API 키 ID
    pub api_key_id: String,
    /// API 시크릿
    pub api_secret: SecretString,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://data.alpaca.markets".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일 값은 `FOLIO_` 접두사 환경 변수로 오버라이드할 수 있습니다.
    /// 예: `FOLIO_MARKET_DATA__API_KEY_ID`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("market_data.base_url", default_base_url())?
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "pretty");
    }

    #[test]
    fn test_market_data_config_defaults() {
        let json = serde_json::json!({
            "api_key_id": "key",
            "api_secret": "secret"
        });
        let config: MarketDataConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.base_url, "https://data.alpaca.markets");
        assert_eq!(config.request_timeout_secs, 30);
    }
}
