//! 시장 데이터 수집.
//!
//! 이 크레이트는 `folio_core::MarketDataProvider` 계약의 구현체를 제공합니다:
//! - [`provider::alpaca`]: 브로커리지 데이터 API (Alpaca Data v2) HTTP 클라이언트
//! - [`provider::memory`]: 테스트/데모용 인메모리 제공자
//!
//! 응답은 이 경계에서 강타입 구조체로 역직렬화/검증되며,
//! 예측 엔진은 원시 JSON을 절대 보지 않습니다.

pub mod provider;

pub use provider::alpaca::AlpacaDataClient;
pub use provider::memory::StaticBarsProvider;
