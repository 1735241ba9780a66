//! 시장 데이터 제공자 trait.
//!
//! 예측 엔진이 소비하는 외부 협력자 계약입니다. 구현체는 `folio-data`에
//! 있으며, 엔진은 이 trait을 통해서만 시장 데이터에 접근합니다.
//!
//! 제공자 실패에 대한 재시도는 이 계층에서 정의하지 않습니다.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::MarketDataResult;
use crate::types::{Price, Ticker};

use super::market_data::DailyBar;

/// 시장 데이터 제공자 계약.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// 주어진 기간의 일봉 시퀀스를 날짜 오름차순으로 조회합니다.
    ///
    /// # 인자
    /// * `ticker` - 종목 티커
    /// * `start` - 조회 시작일 (포함)
    /// * `end` - 조회 종료일 (포함)
    ///
    /// 해당 티커/기간에 데이터가 없으면 `MarketDataError::NoData`를 반환합니다.
    async fn daily_bars(
        &self,
        ticker: &Ticker,
        start: NaiveDate,
        end: NaiveDate,
    ) -> MarketDataResult<Vec<DailyBar>>;

    /// 최신 종가를 조회합니다.
    ///
    /// "현재 시점" 기준으로 묵시적 보유 수량을 산출할 때 사용됩니다.
    async fn latest_close(&self, ticker: &Ticker) -> MarketDataResult<Price>;
}
