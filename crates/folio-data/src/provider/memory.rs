//! 인메모리 시장 데이터 제공자.
//!
//! 고정된 일봉 시퀀스를 반환하는 제공자입니다. 예측 엔진의 통합 테스트와
//! 네트워크 없는 데모에서 사용됩니다.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use folio_core::{
    last_close, DailyBar, MarketDataError, MarketDataProvider, MarketDataResult, Price, Ticker,
};

/// 고정 일봉 제공자.
#[derive(Debug, Default, Clone)]
pub struct StaticBarsProvider {
    series: HashMap<Ticker, Vec<DailyBar>>,
}

impl StaticBarsProvider {
    /// 빈 제공자를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 티커의 일봉 시퀀스를 등록합니다 (날짜 오름차순 가정).
    pub fn with_series(mut self, ticker: Ticker, bars: Vec<DailyBar>) -> Self {
        self.series.insert(ticker, bars);
        self
    }
}

#[async_trait]
impl MarketDataProvider for StaticBarsProvider {
    async fn daily_bars(
        &self,
        ticker: &Ticker,
        start: NaiveDate,
        end: NaiveDate,
    ) -> MarketDataResult<Vec<DailyBar>> {
        let bars: Vec<DailyBar> = self
            .series
            .get(ticker)
            .map(|bars| {
                bars.iter()
                    .filter(|b| b.date >= start && b.date <= end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if bars.is_empty() {
            return Err(MarketDataError::NoData {
                ticker: ticker.to_string(),
            });
        }
        Ok(bars)
    }

    async fn latest_close(&self, ticker: &Ticker) -> MarketDataResult<Price> {
        self.series
            .get(ticker)
            .and_then(|bars| last_close(bars))
            .ok_or_else(|| MarketDataError::NoData {
                ticker: ticker.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_static_provider_filters_range() {
        let ticker = Ticker::new("X");
        let provider = StaticBarsProvider::new().with_series(
            ticker.clone(),
            vec![
                DailyBar::new(date(2024, 1, 2), dec!(100)),
                DailyBar::new(date(2024, 1, 3), dec!(101)),
                DailyBar::new(date(2024, 1, 4), dec!(102)),
            ],
        );

        let bars = provider
            .daily_bars(&ticker, date(2024, 1, 3), date(2024, 1, 4))
            .await
            .unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].close, dec!(101));
    }

    #[tokio::test]
    async fn test_static_provider_unknown_ticker() {
        let provider = StaticBarsProvider::new();
        let err = provider
            .daily_bars(&Ticker::new("NOPE"), date(2024, 1, 1), date(2024, 1, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, MarketDataError::NoData { .. }));
    }

    #[tokio::test]
    async fn test_static_provider_latest_close() {
        let ticker = Ticker::new("X");
        let provider = StaticBarsProvider::new().with_series(
            ticker.clone(),
            vec![
                DailyBar::new(date(2024, 1, 2), dec!(100)),
                DailyBar::new(date(2024, 1, 3), dec!(105.5)),
            ],
        );
        assert_eq!(provider.latest_close(&ticker).await.unwrap(), dec!(105.5));
    }
}
