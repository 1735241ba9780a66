//! Integration tests for the forecast engine with an in-memory provider.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal_macros::dec;

use folio_core::{
    Allocation, DailyBar, ForecastRequest, MarketDataProvider, MarketDataResult, Price, Ticker,
};
use folio_data::StaticBarsProvider;
use folio_forecast::{ForecastEngine, ForecastError};

fn days_from_today(offset: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(offset)
}

/// Flat price history ending yesterday.
fn constant_series(days: i64, close: rust_decimal::Decimal) -> Vec<DailyBar> {
    (1..=days)
        .rev()
        .map(|back| DailyBar::new(days_from_today(-back), close))
        .collect()
}

#[tokio::test]
async fn test_constant_price_forecast_is_flat_with_undefined_sharpe() {
    let ticker = Ticker::new("X");
    let provider =
        StaticBarsProvider::new().with_series(ticker.clone(), constant_series(5, dec!(100)));
    let engine = ForecastEngine::new(Arc::new(provider));

    let request = ForecastRequest {
        allocations: vec![Allocation::new(ticker, 1.0)],
        total_value: 100.0,
        start_date: days_from_today(-6),
        target_date: days_from_today(10),
    };

    let result = engine.forecast(&request).await.unwrap();

    assert_eq!(result.historical.len(), 5);
    for point in &result.historical {
        assert!((point.value - 100.0).abs() < 1e-9);
    }

    assert_eq!(result.paths.len(), 5);
    for path in &result.paths {
        assert_eq!(path.values.len(), 10);
        // Zero drift and zero volatility: GBM is exactly constant
        assert!(path.values.iter().all(|&v| v == 100.0));
    }

    // Zero-variance history: the sentinel is None, never a silent NaN
    assert_eq!(result.sharpe_ratio, None);
}

#[tokio::test]
async fn test_two_ticker_basket_valuation_and_log_return() {
    let a = Ticker::new("A");
    let b = Ticker::new("B");
    let provider = StaticBarsProvider::new()
        .with_series(
            a.clone(),
            vec![
                DailyBar::new(days_from_today(-2), dec!(200)),
                DailyBar::new(days_from_today(-1), dec!(220)),
            ],
        )
        .with_series(
            b.clone(),
            vec![
                DailyBar::new(days_from_today(-2), dec!(50)),
                DailyBar::new(days_from_today(-1), dec!(55)),
            ],
        );
    let engine = ForecastEngine::new(Arc::new(provider));

    let request = ForecastRequest {
        allocations: vec![Allocation::new(a, 0.5), Allocation::new(b, 0.5)],
        total_value: 10000.0,
        start_date: days_from_today(-5),
        target_date: days_from_today(5),
    };

    let result = engine.forecast(&request).await.unwrap();

    // Shares are anchored at the last bar, so the curve ends at total_value;
    // both tickers rose 10%, so the curve starts at total_value / 1.1
    assert_eq!(result.historical.len(), 2);
    assert!((result.historical[1].value - 10000.0).abs() < 1e-9);
    assert!((result.historical[0].value - 10000.0 / 1.1).abs() < 1e-9);

    let log_return = (result.historical[1].value / result.historical[0].value).ln();
    assert!((log_return - 1.1_f64.ln()).abs() < 1e-9);

    // A single return has zero population variance
    assert_eq!(result.sharpe_ratio, None);
}

/// Provider wrapper counting how many fetches the engine issues.
struct CountingProvider {
    inner: StaticBarsProvider,
    calls: AtomicUsize,
}

#[async_trait]
impl MarketDataProvider for CountingProvider {
    async fn daily_bars(
        &self,
        ticker: &Ticker,
        start: NaiveDate,
        end: NaiveDate,
    ) -> MarketDataResult<Vec<DailyBar>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.daily_bars(ticker, start, end).await
    }

    async fn latest_close(&self, ticker: &Ticker) -> MarketDataResult<Price> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.latest_close(ticker).await
    }
}

#[tokio::test]
async fn test_invalid_horizon_rejected_before_any_fetch() {
    let ticker = Ticker::new("X");
    let provider = Arc::new(CountingProvider {
        inner: StaticBarsProvider::new()
            .with_series(ticker.clone(), constant_series(5, dec!(100))),
        calls: AtomicUsize::new(0),
    });
    let engine = ForecastEngine::new(provider.clone());

    for offset in [0, -3] {
        let request = ForecastRequest {
            allocations: vec![Allocation::new(ticker.clone(), 1.0)],
            total_value: 100.0,
            start_date: days_from_today(-10),
            target_date: days_from_today(offset),
        };
        let err = engine.forecast(&request).await.unwrap_err();
        assert!(matches!(err, ForecastError::InvalidHorizon { .. }));
    }

    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_empty_allocations_rejected() {
    let engine = ForecastEngine::new(Arc::new(StaticBarsProvider::new()));
    let request = ForecastRequest {
        allocations: vec![],
        total_value: 100.0,
        start_date: days_from_today(-10),
        target_date: days_from_today(10),
    };
    let err = engine.forecast(&request).await.unwrap_err();
    assert!(matches!(err, ForecastError::EmptyAllocations));
}

#[tokio::test]
async fn test_unknown_ticker_fails_whole_forecast() {
    let known = Ticker::new("X");
    let provider =
        StaticBarsProvider::new().with_series(known.clone(), constant_series(5, dec!(100)));
    let engine = ForecastEngine::new(Arc::new(provider));

    let request = ForecastRequest {
        allocations: vec![
            Allocation::new(known, 0.5),
            Allocation::new(Ticker::new("MISSING"), 0.5),
        ],
        total_value: 100.0,
        start_date: days_from_today(-10),
        target_date: days_from_today(10),
    };
    let err = engine.forecast(&request).await.unwrap_err();
    assert!(matches!(err, ForecastError::DataUnavailable(_)));
}

#[tokio::test]
async fn test_snapshot_positions_use_latest_close() {
    let ticker = Ticker::new("A");
    let provider = StaticBarsProvider::new().with_series(
        ticker.clone(),
        vec![
            DailyBar::new(days_from_today(-2), dec!(150)),
            DailyBar::new(days_from_today(-1), dec!(200)),
        ],
    );
    let engine = ForecastEngine::new(Arc::new(provider));

    let positions = engine
        .snapshot_positions(&[Allocation::new(ticker.clone(), 1.0)], 10000.0)
        .await
        .unwrap();

    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].ticker, ticker);
    assert_eq!(positions[0].latest_close, dec!(200));
    assert!((positions[0].shares - 50.0).abs() < 1e-12);
}
