//! 예측 엔진.
//!
//! 배분 바스켓과 목표일을 받아 과거 가치 곡선과 몬테카를로 미래 분포를
//! 산출하는 공개 연산을 제공합니다. 호출 단위로 순수하며, 입력과 외부에서
//! 조회한 가격 데이터만의 함수입니다. 부분/스트리밍 결과는 없습니다.

use std::sync::Arc;

use chrono::{Duration, Utc};
use futures::future;
use serde::Serialize;
use tracing::{debug, info};

use folio_core::{
    Allocation, DecimalExt, ForecastRequest, ForecastResult, MarketDataProvider, Price, Ticker,
};

use crate::error::ForecastError;
use crate::simulation::{representative_paths, simulate_paths, BoxMuller, SIMULATION_COUNT};
use crate::statistics::{log_returns, sharpe_ratio, GbmCalibration};
use crate::valuation::{implied_shares, valuation_curve};

/// 과거 조회 종료일 버퍼 (일).
///
/// 아직 확정되지 않은 당일 데이터를 요청하지 않기 위해 "오늘"에서
/// 이만큼 뺀 날짜까지만 일봉을 조회합니다.
pub const SETTLE_BUFFER_DAYS: i64 = 1;

/// "현재 시점" 기준 묵시적 보유 스냅샷.
#[derive(Debug, Clone, Serialize)]
pub struct PositionSnapshot {
    /// 종목 티커
    pub ticker: Ticker,
    /// 배분 비중
    pub weight: f64,
    /// 최신 종가
    pub latest_close: Price,
    /// 묵시적 보유 수량
    pub shares: f64,
}

/// 포트폴리오 예측 엔진.
pub struct ForecastEngine {
    provider: Arc<dyn MarketDataProvider>,
}

impl ForecastEngine {
    /// 새 엔진을 생성합니다.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// 바스켓의 미래 가치 분포와 과거 가치 곡선을 산출합니다.
    ///
    /// # 에러
    ///
    /// - [`ForecastError::EmptyAllocations`] - 배분 집합이 비어 있음
    /// - [`ForecastError::InvalidHorizon`] - 목표일이 오늘 이후가 아님
    ///   (제공자 호출 전에 거부됨)
    /// - [`ForecastError::DataUnavailable`] - 티커의 가격 이력 조회 실패
    pub async fn forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResult, ForecastError> {
        if request.allocations.is_empty() {
            return Err(ForecastError::EmptyAllocations);
        }

        let today = Utc::now().date_naive();
        let num_days = (request.target_date - today).num_days();
        if num_days <= 0 {
            return Err(ForecastError::InvalidHorizon {
                target: request.target_date,
            });
        }

        info!(
            tickers = request.allocations.len(),
            horizon_days = num_days,
            "Running portfolio forecast"
        );

        // 티커별 조회는 동시에 수행하되, 전부 도착한 뒤에 가치 평가 시작
        let end = today - Duration::days(SETTLE_BUFFER_DAYS);
        let fetches = request
            .allocations
            .iter()
            .map(|a| self.provider.daily_bars(&a.ticker, request.start_date, end));
        let bars_by_ticker = future::try_join_all(fetches).await?;

        let historical = valuation_curve(&request.allocations, request.total_value, &bars_by_ticker)?;

        let values: Vec<f64> = historical.iter().map(|p| p.value).collect();
        let returns = log_returns(&values);
        let calibration = GbmCalibration::from_returns(&returns);
        debug!(
            drift = calibration.drift,
            volatility = calibration.volatility,
            returns = returns.len(),
            "Calibrated GBM parameters"
        );

        let start_value = values.last().copied().unwrap_or(request.total_value);
        let mut normals = BoxMuller::new(rand::thread_rng());
        let paths = simulate_paths(
            start_value,
            &calibration,
            num_days as usize,
            SIMULATION_COUNT,
            &mut normals,
        );

        Ok(ForecastResult {
            historical,
            paths: representative_paths(paths),
            sharpe_ratio: sharpe_ratio(&returns),
        })
    }

    /// 최신 종가 기준 묵시적 보유 수량을 산출합니다.
    ///
    /// 과거 구간 없이 "현재 시점" 기준으로 바스켓을 가격화하는
    /// [`Self::forecast`] 2단계의 변형입니다.
    pub async fn snapshot_positions(
        &self,
        allocations: &[Allocation],
        total_value: f64,
    ) -> Result<Vec<PositionSnapshot>, ForecastError> {
        if allocations.is_empty() {
            return Err(ForecastError::EmptyAllocations);
        }

        let fetches = allocations.iter().map(|a| self.provider.latest_close(&a.ticker));
        let closes = future::try_join_all(fetches).await?;

        Ok(allocations
            .iter()
            .zip(closes)
            .map(|(allocation, close)| PositionSnapshot {
                ticker: allocation.ticker.clone(),
                weight: allocation.weight,
                latest_close: close,
                shares: implied_shares(total_value, allocation.weight, close.to_f64_lossy()),
            })
            .collect())
    }
}
