//! 묵시적 보유 수량 산출 및 과거 가치 곡선.
//!
//! 과거 구간 마지막 종가 기준으로 바스켓 구성을 고정하고
//! (`shares = total_value * weight / last_close`), 전체 과거 구간에
//! 동일한 보유 수량을 역투영합니다. 실제 과거 매매 이력이 아니라
//! 현재 보유를 과거로 되돌려 본 곡선입니다.

use tracing::warn;

use folio_core::{
    last_close, Allocation, DailyBar, DecimalExt, MarketDataError, ValuationPoint,
};

use crate::error::ForecastError;

/// 단일 종목의 묵시적 보유 수량.
pub fn implied_shares(total_value: f64, weight: f64, last_close: f64) -> f64 {
    total_value * weight / last_close
}

/// 가치 평가용 내부 보유 표현.
struct Holding {
    shares: f64,
    closes: Vec<f64>,
}

/// 가중 바스켓의 과거 가치 곡선을 계산합니다.
///
/// `bars_by_ticker`는 `allocations`와 같은 순서이며, 첫 번째 티커의
/// 시퀀스를 기준 인덱스로 사용합니다. 어떤 티커의 시퀀스가 특정
/// 인덱스에서 더 짧으면 그 지점의 가격을 0으로 간주하고 계산을
/// 계속합니다 (전체 실패 대신 과소평가를 허용하는 정책).
pub fn valuation_curve(
    allocations: &[Allocation],
    total_value: f64,
    bars_by_ticker: &[Vec<DailyBar>],
) -> Result<Vec<ValuationPoint>, ForecastError> {
    debug_assert_eq!(allocations.len(), bars_by_ticker.len());
    if bars_by_ticker.is_empty() {
        return Ok(Vec::new());
    }

    let mut holdings = Vec::with_capacity(allocations.len());
    for (allocation, bars) in allocations.iter().zip(bars_by_ticker) {
        let anchor = last_close(bars)
            .filter(|c| c.is_strictly_positive())
            .ok_or_else(|| MarketDataError::NoData {
                ticker: allocation.ticker.to_string(),
            })?
            .to_f64_lossy();

        holdings.push(Holding {
            shares: implied_shares(total_value, allocation.weight, anchor),
            closes: bars.iter().map(|b| b.close.to_f64_lossy()).collect(),
        });
    }

    let reference = &bars_by_ticker[0];
    for (allocation, bars) in allocations.iter().zip(bars_by_ticker).skip(1) {
        if bars.len() < reference.len() {
            warn!(
                "Bar series for {} has {} points, reference has {}; missing prices count as zero",
                allocation.ticker,
                bars.len(),
                reference.len()
            );
        }
    }

    let curve = reference
        .iter()
        .enumerate()
        .map(|(idx, bar)| {
            let value = holdings
                .iter()
                .map(|h| h.shares * h.closes.get(idx).copied().unwrap_or(0.0))
                .sum();
            ValuationPoint {
                date: bar.date,
                value,
            }
        })
        .collect();

    Ok(curve)
}
