//! positions 서브커맨드.
//!
//! 최신 종가 기준으로 바스켓의 묵시적 보유 수량을 조회합니다.

use std::sync::Arc;

use folio_core::{Allocation, AppConfig};
use folio_data::AlpacaDataClient;
use folio_forecast::ForecastEngine;

/// 보유 스냅샷을 조회해 JSON으로 출력합니다.
pub async fn run(
    config: &AppConfig,
    allocations: &[Allocation],
    total_value: f64,
) -> anyhow::Result<()> {
    let client = AlpacaDataClient::new(&config.market_data)?;
    let engine = ForecastEngine::new(Arc::new(client));

    let positions = engine.snapshot_positions(allocations, total_value).await?;
    println!("{}", serde_json::to_string_pretty(&positions)?);

    Ok(())
}
