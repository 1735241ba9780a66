//! forecast 서브커맨드.
//!
//! 브로커리지 데이터 API에서 과거 일봉을 조회해 예측을 실행하고
//! 결과(또는 차트 직렬화 형태)를 JSON으로 출력합니다.

use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use tracing::warn;

use folio_core::{is_normalized, weight_sum, Allocation, AppConfig, ForecastRequest, Ticker};
use folio_data::AlpacaDataClient;
use folio_forecast::{ForecastCharts, ForecastEngine};

/// forecast 실행 인자.
pub struct ForecastArgs {
    pub allocations: Vec<Allocation>,
    pub total_value: f64,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub charts: bool,
}

/// "TICKER:WEIGHT" 형식 문자열을 배분으로 파싱합니다.
pub fn parse_allocation(s: &str) -> anyhow::Result<Allocation> {
    let Some((ticker, weight)) = s.split_once(':') else {
        bail!("Invalid allocation '{}': expected TICKER:WEIGHT", s);
    };
    let weight: f64 = weight
        .parse()
        .with_context(|| format!("Invalid weight in allocation '{}'", s))?;
    if weight <= 0.0 || weight > 1.0 {
        bail!("Weight {} out of range (0, 1] in allocation '{}'", weight, s);
    }
    Ok(Allocation::new(Ticker::new(ticker), weight))
}

/// YYYY-MM-DD 날짜를 파싱합니다.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid date '{}'", s))
}

/// 예측을 실행하고 결과를 표준 출력에 씁니다.
pub async fn run(config: &AppConfig, args: ForecastArgs) -> anyhow::Result<()> {
    if !is_normalized(&args.allocations) {
        warn!(
            "Allocation weights sum to {:.6}, not 1; proceeding anyway",
            weight_sum(&args.allocations)
        );
    }

    let client = AlpacaDataClient::new(&config.market_data)?;
    let engine = ForecastEngine::new(Arc::new(client));

    let request = ForecastRequest {
        allocations: args.allocations,
        total_value: args.total_value,
        start_date: args.start_date,
        target_date: args.target_date,
    };
    let result = engine.forecast(&request).await?;

    let json = if args.charts {
        serde_json::to_string_pretty(&ForecastCharts::from_result(&result))?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{}", json);

    Ok(())
}
