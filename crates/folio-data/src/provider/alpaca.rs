//! 브로커리지 데이터 API 클라이언트.
//!
//! Alpaca Data API v2를 통해 일별 종가 데이터를 조회합니다.
//!
//! # 지원 데이터
//!
//! - 일봉 시세 (`/v2/stocks/{symbol}/bars`, `next_page_token` 페이지네이션)
//! - 최신 체결가 (`/v2/stocks/{symbol}/trades/latest`)
//!
//! # 인증
//!
//! `APCA-API-KEY-ID` / `APCA-API-SECRET-KEY` 헤더를 사용합니다.
//! 자격증명은 [`MarketDataConfig`]로 주입되며, 이 크레이트는 환경 변수를
//! 직접 읽지 않습니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use folio_data::AlpacaDataClient;
//!
//! let client = AlpacaDataClient::new(&config)?;
//! let bars = client.daily_bars(&ticker, start, end).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, warn};

use folio_core::{
    DailyBar, DecimalExt, MarketDataConfig, MarketDataError, MarketDataProvider, MarketDataResult,
    Price, Ticker,
};

/// 페이지당 최대 일봉 수.
const BARS_PAGE_LIMIT: usize = 10_000;

/// 브로커리지 데이터 API 클라이언트.
#[derive(Clone)]
pub struct AlpacaDataClient {
    client: reqwest::Client,
    base_url: String,
}

/// 일봉 조회 응답.
#[derive(Debug, Deserialize)]
struct BarsResponse {
    #[serde(default)]
    bars: Option<Vec<RawBar>>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// 일봉 원시 레코드.
#[derive(Debug, Deserialize)]
struct RawBar {
    /// 캔들 시작 시간 (RFC 3339)
    #[serde(rename = "t")]
    timestamp: DateTime<Utc>,
    /// 종가
    #[serde(rename = "c")]
    close: Decimal,
}

/// 최신 체결가 응답.
#[derive(Debug, Deserialize)]
struct LatestTradeResponse {
    trade: RawTrade,
}

#[derive(Debug, Deserialize)]
struct RawTrade {
    /// 체결 가격
    #[serde(rename = "p")]
    price: Decimal,
}

impl AlpacaDataClient {
    /// 새 클라이언트를 생성합니다.
    pub fn new(config: &MarketDataConfig) -> MarketDataResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "APCA-API-KEY-ID",
            HeaderValue::from_str(&config.api_key_id)
                .map_err(|e| MarketDataError::Unauthorized(format!("invalid API key id: {}", e)))?,
        );
        let mut secret = HeaderValue::from_str(config.api_secret.expose_secret())
            .map_err(|e| MarketDataError::Unauthorized(format!("invalid API secret: {}", e)))?;
        secret.set_sensitive(true);
        headers.insert("APCA-API-SECRET-KEY", secret);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| MarketDataError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// reqwest 에러를 시장 데이터 에러로 변환합니다.
    fn map_transport(err: reqwest::Error) -> MarketDataError {
        if err.is_timeout() {
            MarketDataError::Timeout(err.to_string())
        } else {
            MarketDataError::Network(err.to_string())
        }
    }

    /// GET 요청을 보내고 상태 코드를 검사한 뒤 본문을 역직렬화합니다.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> MarketDataResult<T> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(Self::map_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(Self::map_transport)?;

        match status {
            StatusCode::TOO_MANY_REQUESTS => Err(MarketDataError::RateLimited),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(MarketDataError::Unauthorized(body))
            }
            s if !s.is_success() => Err(MarketDataError::Api {
                status: s.as_u16(),
                message: body,
            }),
            _ => Ok(serde_json::from_str(&body)?),
        }
    }

    /// 일봉 한 페이지를 조회합니다.
    async fn fetch_bars_page(
        &self,
        ticker: &Ticker,
        start: NaiveDate,
        end: NaiveDate,
        page_token: Option<&str>,
    ) -> MarketDataResult<BarsResponse> {
        let url = format!("{}/v2/stocks/{}/bars", self.base_url, ticker);

        let mut query: Vec<(&str, String)> = Vec::new();
        // 페이지 토큰을 첫 파라미터로 두어 쿼리 문자열을 예측 가능하게 유지
        if let Some(token) = page_token {
            query.push(("page_token", token.to_string()));
        }
        query.push(("timeframe", "1Day".to_string()));
        query.push(("start", start.format("%Y-%m-%d").to_string()));
        query.push(("end", end.format("%Y-%m-%d").to_string()));
        query.push(("limit", BARS_PAGE_LIMIT.to_string()));
        query.push(("adjustment", "all".to_string()));

        self.get_json(&url, &query).await
    }
}

#[async_trait]
impl MarketDataProvider for AlpacaDataClient {
    async fn daily_bars(
        &self,
        ticker: &Ticker,
        start: NaiveDate,
        end: NaiveDate,
    ) -> MarketDataResult<Vec<DailyBar>> {
        debug!("Fetching daily bars for {} ({} ~ {})", ticker, start, end);

        let mut bars: Vec<DailyBar> = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .fetch_bars_page(ticker, start, end, page_token.as_deref())
                .await?;

            for raw in page.bars.unwrap_or_default() {
                if !raw.close.is_strictly_positive() {
                    warn!(
                        "Skipping non-positive close for {} at {}",
                        ticker, raw.timestamp
                    );
                    continue;
                }
                bars.push(DailyBar::new(raw.timestamp.date_naive(), raw.close));
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        if bars.is_empty() {
            return Err(MarketDataError::NoData {
                ticker: ticker.to_string(),
            });
        }

        debug!("Fetched {} daily bars for {}", bars.len(), ticker);
        Ok(bars)
    }

    async fn latest_close(&self, ticker: &Ticker) -> MarketDataResult<Price> {
        let url = format!("{}/v2/stocks/{}/trades/latest", self.base_url, ticker);
        let response: LatestTradeResponse = self.get_json(&url, &[]).await?;

        if !response.trade.price.is_strictly_positive() {
            return Err(MarketDataError::NoData {
                ticker: ticker.to_string(),
            });
        }

        Ok(response.trade.price)
    }
}
