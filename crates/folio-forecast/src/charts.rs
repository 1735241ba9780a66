//! 예측 결과 차트 데이터 구조.
//!
//! `ForecastResult`를 프런트엔드 차트 라이브러리가 소비하는
//! `{x: epoch millis, y: value}` 포인트 시리즈로 변환합니다.
//! 투영 시리즈의 x축은 과거 곡선의 마지막 날짜에서 이어집니다.

use chrono::NaiveDate;
use serde::Serialize;

use folio_core::{ForecastResult, PercentileBand};

/// 차트 데이터 포인트.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// X축 값 (타임스탬프, 밀리초)
    pub x: i64,
    /// Y축 값
    pub y: f64,
}

impl ChartPoint {
    fn at(date: NaiveDate, value: f64) -> Self {
        Self {
            x: date.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp_millis(),
            y: value,
        }
    }
}

/// 백분위 레이블이 붙은 투영 시리즈.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectedSeries {
    /// 백분위 구분
    pub band: PercentileBand,
    /// 표시 레이블
    pub label: String,
    /// 미래 일별 포인트
    pub points: Vec<ChartPoint>,
}

/// 예측 결과 차트 데이터 모음.
///
/// CRUD/API 계층이 그대로 직렬화해 응답하는 형태입니다.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastCharts {
    /// 과거 가치 곡선
    pub historical: Vec<ChartPoint>,
    /// 다섯 개의 투영 시리즈
    pub projections: Vec<ProjectedSeries>,
    /// 연율화된 샤프 비율 (정의되지 않으면 null)
    pub sharpe_ratio: Option<f64>,
}

impl ForecastCharts {
    /// 예측 결과에서 차트 데이터를 생성합니다.
    pub fn from_result(result: &ForecastResult) -> Self {
        let historical: Vec<ChartPoint> = result
            .historical
            .iter()
            .map(|p| ChartPoint::at(p.date, p.value))
            .collect();

        let projections = match result.historical.last() {
            Some(last) => result
                .paths
                .iter()
                .map(|path| ProjectedSeries {
                    band: path.band,
                    label: path.label.clone(),
                    points: path
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| {
                            ChartPoint::at(last.date + chrono::Duration::days(i as i64 + 1), v)
                        })
                        .collect(),
                })
                .collect(),
            None => Vec::new(),
        };

        Self {
            historical,
            projections,
            sharpe_ratio: result.sharpe_ratio,
        }
    }
}
