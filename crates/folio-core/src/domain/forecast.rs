//! 예측 요청 및 결과 타입.
//!
//! 이 모듈은 예측 엔진의 입출력 구조체를 정의합니다:
//! - `ForecastRequest` - 배분, 총 가치, 과거 구간, 목표일
//! - `ValuationPoint` - 과거 가치 곡선의 한 점
//! - `RepresentativePath` - 백분위 레이블이 붙은 시뮬레이션 경로
//! - `ForecastResult` - 외부에 노출되는 유일한 출력
//!
//! `ForecastResult`는 생성 후 변경되지 않으며, CRUD/영속 계층이
//! API 응답 형태로 직렬화하는 책임을 갖습니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::allocation::Allocation;

/// 예측 요청.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// 비어 있지 않은 배분 집합 (비중 합 1 가정)
    pub allocations: Vec<Allocation>,
    /// 과거 구간 종료 시점 기준 포트폴리오 총 가치 (달러)
    pub total_value: f64,
    /// 과거 조회 시작일 ("현재" 이전이어야 함)
    pub start_date: NaiveDate,
    /// 미래 목표일 ("현재" 이후여야 함)
    pub target_date: NaiveDate,
}

/// 과거 가치 곡선의 단일 데이터 포인트.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationPoint {
    /// 달력 날짜
    pub date: NaiveDate,
    /// 가중 바스켓 포트폴리오 가치
    pub value: f64,
}

/// 대표 경로의 백분위 구분.
///
/// 100개 시뮬레이션을 최종일 가치 기준 오름차순으로 정렬한 뒤
/// 선택되는 다섯 경로의 레이블입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileBand {
    /// 최저 수익 경로 (인덱스 0)
    Lowest,
    /// 25 백분위 경로
    P25,
    /// 중앙값 경로 (50 백분위)
    Median,
    /// 75 백분위 경로
    P75,
    /// 최고 수익 경로 (마지막 인덱스)
    Highest,
}

impl PercentileBand {
    /// API/차트에 노출되는 표시 레이블.
    pub fn label(&self) -> &'static str {
        match self {
            PercentileBand::Lowest => "Lowest return",
            PercentileBand::P25 => "25th percentile return",
            PercentileBand::Median => "Median return (50th percentile)",
            PercentileBand::P75 => "75th percentile return",
            PercentileBand::Highest => "Highest return",
        }
    }
}

impl std::fmt::Display for PercentileBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 백분위 레이블이 붙은 단일 시뮬레이션 경로.
///
/// 미래 1일당 하나의 값을 갖는 전체 궤적입니다. 선택된 백분위의
/// 시뮬레이션 전체 경로이며, 일자별 백분위 집계가 아닙니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepresentativePath {
    /// 백분위 구분
    pub band: PercentileBand,
    /// 표시 레이블
    pub label: String,
    /// 미래 일별 포트폴리오 가치
    pub values: Vec<f64>,
}

impl RepresentativePath {
    /// 새 대표 경로를 생성합니다.
    pub fn new(band: PercentileBand, values: Vec<f64>) -> Self {
        Self {
            band,
            label: band.label().to_string(),
            values,
        }
    }
}

/// 예측 결과.
///
/// 생성 후 변경되지 않습니다. `sharpe_ratio`가 `None`이면 과거 수익률의
/// 분산이 0이어서 샤프 비율이 정의되지 않는 경우이며, JSON에서는
/// `null`로 직렬화됩니다 (NaN을 전파하지 않는 정책).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    /// 과거 가치 곡선 (날짜 오름차순)
    pub historical: Vec<ValuationPoint>,
    /// 다섯 개의 대표 시뮬레이션 경로
    pub paths: Vec<RepresentativePath>,
    /// 연율화된 샤프 비율 (분산 0이면 None)
    pub sharpe_ratio: Option<f64>,
}
