//! 포트폴리오 가치 평가 및 몬테카를로 예측 엔진.
//!
//! 이 크레이트는 (티커, 비중) 바스켓과 과거 일봉 데이터로부터
//! 과거 가치 곡선과 미래 가치 분포를 산출합니다:
//!
//! 1. 티커별 과거 일봉을 동시에 조회 (조인 배리어)
//! 2. 마지막 종가 기준 묵시적 보유 수량 산출
//! 3. 과거 가치 곡선 및 일별 로그 수익률 계산
//! 4. 장기/최근(30일) 모멘트의 80/20 블렌드로 GBM 보정
//! 5. 100개 독립 시뮬레이션 후 최종일 가치 기준 백분위 경로 추출
//! 6. 252 거래일 기준 연율화 샤프 비율
//!
//! 엔진은 호출 단위로 순수하며, 영속 상태를 갖지 않고 재시도하지 않습니다.

pub mod charts;
pub mod engine;
pub mod error;
pub mod simulation;
pub mod statistics;
pub mod valuation;

pub use charts::{ChartPoint, ForecastCharts, ProjectedSeries};
pub use engine::{ForecastEngine, PositionSnapshot, SETTLE_BUFFER_DAYS};
pub use error::ForecastError;
pub use simulation::{representative_paths, simulate_paths, BoxMuller, SIMULATION_COUNT};
pub use statistics::{
    log_returns, sharpe_ratio, GbmCalibration, Moments, LONG_TERM_WEIGHT, RECENT_RETURN_WINDOW,
    RECENT_WEIGHT, TRADING_DAYS_PER_YEAR,
};
pub use valuation::valuation_curve;
