//! GBM 몬테카를로 시뮬레이션 및 백분위 경로 추출.
//!
//! 마지막 과거 가치에서 출발해 `num_days` 스텝을 반복합니다:
//! `v *= exp(adjusted_drift + volatility * z)`, `z`는 표준정규 변량.
//!
//! 시뮬레이션들은 서로 독립이며 가변 상태를 공유하지 않으므로 순차/병렬
//! 실행 결과가 동일합니다. 현재 구현은 순차 실행입니다.

use rand::Rng;

use folio_core::{PercentileBand, RepresentativePath};

use crate::statistics::GbmCalibration;

/// 예측 호출당 실행하는 독립 시뮬레이션 수.
pub const SIMULATION_COUNT: usize = 100;

/// Box–Muller 변환 기반 표준정규 변량 생성기.
///
/// 균등 변량 한 쌍이 정규 변량 두 개를 생성하므로, 두 번째 값을
/// 캐시해 두고 다음 호출에서 재사용합니다.
pub struct BoxMuller<R: Rng> {
    rng: R,
    spare: Option<f64>,
}

impl<R: Rng> BoxMuller<R> {
    /// 새 생성기를 만듭니다.
    pub fn new(rng: R) -> Self {
        Self { rng, spare: None }
    }

    /// 표준정규 변량 하나를 반환합니다.
    pub fn next_standard_normal(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }

        // u1 ∈ (0, 1]: gen()은 [0, 1)이므로 1에서 빼서 ln(0)을 피함
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen();

        let radius = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * u2;

        self.spare = Some(radius * theta.sin());
        radius * theta.cos()
    }
}

/// GBM 경로 앙상블을 생성합니다.
///
/// 각 경로는 `start_value`에서 출발하며 미래 1일당 하나의 값을 갖습니다.
pub fn simulate_paths<R: Rng>(
    start_value: f64,
    calibration: &GbmCalibration,
    num_days: usize,
    count: usize,
    normals: &mut BoxMuller<R>,
) -> Vec<Vec<f64>> {
    let adjusted_drift = calibration.adjusted_drift();

    (0..count)
        .map(|_| {
            let mut value = start_value;
            let mut path = Vec::with_capacity(num_days);
            for _ in 0..num_days {
                let z = normals.next_standard_normal();
                value *= (adjusted_drift + calibration.volatility * z).exp();
                path.push(value);
            }
            path
        })
        .collect()
}

/// 최종일 가치 기준 오름차순 순위에서 다섯 개의 대표 경로를 선택합니다.
///
/// 인덱스 `0, ⌊0.25n⌋, ⌊0.50n⌋, ⌊0.75n⌋, n-1`의 시뮬레이션 **전체 경로**를
/// 반환합니다. 일자별 백분위 집계가 아니라 해당 순위 시뮬레이션의
/// 궤적 그대로입니다.
pub fn representative_paths(paths: Vec<Vec<f64>>) -> Vec<RepresentativePath> {
    let n = paths.len();
    if n == 0 {
        return Vec::new();
    }

    let terminal = |i: usize| paths[i].last().copied().unwrap_or(f64::MIN);

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| terminal(a).total_cmp(&terminal(b)));

    let rank = |fraction: f64| order[((fraction * n as f64).floor() as usize).min(n - 1)];

    [
        (PercentileBand::Lowest, order[0]),
        (PercentileBand::P25, rank(0.25)),
        (PercentileBand::Median, rank(0.50)),
        (PercentileBand::P75, rank(0.75)),
        (PercentileBand::Highest, order[n - 1]),
    ]
    .into_iter()
    .map(|(band, idx)| RepresentativePath::new(band, paths[idx].clone()))
    .collect()
}
