//! 로그 수익률 통계 및 GBM 보정.
//!
//! 과거 가치 곡선의 일별 로그 수익률에서 드리프트/변동성을 추정합니다.
//! 장기(전체 구간) 모멘트와 최근(마지막 30개) 모멘트를 80/20으로
//! 블렌드하며, 이 가중치는 설정이 아닌 고정 설계 상수입니다.

/// 연간 거래일 수 (연율화 계산에 사용).
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// 최근 모멘트 계산에 사용하는 수익률 개수.
pub const RECENT_RETURN_WINDOW: usize = 30;

/// 장기 모멘트 가중치.
pub const LONG_TERM_WEIGHT: f64 = 0.8;

/// 최근 모멘트 가중치.
pub const RECENT_WEIGHT: f64 = 0.2;

/// 표본 집합의 평균과 모표준편차.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// 평균 (드리프트)
    pub mean: f64,
    /// 모표준편차 (변동성)
    pub std_dev: f64,
}

impl Moments {
    /// 표본 집합의 모멘트를 계산합니다.
    ///
    /// 빈 집합의 모멘트는 0으로 정의합니다. 하루짜리 이력처럼 수익률이
    /// 없는 경우에도 엔진이 결정적으로 동작하게 하기 위한 정책입니다.
    pub fn of(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
            };
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;

        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// 블렌드된 GBM 보정 파라미터.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmCalibration {
    /// 일별 로그 수익률 드리프트
    pub drift: f64,
    /// 일별 로그 수익률 변동성
    pub volatility: f64,
}

impl GbmCalibration {
    /// 로그 수익률 시퀀스에서 보정 파라미터를 계산합니다.
    pub fn from_returns(returns: &[f64]) -> Self {
        let long_term = Moments::of(returns);
        let recent_start = returns.len().saturating_sub(RECENT_RETURN_WINDOW);
        let recent = Moments::of(&returns[recent_start..]);

        Self {
            drift: LONG_TERM_WEIGHT * long_term.mean + RECENT_WEIGHT * recent.mean,
            volatility: LONG_TERM_WEIGHT * long_term.std_dev + RECENT_WEIGHT * recent.std_dev,
        }
    }

    /// 위험 조정 드리프트.
    ///
    /// 표준 GBM 볼록성 보정: drift - volatility^2 / 2.
    /// 시뮬레이션 최종 가격의 평균이 기대 복리 성장률과 일치하도록 합니다.
    pub fn adjusted_drift(&self) -> f64 {
        self.drift - self.volatility * self.volatility / 2.0
    }
}

/// 가치 시퀀스의 일별 로그 수익률: `r_t = ln(V_t / V_{t-1})`.
pub fn log_returns(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| (w[1] / w[0]).ln()).collect()
}

/// 연율화된 샤프 비율.
///
/// `mean / std_dev * sqrt(252)`. 전체 구간(장기) 모멘트만 사용하며
/// 무위험 이자율 차감은 없습니다 (0으로 가정).
///
/// 모표준편차가 0이면 (무분산 이력) 샤프 비율이 정의되지 않으므로
/// `None`을 반환합니다. NaN을 API 경계로 전파하지 않는 정책입니다.
pub fn sharpe_ratio(returns: &[f64]) -> Option<f64> {
    let moments = Moments::of(returns);
    if moments.std_dev == 0.0 {
        return None;
    }
    Some(moments.mean / moments.std_dev * (TRADING_DAYS_PER_YEAR as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_log_returns() {
        let returns = log_returns(&[10000.0, 11000.0]);
        assert_eq!(returns.len(), 1);
        assert!((returns[0] - 1.1_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_moments_empty_are_zero() {
        let m = Moments::of(&[]);
        assert_eq!(m.mean, 0.0);
        assert_eq!(m.std_dev, 0.0);
    }

    #[test]
    fn test_moments_population_std_dev() {
        // 모분산: ((1-3)^2 + (3-3)^2 + (5-3)^2) / 3 = 8/3
        let m = Moments::of(&[1.0, 3.0, 5.0]);
        assert!((m.mean - 3.0).abs() < 1e-12);
        assert!((m.std_dev - (8.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_calibration_blends_long_and_recent() {
        // 장기 평균과 최근 30개 평균이 다른 시퀀스
        let mut returns = vec![0.0; 60];
        for r in returns.iter_mut().skip(30) {
            *r = 0.01;
        }
        let calibration = GbmCalibration::from_returns(&returns);

        let long_mean = 0.005;
        let recent_mean = 0.01;
        let expected = LONG_TERM_WEIGHT * long_mean + RECENT_WEIGHT * recent_mean;
        assert!((calibration.drift - expected).abs() < 1e-12);
    }

    #[test]
    fn test_calibration_short_series_uses_all_returns() {
        // 30개 미만이면 최근 윈도우가 전체 시퀀스와 같음
        let returns = vec![0.01, -0.02, 0.03];
        let calibration = GbmCalibration::from_returns(&returns);
        let all = Moments::of(&returns);
        assert!((calibration.drift - all.mean).abs() < 1e-12);
        assert!((calibration.volatility - all.std_dev).abs() < 1e-12);
    }

    #[test]
    fn test_adjusted_drift() {
        let calibration = GbmCalibration {
            drift: 0.001,
            volatility: 0.02,
        };
        assert!((calibration.adjusted_drift() - (0.001 - 0.0002)).abs() < 1e-12);
    }

    #[test]
    fn test_sharpe_undefined_for_zero_variance() {
        assert_eq!(sharpe_ratio(&[0.0, 0.0, 0.0]), None);
        assert_eq!(sharpe_ratio(&[]), None);
        assert_eq!(sharpe_ratio(&[0.05]), None); // 단일 수익률은 모분산 0
    }

    #[test]
    fn test_sharpe_annualization() {
        let returns = vec![0.01, 0.03];
        // mean = 0.02, 모표준편차 = 0.01
        let sharpe = sharpe_ratio(&returns).unwrap();
        assert!((sharpe - 2.0 * 252.0_f64.sqrt()).abs() < 1e-9);
    }

    proptest! {
        /// 수익률의 평균과 표준편차를 함께 2배 하면 샤프 비율은 불변.
        #[test]
        fn test_sharpe_scale_invariance(
            returns in prop::collection::vec(-0.1f64..0.1, 2..50)
        ) {
            let moments = Moments::of(&returns);
            prop_assume!(moments.std_dev > 1e-9);

            let doubled: Vec<f64> = returns.iter().map(|r| r * 2.0).collect();
            let original = sharpe_ratio(&returns).unwrap();
            let scaled = sharpe_ratio(&doubled).unwrap();

            prop_assert!((original - scaled).abs() < 1e-9);
        }
    }
}
