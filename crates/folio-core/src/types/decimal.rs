//! 정밀한 금융 계산을 위한 Decimal 유틸리티.
//!
//! 시장 데이터 경계에서는 `Decimal`을 사용하고, 예측 엔진 내부의
//! 로그/지수 연산은 `f64`로 수행합니다. 이 모듈은 그 변환을 담당합니다.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 금융 정밀도를 위한 가격 타입.
pub type Price = Decimal;

/// Decimal 연산을 위한 확장 trait.
pub trait DecimalExt {
    /// 양수인지 확인합니다.
    fn is_strictly_positive(&self) -> bool;

    /// 엔진 내부 연산을 위해 f64로 변환합니다.
    ///
    /// 시장 가격 범위의 Decimal은 항상 f64로 표현 가능하므로
    /// 변환 실패 시 0.0을 반환합니다.
    fn to_f64_lossy(&self) -> f64;
}

impl DecimalExt for Decimal {
    fn is_strictly_positive(&self) -> bool {
        *self > Decimal::ZERO
    }

    fn to_f64_lossy(&self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }
}
