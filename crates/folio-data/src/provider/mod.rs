//! 시장 데이터 제공자 구현체.

pub mod alpaca;
pub mod memory;
