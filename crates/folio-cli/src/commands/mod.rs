//! CLI 서브커맨드 구현.

pub mod forecast;
pub mod positions;
