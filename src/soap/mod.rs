//! 비누 배치 계산 모듈 모음.

pub mod batch;
pub mod lye;
pub mod water;

pub use batch::*;
pub use lye::*;
pub use water::*;
