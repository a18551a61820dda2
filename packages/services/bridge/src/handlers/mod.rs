//! Bridge 핸들러
//!
//! 모든 핸들러는 `Database` facade에 위임하는 얇은 층입니다. 에러 번역은
//! `BridgeError`가, 결과 없음은 빈 목록 또는 404가 담당합니다.

pub mod foreign;
pub mod health;
pub mod records;
pub mod schemas;
