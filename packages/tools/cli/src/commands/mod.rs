//! CLI 명령어 구현

pub mod catalog;
pub mod context;
pub mod foreign;
pub mod http;
pub mod records;
