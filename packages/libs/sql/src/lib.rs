//! tbk-sql: 동적 SQL 생성 라이브러리
//!
//! 런타임에야 알 수 있는 테이블 형태에 대해 CRUD 문장을 생성합니다.
//!
//! 이 계층의 핵심 규칙은 식별자와 값의 분리입니다. 스키마/테이블/컬럼
//! **이름**은 언제나 식별자로 본문에 삽입되고(드라이버 프로토콜이 식별자
//! 파라미터를 지원하지 않음), **값**은 언제나 위치 파라미터로 바인딩됩니다.
//! 이 분리는 타입으로 강제됩니다: 식별자는 `Ident`/`TableRef`로만,
//! 값은 `Statement::params`로만 SQL에 들어갑니다.
//!
//! # 모듈 구조
//!
//! - `ident`: 식별자 타입
//! - `statement`: SQL 본문 + 위치 파라미터
//! - `builder`: CRUD 문장 빌더

pub mod builder;
pub mod ident;
pub mod statement;

pub use builder::{
    build_delete, build_insert, build_select, build_select_by_id, build_select_in, build_update,
};
pub use ident::{Ident, TableRef};
pub use statement::Statement;
