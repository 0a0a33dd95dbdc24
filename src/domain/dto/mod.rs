//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 데이터 구조입니다.
//! 엔티티를 직접 노출하지 않고 DTO로 변환하여 자격 증명 같은
//! 민감 정보가 응답에 섞이지 않도록 합니다.

pub mod users;

pub use users::*;
