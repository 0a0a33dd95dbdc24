//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속 엔티티)
//! ├── models/       ← 필터, 페이지, 이벤트 등 값 객체
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! 엔티티는 특정 저장소에 묶이지 않습니다. MongoDB 문서 매핑은
//! `repositories::users::user_repo`에서 담당합니다.

pub mod users;

pub use users::*;
