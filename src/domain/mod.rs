//! # Domain Layer
//!
//! 사용자 계정 도메인의 엔티티, 값 객체, DTO를 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← User, Role
//! ├── models/     ← UserFilter, UserQuery, PageRequest, Page, UserEvent
//! └── dto/        ← 요청/응답 DTO
//! ```
//!
//! 이 계층은 저장소나 HTTP 프레임워크 타입에 의존하지 않습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::{Role, User};
pub use models::*;
