//! # 사용자 응답 DTO 모듈
//!
//! 엔티티에서 민감 정보를 제거한 프로젝션을 정의합니다.
//! 변환은 `From<User>` 구현 한 곳에서만 이루어집니다.

pub mod user_response;

pub use user_response::{DeleteUserResponse, UserReadDto};
