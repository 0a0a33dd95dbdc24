//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 검증합니다.
//!
//! | DTO | 엔드포인트 |
//! |-----|-----------|
//! | [`CreateUserRequest`] | `POST /api/v1/users` |
//! | [`UpdateUserRequest`] | `PATCH /api/v1/users/{id}` |
//! | [`UserAuthRequest`] | `POST /api/v1/auth/login` |
//!
//! 구조화된 검색 조건(`UserFilter`)은 DTO가 아닌 도메인 모델로
//! `domain::models::filter`에 정의되어 있습니다.

pub mod auth_request;
pub mod create_user;
pub mod update_user;

pub use auth_request::UserAuthRequest;
pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
