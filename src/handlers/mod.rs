//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 `UserService`로 위임하는 핸들러 함수들입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 입력 검증, 응답 형식      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 `web::Data<UserService>`로 주입되며, 핸들러가 반환한
//! `AppError`는 `ResponseError` 구현을 통해 JSON 에러 응답이 됩니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 생성, 조회, 검색, 수정, 삭제
//! - **`auth`**: 이메일/비밀번호 인증 (`POST /auth/login`)

pub mod auth;
pub mod users;
