//! 사용자 관리 서비스 모듈
//!
//! # Security
//!
//! - 평문 비밀번호는 저장 전에 단방향 변환
//! - 인증 실패 원인을 호출자에게 드러내지 않음
//! - 자격 증명 비교는 상수 시간
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let response = user_service.create(request).await?;
//! user_service.authenticate(&login).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
