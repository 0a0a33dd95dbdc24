//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 협력 객체를 생성자로 주입받으며 전역 상태를 갖지 않습니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (생성, 조회, 검색, 수정, 삭제)
//! - 비밀번호 인증 (단방향 변환 후 비교)
//! - 구조화된 서비스 이벤트 발행
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{
//!     credentials::Sha256CredentialTransform, events::LogEventSink, users::UserService,
//! };
//!
//! let service = UserService::new(store, Arc::new(Sha256CredentialTransform::new(pepper)), Arc::new(LogEventSink));
//! ```

pub mod credentials;
pub mod events;
pub mod users;
