//! # Core Infrastructure Module
//!
//! 애플리케이션 전역에서 공유하는 에러 타입과 결과 타입 별칭을 제공합니다.
//!
//! ```rust,ignore
//! use crate::core::{AppError, AppResult};
//!
//! async fn find(id: &str) -> AppResult<User> {
//!     // ...
//! }
//! ```

pub mod errors;

pub use errors::*;
