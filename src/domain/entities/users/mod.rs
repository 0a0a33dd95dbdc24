//! Users Entity Module
//!
//! 사용자 엔티티와 역할 열거형을 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{Role, User};
//!
//! let user = User::new(
//!     Some("Ann".to_string()),
//!     None,
//!     Some("Lee".to_string()),
//!     "ann@example.com".to_string(),
//!     None,
//!     transformed_password,
//!     Role::Member,
//! );
//! ```

pub mod user;

pub use user::{Role, User};
