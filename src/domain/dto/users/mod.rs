//! # Users DTO Module
//!
//! 사용자 API의 요청/응답 데이터 전송 객체입니다.
//!
//! ```text
//! users/
//! ├── request/   ← CreateUserRequest, UpdateUserRequest, UserAuthRequest
//! └── response/  ← UserReadDto, DeleteUserResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
