//! 자격 증명 변환 모듈
//!
//! 평문 비밀번호는 이 모듈의 변환을 거친 뒤에만 저장소에 들어갑니다.

pub mod credential_transform;

pub use credential_transform::{CredentialTransform, Sha256CredentialTransform, constant_time_eq};
