//! # 자격 증명 변환
//!
//! 평문 비밀번호를 저장 가능한 형태로 바꾸는 단방향 변환입니다.
//! 서비스 계층은 [`CredentialTransform`] 트레이트만 알고 있으며,
//! 같은 입력은 항상 같은 결과를 내야 합니다 (인증 시 재변환 후 비교).
//!
//! ## 기본 구현
//!
//! ```text
//! stored = base64( SHA-256( pepper ‖ plaintext ) )
//! ```
//!
//! `pepper`는 `CREDENTIAL_PEPPER` 환경 변수로 주입되는 서버 측 비밀값입니다.

use base64::{Engine as _, engine::general_purpose};
use sha2::{Digest, Sha256};

/// 평문 비밀번호 → 저장용 자격 증명 변환
pub trait CredentialTransform: Send + Sync {
    /// 결정적 단방향 변환
    fn transform(&self, plaintext: &str) -> String;

    /// 평문을 변환한 값이 저장된 자격 증명과 같은지 확인합니다.
    ///
    /// 비교 시간은 첫 번째 불일치 위치와 무관합니다.
    fn matches(&self, plaintext: &str, stored: &str) -> bool {
        constant_time_eq(self.transform(plaintext).as_bytes(), stored.as_bytes())
    }
}

/// 길이가 같을 때 모든 바이트를 끝까지 비교합니다.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

/// SHA-256 + pepper 기반 변환
#[derive(Clone)]
pub struct Sha256CredentialTransform {
    pepper: String,
}

impl Sha256CredentialTransform {
    pub fn new(pepper: impl Into<String>) -> Self {
        Self { pepper: pepper.into() }
    }
}

impl CredentialTransform for Sha256CredentialTransform {
    fn transform(&self, plaintext: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.pepper.as_bytes());
        hasher.update(plaintext.as_bytes());

        general_purpose::STANDARD.encode(hasher.finalize())
    }
}
