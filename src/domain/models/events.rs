//! 사용자 서비스가 발행하는 구조화된 이벤트

/// 인증 거부 사유
///
/// 이벤트 싱크에만 전달되며 호출자에게 반환되는 에러에는 드러나지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationFailure {
    /// 해당 이메일의 사용자가 없음
    UnknownEmail,
    /// 변환된 비밀번호가 저장된 값과 다름
    CredentialMismatch,
}

/// 서비스 이벤트
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    Created { id: String },
    Retrieved { id: String },
    Found { count: usize, total: u64 },
    Updated { id: String },
    Deleted { id: String },
    DeleteFailed { id: String },
    NotFound { id: String },
    AuthenticationAttempt { email: String },
    AuthenticationRejected { reason: AuthenticationFailure },
    Authenticated { email: String },
}
