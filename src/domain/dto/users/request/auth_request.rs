use serde::Deserialize;
use validator::Validate;

/// 이메일/비밀번호 인증 요청
///
/// 요청 처리 중에만 존재하며 저장되지 않습니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserAuthRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}
