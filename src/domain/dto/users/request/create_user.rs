use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::users::Role;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// 이 구조체는 JSON 역직렬화와 입력 검증을 함께 수행합니다.
/// 서비스 계층은 검증을 다시 하지 않으므로 핸들러에서
/// 반드시 `validate()`를 호출한 뒤 넘겨야 합니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "first_name": "Ann",
///   "last_name": "Lee",
///   "email": "ann@example.com",
///   "phone_number": "010-1234-5678",
///   "role": "MEMBER",
///   "password": "correct horse battery staple"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(max = 100, message = "이름은 100자 이하여야 합니다"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "중간 이름은 100자 이하여야 합니다"))]
    pub middle_name: Option<String>,

    #[validate(length(max = 100, message = "성은 100자 이하여야 합니다"))]
    pub last_name: Option<String>,

    /// 로그인 식별자로 사용되는 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: Option<String>,

    /// 생략 시 `MEMBER`
    #[serde(default)]
    pub role: Role,

    /// 평문 비밀번호. 저장 전에 변환되며 그대로 보관되지 않습니다.
    #[validate(custom(function = "validate_password_present"))]
    pub password: String,
}

/// 비밀번호가 비어 있지 않은지 확인
fn validate_password_present(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::new("password_required")
            .with_message("비밀번호를 입력해주세요".into()));
    }
    Ok(())
}

/// 전화번호 형식 검증 (숫자, 공백, `+`, `-`, 괄호만 허용)
pub(crate) fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');

    if phone.len() > 32 || !phone.chars().all(allowed) {
        return Err(ValidationError::new("invalid_phone_number")
            .with_message("전화번호 형식이 올바르지 않습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateUserRequest {
        CreateUserRequest {
            first_name: Some("Ann".to_string()),
            middle_name: None,
            last_name: Some("Lee".to_string()),
            email: "ann@example.com".to_string(),
            phone_number: Some("+82 10-1234-5678".to_string()),
            role: Role::Member,
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_blank_password_is_rejected() {
        let mut req = request();
        req.password = "   ".to_string();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_malformed_email_and_phone_are_rejected() {
        let mut req = request();
        req.email = "not-an-email".to_string();
        req.phone_number = Some("call me".to_string());

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("phone_number"));
    }

    #[test]
    fn test_role_defaults_to_member() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"email": "a@b.co", "password": "x"}"#).unwrap();

        assert_eq!(req.role, Role::Member);
        assert!(req.first_name.is_none());
    }
}
