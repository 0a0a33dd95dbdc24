use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::create_user::validate_phone_number;

/// 사용자 부분 수정 요청 DTO
///
/// 모든 필드가 선택 사항입니다. 서비스는 `is_valid_string`을 통과한
/// 값만 기존 값에 덮어쓰고, 없거나 공백뿐인 값은 무시합니다.
/// 따라서 이 경로로는 필드를 비울 수 없습니다.
///
/// 형식 검증에 실패한 필드도 요청 전체를 거부하지 않고
/// [`without_invalid_fields`](Self::without_invalid_fields)로 빠진 값처럼 취급합니다.
///
/// 이메일, 역할, 비밀번호는 이 요청으로 변경되지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[validate(length(max = 100, message = "이름은 100자 이하여야 합니다"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "중간 이름은 100자 이하여야 합니다"))]
    pub middle_name: Option<String>,

    #[validate(length(max = 100, message = "성은 100자 이하여야 합니다"))]
    pub last_name: Option<String>,

    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: Option<String>,
}

impl UpdateUserRequest {
    /// 검증에 실패한 필드를 `None`으로 바꾼 요청
    pub fn without_invalid_fields(mut self) -> Self {
        let result = self.validate();

        if ValidationErrors::has_error(&result, "first_name") {
            self.first_name = None;
        }
        if ValidationErrors::has_error(&result, "middle_name") {
            self.middle_name = None;
        }
        if ValidationErrors::has_error(&result, "last_name") {
            self.last_name = None;
        }
        if ValidationErrors::has_error(&result, "phone_number") {
            self.phone_number = None;
        }

        self
    }
}
