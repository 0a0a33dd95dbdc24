use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{Role, User};

/// 사용자 응답 DTO (프로젝션)
///
/// 호출자에게 반환해도 안전한 필드만 담습니다. 자격 증명은 포함되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReadDto {
    pub id: String,
    /// 이름 구성 요소를 공백으로 이은 전체 이름
    pub name: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub updated: Option<DateTime<Utc>>,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserReadDto {
    fn from(user: User) -> Self {
        let name = user.full_name();
        let User {
            id,
            first_name,
            middle_name,
            last_name,
            email,
            phone_number,
            role,
            updated,
            ..
        } = user;

        Self {
            id,
            name,
            first_name,
            middle_name,
            last_name,
            phone_number,
            updated,
            email,
            role,
        }
    }
}

/// 사용자 삭제 응답 DTO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub deleted: bool,
}
