//! 필터와 정렬에서 참조하는 사용자 필드 식별자

use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;

/// 사용자 엔티티의 질의 가능한 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    Id,
    FirstName,
    MiddleName,
    LastName,
    Email,
    PhoneNumber,
    Role,
    Updated,
}

impl UserField {
    /// 요청 파라미터의 필드 이름을 해석합니다.
    ///
    /// `lastName`과 `last_name` 두 표기를 모두 받습니다.
    pub fn parse(name: &str) -> AppResult<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "id" => Ok(UserField::Id),
            "firstname" => Ok(UserField::FirstName),
            "middlename" => Ok(UserField::MiddleName),
            "lastname" => Ok(UserField::LastName),
            "email" => Ok(UserField::Email),
            "phonenumber" => Ok(UserField::PhoneNumber),
            "role" => Ok(UserField::Role),
            "updated" => Ok(UserField::Updated),
            _ => Err(AppError::ValidationError(format!("unknown user field '{}'", name))),
        }
    }

    /// 문자열 값을 가지는 필드의 현재 값
    ///
    /// `Updated`는 문자열 필드가 아니므로 항상 `None`입니다.
    pub fn text<'a>(&self, user: &'a User) -> Option<&'a str> {
        match self {
            UserField::Id => Some(user.id.as_str()),
            UserField::FirstName => user.first_name.as_deref(),
            UserField::MiddleName => user.middle_name.as_deref(),
            UserField::LastName => user.last_name.as_deref(),
            UserField::Email => Some(user.email.as_str()),
            UserField::PhoneNumber => user.phone_number.as_deref(),
            UserField::Role => Some(user.role.as_str()),
            UserField::Updated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_camel_and_snake_case() {
        assert_eq!(UserField::parse("lastName").unwrap(), UserField::LastName);
        assert_eq!(UserField::parse("last_name").unwrap(), UserField::LastName);
        assert_eq!(UserField::parse(" UPDATED ").unwrap(), UserField::Updated);
        assert_eq!(UserField::parse("phoneNumber").unwrap(), UserField::PhoneNumber);
    }

    #[test]
    fn test_parse_rejects_unknown_and_credential_fields() {
        assert!(matches!(UserField::parse("password"), Err(AppError::ValidationError(_))));
        assert!(UserField::parse("").is_err());
    }
}
