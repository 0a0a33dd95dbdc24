//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 저장소 종류와 무관한 도메인 모델로, MongoDB 문서 표현은
//! 리포지토리 계층에서 별도로 변환합니다.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 역할
///
/// 닫힌 열거형이며 JSON/문서에는 `ADMIN`, `MEMBER`, `GUEST`로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    #[default]
    Member,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Member => "MEMBER",
            Role::Guest => "GUEST",
        }
    }
}

/// 사용자 엔티티
///
/// `password`에는 항상 변환된 자격 증명만 저장됩니다.
/// 평문 비밀번호는 서비스 계층에서 변환된 뒤에만 이 구조체에 들어옵니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 생성 시 할당되는 불투명 식별자 (UUID v4 문자열)
    pub id: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    /// 로그인 식별자
    pub email: String,
    pub phone_number: Option<String>,
    /// 변환된 자격 증명
    pub password: String,
    pub role: Role,
    /// 마지막 변경 시각 (생성 시각으로 초기화)
    pub updated: Option<DateTime<Utc>>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 새 ID를 할당하고 `updated`를 생성 시각으로 설정합니다.
    /// `password`는 이미 변환된 값이어야 합니다.
    pub fn new(
        first_name: Option<String>,
        middle_name: Option<String>,
        last_name: Option<String>,
        email: String,
        phone_number: Option<String>,
        password: String,
        role: Role,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name,
            middle_name,
            last_name,
            email,
            phone_number,
            password,
            role,
            updated: Some(Self::timestamp_now()),
        }
    }

    /// `updated`에 기록할 현재 시각
    ///
    /// MongoDB 날짜 정밀도에 맞춰 밀리초 단위로 자릅니다.
    pub fn timestamp_now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }

    /// 이름 구성 요소를 공백 하나로 이은 전체 이름
    ///
    /// 비어 있거나 공백뿐인 구성 요소는 건너뜁니다.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .flatten()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
