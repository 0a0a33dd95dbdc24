//! 사용자 검색 필터
//!
//! 두 종류의 검색 조건을 정의합니다.
//!
//! - [`UserFilter`]: 필드별 정확히 일치하는 값 집합 + `updated` 기간 조건
//! - [`UserNameFuzzyFilter`]: 이름 일부 문자열 (대소문자 무시 부분 일치)
//!
//! 두 조건은 [`UserQuery`]로 감싸져 저장소에 전달되기 전에
//! 저장소 독립적인 술어(`repositories::users::predicate::Predicate`)로 변환됩니다.
//!
//! ## JSON 예시
//!
//! ```json
//! {
//!   "last_names": ["Lee", "Kim"],
//!   "emails": ["ann@example.com"],
//!   "date_filter": { "start": "2024-01-01T00:00:00Z", "end_inclusive": false }
//! }
//! ```

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn inclusive_by_default() -> bool {
    true
}

/// `updated` 시각에 대한 기간 조건
///
/// 경계가 없는 쪽은 제한하지 않습니다. 각 경계의 포함 여부는 설정 가능하며
/// 기본값은 양쪽 모두 포함입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilter {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default = "inclusive_by_default")]
    pub start_inclusive: bool,
    #[serde(default = "inclusive_by_default")]
    pub end_inclusive: bool,
}

impl DateFilter {
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            start_inclusive: true,
            end_inclusive: true,
        }
    }

    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: None,
            start_inclusive: true,
            end_inclusive: true,
        }
    }

    pub fn until(end: DateTime<Utc>) -> Self {
        Self {
            start: None,
            end: Some(end),
            start_inclusive: true,
            end_inclusive: true,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// 주어진 시각이 기간 안에 있는지 확인합니다.
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        let after_start = match &self.start {
            Some(start) if self.start_inclusive => instant >= start,
            Some(start) => instant > start,
            None => true,
        };
        let before_end = match &self.end {
            Some(end) if self.end_inclusive => instant <= end,
            Some(end) => instant < end,
            None => true,
        };

        after_start && before_end
    }
}

/// 구조화된 사용자 필터
///
/// 값이 있는 필드끼리는 AND, 한 필드의 값 집합 안에서는 OR로 결합됩니다.
/// `None`이거나 빈 집합인 필드는 조건을 걸지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFilter {
    pub ids: Option<BTreeSet<String>>,
    pub first_names: Option<BTreeSet<String>>,
    pub last_names: Option<BTreeSet<String>>,
    pub middle_names: Option<BTreeSet<String>>,
    pub emails: Option<BTreeSet<String>>,
    pub date_filter: Option<DateFilter>,
}

impl UserFilter {
    /// 이메일 집합만으로 제한한 필터
    pub fn by_emails<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            emails: Some(emails.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }
}

/// 이름 부분 일치 필터
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserNameFuzzyFilter {
    pub name: String,
}

impl UserNameFuzzyFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// 저장소에 전달되는 검색 조건
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserQuery {
    /// 필드별 정확히 일치 + 기간 조건
    Exact(UserFilter),
    /// 이름 부분 일치
    FuzzyName(UserNameFuzzyFilter),
}
