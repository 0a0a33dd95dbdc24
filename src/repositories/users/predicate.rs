//! # 사용자 검색 술어
//!
//! 도메인 검색 조건([`UserQuery`])을 저장소 독립적인 술어 트리로 변환합니다.
//! 각 저장소 구현은 이 트리를 자신의 질의 표현으로 옮깁니다.
//!
//! - 메모리 저장소: [`Predicate::matches`]로 직접 평가
//! - MongoDB 저장소: `user_repo::to_document`로 BSON 필터 문서 생성
//!
//! ## 변환 규칙
//!
//! ```text
//! UserQuery::Exact(filter)
//!   ids / first_names / last_names / middle_names / emails
//!       → 값이 있는 필드마다 In(field, values)  (필드 안에서는 OR)
//!   date_filter
//!       → UpdatedWithin(range)
//!   전체를 And로 결합, 조건이 하나도 없으면 All
//!
//! UserQuery::FuzzyName(filter)
//!   → Or[ Contains(first_name), Contains(middle_name), Contains(last_name) ]
//! ```

use std::collections::BTreeSet;

use crate::domain::entities::users::User;
use crate::domain::models::filter::{DateFilter, UserFilter, UserNameFuzzyFilter, UserQuery};
use crate::domain::models::user_field::UserField;

/// 이름 부분 일치 검색 대상 필드
pub const NAME_FIELDS: [UserField; 3] = [UserField::FirstName, UserField::MiddleName, UserField::LastName];

/// 저장소 독립적인 검색 술어
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// 모든 레코드
    All,
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    /// 필드 값이 집합 중 하나와 정확히 일치
    In(UserField, BTreeSet<String>),
    /// 필드 값이 조각을 포함 (대소문자 무시)
    Contains(UserField, String),
    /// `updated`가 기간 안에 있음
    UpdatedWithin(DateFilter),
}

impl Predicate {
    /// 검색 조건을 술어로 변환합니다.
    pub fn from_query(query: &UserQuery) -> Self {
        match query {
            UserQuery::Exact(filter) => Self::from_filter(filter),
            UserQuery::FuzzyName(filter) => Self::from_fuzzy_name(filter),
        }
    }

    pub fn from_filter(filter: &UserFilter) -> Self {
        let sets = [
            (UserField::Id, &filter.ids),
            (UserField::FirstName, &filter.first_names),
            (UserField::LastName, &filter.last_names),
            (UserField::MiddleName, &filter.middle_names),
            (UserField::Email, &filter.emails),
        ];

        let mut clauses: Vec<Predicate> = sets
            .into_iter()
            .filter_map(|(field, values)| match values {
                Some(values) if !values.is_empty() => Some(Predicate::In(field, values.clone())),
                _ => None,
            })
            .collect();

        if let Some(range) = filter.date_filter.as_ref().filter(|range| !range.is_unbounded()) {
            clauses.push(Predicate::UpdatedWithin(range.clone()));
        }

        Self::all_of(clauses)
    }

    pub fn from_fuzzy_name(filter: &UserNameFuzzyFilter) -> Self {
        let fragment = filter.name.to_lowercase();

        Predicate::Or(
            NAME_FIELDS
                .into_iter()
                .map(|field| Predicate::Contains(field, fragment.clone()))
                .collect(),
        )
    }

    fn all_of(mut clauses: Vec<Predicate>) -> Self {
        match clauses.len() {
            0 => Predicate::All,
            1 => clauses.remove(0),
            _ => Predicate::And(clauses),
        }
    }

    /// 레코드가 술어를 만족하는지 평가합니다.
    pub fn matches(&self, user: &User) -> bool {
        match self {
            Predicate::All => true,
            Predicate::And(clauses) => clauses.iter().all(|clause| clause.matches(user)),
            Predicate::Or(clauses) => clauses.iter().any(|clause| clause.matches(user)),
            Predicate::In(field, values) => field
                .text(user)
                .is_some_and(|value| values.contains(value)),
            Predicate::Contains(field, fragment) => field
                .text(user)
                .is_some_and(|value| value.to_lowercase().contains(&fragment.to_lowercase())),
            Predicate::UpdatedWithin(range) => user
                .updated
                .as_ref()
                .is_some_and(|updated| range.contains(updated)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Role;
    use chrono::{Duration, Utc};

    fn user(first: &str, middle: Option<&str>, last: &str, email: &str) -> User {
        User::new(
            Some(first.to_string()),
            middle.map(str::to_string),
            Some(last.to_string()),
            email.to_string(),
            None,
            "x".to_string(),
            Role::Member,
        )
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert_eq!(Predicate::from_filter(&UserFilter::default()), Predicate::All);

        let empty_sets = UserFilter {
            first_names: Some(BTreeSet::new()),
            ..UserFilter::default()
        };
        assert_eq!(Predicate::from_filter(&empty_sets), Predicate::All);
    }

    #[test]
    fn test_single_field_filter_is_not_wrapped() {
        let predicate = Predicate::from_filter(&UserFilter::by_emails(["ann@example.com"]));

        assert_eq!(
            predicate,
            Predicate::In(UserField::Email, BTreeSet::from(["ann@example.com".to_string()]))
        );
    }

    #[test]
    fn test_fields_are_anded_and_values_ored() {
        let filter = UserFilter {
            first_names: Some(BTreeSet::from(["Ann".to_string(), "Bob".to_string()])),
            last_names: Some(BTreeSet::from(["Lee".to_string()])),
            ..UserFilter::default()
        };
        let predicate = Predicate::from_filter(&filter);

        assert!(predicate.matches(&user("Ann", None, "Lee", "a@x.io")));
        assert!(predicate.matches(&user("Bob", None, "Lee", "b@x.io")));
        assert!(!predicate.matches(&user("Ann", None, "Kim", "c@x.io")));
        assert!(!predicate.matches(&user("Cid", None, "Lee", "d@x.io")));
    }

    #[test]
    fn test_exact_match_is_case_sensitive() {
        let predicate = Predicate::from_filter(&UserFilter::by_emails(["ann@example.com"]));

        assert!(!predicate.matches(&user("Ann", None, "Lee", "ANN@example.com")));
    }

    #[test]
    fn test_missing_optional_field_never_matches_set() {
        let filter = UserFilter {
            middle_names: Some(BTreeSet::from(["Marie".to_string()])),
            ..UserFilter::default()
        };

        assert!(!Predicate::from_filter(&filter).matches(&user("Ann", None, "Lee", "a@x.io")));
        assert!(Predicate::from_filter(&filter).matches(&user("Ann", Some("Marie"), "Lee", "a@x.io")));
    }

    #[test]
    fn test_date_range_applies_to_updated() {
        let mut recent = user("Ann", None, "Lee", "a@x.io");
        let mut old = user("Bob", None, "Kim", "b@x.io");
        let now = Utc::now();
        recent.updated = Some(now);
        old.updated = Some(now - Duration::days(30));

        let filter = UserFilter {
            date_filter: Some(DateFilter::since(now - Duration::days(1))),
            ..UserFilter::default()
        };
        let predicate = Predicate::from_filter(&filter);

        assert!(predicate.matches(&recent));
        assert!(!predicate.matches(&old));

        old.updated = None;
        assert!(!predicate.matches(&old));
    }

    #[test]
    fn test_fuzzy_name_is_case_insensitive_substring() {
        let predicate = Predicate::from_fuzzy_name(&UserNameFuzzyFilter::new("ann"));

        assert!(predicate.matches(&user("Ann", None, "Lee", "a@x.io")));
        assert!(predicate.matches(&user("Joe", Some("Hannah"), "Kim", "b@x.io")));
        assert!(predicate.matches(&user("Bo", None, "BRANNIGAN", "c@x.io")));
        assert!(!predicate.matches(&user("Anita", None, "Park", "d@x.io")));
        assert!(!predicate.matches(&user("Bob", None, "Kim", "ann@x.io")));
    }

    #[test]
    fn test_contains_ignores_case_of_fragment() {
        let predicate = Predicate::Contains(UserField::LastName, "LEE".to_string());

        assert!(predicate.matches(&user("Ann", None, "Lee", "a@x.io")));
        assert!(predicate.matches(&user("Bob", None, "Ashlee", "b@x.io")));
        assert!(!predicate.matches(&user("Cid", None, "Kim", "c@x.io")));
    }

    #[test]
    fn test_empty_fuzzy_fragment_matches_named_users() {
        let predicate = Predicate::from_fuzzy_name(&UserNameFuzzyFilter::new(""));

        assert!(predicate.matches(&user("Bob", None, "Kim", "b@x.io")));
    }
}
