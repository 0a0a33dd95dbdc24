//! 프로세스 메모리 기반 사용자 저장소
//!
//! 외부 서비스 없이 애플리케이션을 실행하거나 테스트할 때 사용합니다.
//! 레코드는 삽입 순서를 유지하며, 이 순서가 "저장소 순서"가 됩니다.

use std::cmp::Ordering;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use crate::domain::models::page::{Page, PageRequest, SortDirection, SortOrder};
use crate::domain::models::user_field::UserField;
use crate::repositories::users::UserStore;
use crate::repositories::users::predicate::Predicate;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned<T>(_: T) -> AppError {
        AppError::InternalError("user store lock poisoned".to_string())
    }

    fn matching(&self, predicate: &Predicate) -> AppResult<Vec<User>> {
        let records = self.records.read().map_err(Self::poisoned)?;

        Ok(records
            .iter()
            .filter(|user| predicate.matches(user))
            .cloned()
            .collect())
    }
}

/// 정렬 기준에 따른 두 레코드 비교
///
/// 값이 없는 필드는 값이 있는 필드보다 앞에 옵니다.
fn compare(a: &User, b: &User, sort: &[SortOrder]) -> Ordering {
    sort.iter()
        .map(|order| {
            let ordering = match order.field {
                UserField::Updated => a.updated.cmp(&b.updated),
                field => field.text(a).cmp(&field.text(b)),
            };
            match order.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let records = self.records.read().map_err(Self::poisoned)?;

        Ok(records.iter().find(|user| user.id == id).cloned())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let mut records = self.records.write().map_err(Self::poisoned)?;
        records.retain(|user| user.id != id);

        Ok(())
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut records = self.records.write().map_err(Self::poisoned)?;

        match records.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => records.push(user.clone()),
        }

        Ok(user)
    }

    async fn find_page(&self, predicate: &Predicate, request: &PageRequest) -> AppResult<Page<User>> {
        let mut matched = self.matching(predicate)?;
        let total = matched.len() as u64;

        if !request.sort.is_empty() {
            // stable sort keeps store order among equal keys
            matched.sort_by(|a, b| compare(a, b, &request.sort));
        }

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let content = matched.into_iter().skip(offset).take(size).collect();

        Ok(Page::new(content, request, total))
    }

    async fn find_all(&self, predicate: &Predicate) -> AppResult<Vec<User>> {
        self.matching(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Role;
    use crate::domain::models::filter::{UserFilter, UserNameFuzzyFilter};

    fn user(first: &str, last: &str, email: &str) -> User {
        User::new(
            Some(first.to_string()),
            None,
            Some(last.to_string()),
            email.to_string(),
            None,
            "stored".to_string(),
            Role::Member,
        )
    }

    async fn seeded() -> InMemoryUserRepository {
        let store = InMemoryUserRepository::new();
        for (first, last, email) in [
            ("Ann", "Lee", "ann@x.io"),
            ("Bob", "Kim", "bob@x.io"),
            ("Joanna", "Park", "jo@x.io"),
            ("Cid", "Moss", "cid@x.io"),
            ("Dee", "Hann", "dee@x.io"),
        ] {
            store.save(user(first, last, email)).await.unwrap();
        }
        store
    }

    #[actix_web::test]
    async fn test_save_inserts_then_replaces() {
        let store = InMemoryUserRepository::new();
        let mut saved = store.save(user("Ann", "Lee", "ann@x.io")).await.unwrap();

        saved.first_name = Some("Anna".to_string());
        store.save(saved.clone()).await.unwrap();

        assert_eq!(store.len(), 1);
        let found = store.find_by_id(&saved.id).await.unwrap().unwrap();
        assert_eq!(found.first_name.as_deref(), Some("Anna"));
    }

    #[actix_web::test]
    async fn test_delete_missing_id_is_not_an_error() {
        let store = seeded().await;

        store.delete_by_id("missing").await.unwrap();
        assert_eq!(store.len(), 5);
    }

    #[actix_web::test]
    async fn test_find_page_reports_total_and_slices() {
        let store = seeded().await;
        let request = PageRequest::of(1, 2).unwrap();

        let page = store.find_page(&Predicate::All, &request).await.unwrap();

        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages(), 3);
        let emails: Vec<_> = page.content.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["jo@x.io", "cid@x.io"]);
    }

    #[actix_web::test]
    async fn test_find_page_sorts_by_field() {
        let store = seeded().await;
        let request = PageRequest::of(0, 10)
            .unwrap()
            .with_sort(vec![SortOrder::desc(UserField::FirstName)]);

        let page = store.find_page(&Predicate::All, &request).await.unwrap();

        let names: Vec<_> = page.content.iter().filter_map(|u| u.first_name.as_deref()).collect();
        assert_eq!(names, vec!["Joanna", "Dee", "Cid", "Bob", "Ann"]);
    }

    #[actix_web::test]
    async fn test_page_past_end_is_empty() {
        let store = seeded().await;
        let request = PageRequest::of(9, 10).unwrap();

        let page = store.find_page(&Predicate::All, &request).await.unwrap();

        assert!(page.is_empty());
        assert_eq!(page.total_elements, 5);
    }

    #[actix_web::test]
    async fn test_find_all_keeps_store_order() {
        let store = seeded().await;
        let predicate = Predicate::from_fuzzy_name(&UserNameFuzzyFilter::new("ANN"));

        let found = store.find_all(&predicate).await.unwrap();

        let emails: Vec<_> = found.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["ann@x.io", "jo@x.io", "dee@x.io"]);
    }

    #[actix_web::test]
    async fn test_find_all_with_exact_filter() {
        let store = seeded().await;
        let predicate = Predicate::from_filter(&UserFilter::by_emails(["bob@x.io", "cid@x.io"]));

        let found = store.find_all(&predicate).await.unwrap();

        assert_eq!(found.len(), 2);
    }
}
