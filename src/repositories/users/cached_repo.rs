//! # ID 조회 캐시 저장소
//!
//! 원본 [`UserStore`] 앞에서 `find_by_id` 결과를 [`UserCache`]에 캐싱합니다.
//!
//! ## 캐시 규칙
//!
//! | 연산 | 동작 |
//! |------|------|
//! | `find_by_id` | 캐시 적중 시 캐시 값, 미스 시 원본 조회 후 캐시에 저장 |
//! | `find_by_id_uncached` | 항상 원본 조회 |
//! | `save` / `delete_by_id` | 원본 쓰기 후 캐시 항목 제거 |
//! | `find_page` / `find_all` | 캐싱하지 않음 |
//!
//! 조회 중의 캐시 실패는 경고만 남기고 원본으로 넘어갑니다.
//! 쓰기 뒤의 무효화 실패는 `RedisError`로 전파되어, 캐시가 마지막으로
//! 성공한 쓰기보다 오래된 값을 계속 내보내는 상황이 호출자에게 드러납니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::{
    caching::UserCache,
    core::errors::AppResult,
    domain::entities::users::User,
    domain::models::page::{Page, PageRequest},
    repositories::users::{UserStore, predicate::Predicate},
};

pub struct CachedUserRepository {
    inner: Arc<dyn UserStore>,
    cache: Arc<dyn UserCache>,
}

impl CachedUserRepository {
    pub fn new(inner: Arc<dyn UserStore>, cache: Arc<dyn UserCache>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl UserStore for CachedUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        match self.cache.get(id).await {
            Ok(Some(cached)) => return Ok(Some(cached)),
            Ok(None) => {}
            Err(e) => warn!("사용자 캐시 조회 실패 ({}): {}", id, e),
        }

        let user = self.inner.find_by_id(id).await?;

        if let Some(ref user) = user {
            if let Err(e) = self.cache.put(user).await {
                warn!("사용자 캐시 저장 실패 ({}): {}", id, e);
            }
        }

        Ok(user)
    }

    async fn find_by_id_uncached(&self, id: &str) -> AppResult<Option<User>> {
        self.inner.find_by_id_uncached(id).await
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        if let Err(e) = self.cache.evict(id).await {
            warn!("사용자 캐시 선제 무효화 실패 ({}): {}", id, e);
        }

        self.inner.delete_by_id(id).await?;
        self.cache.evict(id).await
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let saved = self.inner.save(user).await?;
        self.cache.evict(&saved.id).await?;
        Ok(saved)
    }

    async fn find_page(&self, predicate: &Predicate, request: &PageRequest) -> AppResult<Page<User>> {
        self.inner.find_page(predicate, request).await
    }

    async fn find_all(&self, predicate: &Predicate) -> AppResult<Vec<User>> {
        self.inner.find_all(predicate).await
    }
}
