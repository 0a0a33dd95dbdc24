//! 사용자 데이터 액세스 계층
//!
//! 서비스 계층은 [`UserStore`] 트레이트에만 의존하며, 실제 저장소는
//! 애플리케이션 시작 시 `USER_STORE` 설정에 따라 선택됩니다.
//!
//! | 구현 | 설명 |
//! |------|------|
//! | [`MongoUserRepository`](user_repo::MongoUserRepository) | MongoDB |
//! | [`CachedUserRepository`](cached_repo::CachedUserRepository) | 다른 저장소 앞단의 ID 조회 캐시 |
//! | [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository) | 프로세스 메모리, 로컬 실행과 테스트용 |
//!
//! 검색 조건은 [`Predicate`](predicate::Predicate)로 전달되며 각 구현이
//! 자신의 질의 표현으로 변환합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let saved = store.save(user).await?;
//! let found = store.find_by_id(&saved.id).await?;
//! ```

pub mod cached_repo;
pub mod memory_repo;
pub mod predicate;
pub mod user_repo;

pub use cached_repo::CachedUserRepository;
pub use memory_repo::InMemoryUserRepository;
pub use predicate::Predicate;
pub use user_repo::MongoUserRepository;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::User;
use crate::domain::models::page::{Page, PageRequest};

/// 사용자 레코드의 영속 저장소
///
/// 구현체의 에러는 서비스 계층에서 변환되지 않고 그대로 호출자에게 전파됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 캐시를 거치지 않고 원본 저장소에서 조회합니다.
    ///
    /// 읽은 값을 바탕으로 다시 쓰거나 쓰기 결과를 확인할 때 사용합니다.
    async fn find_by_id_uncached(&self, id: &str) -> AppResult<Option<User>> {
        self.find_by_id(id).await
    }

    /// ID로 삭제합니다. 대상이 없어도 에러가 아닙니다.
    async fn delete_by_id(&self, id: &str) -> AppResult<()>;

    /// 같은 ID가 있으면 교체하고, 없으면 삽입합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// 술어와 일치하는 레코드 한 페이지와 전체 일치 수
    async fn find_page(&self, predicate: &Predicate, request: &PageRequest) -> AppResult<Page<User>>;

    /// 술어와 일치하는 모든 레코드 (저장소 순서)
    async fn find_all(&self, predicate: &Predicate) -> AppResult<Vec<User>>;
}
