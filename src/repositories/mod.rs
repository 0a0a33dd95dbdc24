//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`](users::UserStore) 트레이트만 알고 있으며,
//! 구체 구현은 `main.rs`에서 생성자 주입으로 연결됩니다.
//!
//! # Features
//!
//! - MongoDB 저장소와 Redis ID 캐시
//! - 외부 의존성이 없는 메모리 저장소
//! - 저장소 독립적인 검색 술어
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(db, redis, 600));
//! let user = store.find_by_id("7c0e3c1e-...").await?;
//! ```

pub mod users;
