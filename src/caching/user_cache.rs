//! # 사용자 캐시
//!
//! 저장소 계층이 ID 조회 결과를 캐싱할 때 사용하는 포트와 Redis 구현입니다.
//!
//! - **키 패턴**: `user:{user_id}`
//! - **TTL**: `USER_CACHE_TTL_SECONDS` (기본 600초)

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    caching::redis::{RedisClient, cache_key},
    core::errors::{AppError, AppResult},
    domain::entities::users::User,
};

const CACHE_PREFIX: &str = "user";

/// ID 단위 사용자 캐시
#[async_trait]
pub trait UserCache: Send + Sync {
    async fn get(&self, id: &str) -> AppResult<Option<User>>;

    async fn put(&self, user: &User) -> AppResult<()>;

    /// 항목을 제거합니다. 항목이 없어도 성공입니다.
    async fn evict(&self, id: &str) -> AppResult<()>;
}

fn redis_error(error: redis::RedisError) -> AppError {
    AppError::RedisError(error.to_string())
}

/// Redis 기반 사용자 캐시
pub struct RedisUserCache {
    redis: Arc<RedisClient>,
    ttl_seconds: u64,
}

impl RedisUserCache {
    pub fn new(redis: Arc<RedisClient>, ttl_seconds: u64) -> Self {
        Self { redis, ttl_seconds }
    }
}

#[async_trait]
impl UserCache for RedisUserCache {
    async fn get(&self, id: &str) -> AppResult<Option<User>> {
        self.redis
            .get::<User>(&cache_key(CACHE_PREFIX, id))
            .await
            .map_err(redis_error)
    }

    async fn put(&self, user: &User) -> AppResult<()> {
        self.redis
            .set_with_expiry(&cache_key(CACHE_PREFIX, &user.id), user, self.ttl_seconds)
            .await
            .map_err(redis_error)
    }

    async fn evict(&self, id: &str) -> AppResult<()> {
        self.redis
            .del(&cache_key(CACHE_PREFIX, id))
            .await
            .map_err(redis_error)
    }
}
