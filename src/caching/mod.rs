//! 캐싱 계층 모듈
//!
//! 사용자 ID 조회 결과를 Redis에 캐싱합니다.
//! 조회 중 캐시 실패는 로그만 남기고 원본 저장소로 넘어가지만,
//! 쓰기 뒤의 캐시 무효화 실패는 에러로 전파됩니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! USER_CACHE_TTL_SECONDS=600        # 사용자 캐시 TTL
//! ```

pub mod redis;
pub mod user_cache;

pub use user_cache::{RedisUserCache, UserCache};
