//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소 백엔드, 캐시, 페이지네이션, 서버 및 Rate Limiting 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 파싱에 실패하면 경고 후 기본값을 사용합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 환경 변수를 숫자로 파싱하고, 실패 시 경고 후 기본값을 반환합니다.
fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        parse_or_default("PORT", env::var("PORT").ok(), 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB + Redis 캐시 (기본값)
    Mongo,
    /// 프로세스 메모리 저장소. 재시작 시 데이터가 사라집니다.
    Memory,
}

impl StoreBackend {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Mongo => "mongo",
            StoreBackend::Memory => "memory",
        }
    }
}

pub struct StoreConfig;

impl StoreConfig {
    /// `USER_STORE` 환경 변수 (`mongo` | `memory`)
    pub fn backend() -> StoreBackend {
        env::var("USER_STORE")
            .map(|value| StoreBackend::from_str(&value))
            .unwrap_or(StoreBackend::Mongo)
    }

    /// 사용자 캐시 TTL (초). `USER_CACHE_TTL_SECONDS`, 기본값 600.
    pub fn cache_ttl_seconds() -> u64 {
        parse_or_default(
            "USER_CACHE_TTL_SECONDS",
            env::var("USER_CACHE_TTL_SECONDS").ok(),
            600,
        )
    }
}

pub struct PaginationConfig;

impl PaginationConfig {
    pub const DEFAULT_PAGE_SIZE: u64 = 20;
    pub const MAX_PAGE_SIZE: u64 = 100;

    /// 페이지 크기를 지정하지 않은 요청에 적용되는 크기
    pub fn default_page_size() -> u64 {
        parse_or_default(
            "DEFAULT_PAGE_SIZE",
            env::var("DEFAULT_PAGE_SIZE").ok(),
            Self::DEFAULT_PAGE_SIZE,
        )
    }

    /// 한 페이지에 허용되는 최대 크기
    pub fn max_page_size() -> u64 {
        parse_or_default(
            "MAX_PAGE_SIZE",
            env::var("MAX_PAGE_SIZE").ok(),
            Self::MAX_PAGE_SIZE,
        )
    }
}

/// Rate Limiting 설정
///
/// ```bash
/// # .env.dev
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn load() -> Self {
        let config = Self {
            per_second: parse_or_default(
                "RATE_LIMIT_PER_SECOND",
                env::var("RATE_LIMIT_PER_SECOND").ok(),
                100,
            ),
            burst_size: parse_or_default(
                "RATE_LIMIT_BURST_SIZE",
                env::var("RATE_LIMIT_BURST_SIZE").ok(),
                200,
            ),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
        assert!(Environment::from_str("unknown").is_production());
    }

    #[test]
    fn test_store_backend_from_string() {
        assert_eq!(StoreBackend::from_str("memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str(" In-Memory "), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str("mongo"), StoreBackend::Mongo);
        assert_eq!(StoreBackend::from_str("anything"), StoreBackend::Mongo);
        assert_eq!(StoreBackend::Memory.as_str(), "memory");
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default("K", Some("42".to_string()), 7u64), 42);
        assert_eq!(parse_or_default("K", Some(" 15 ".to_string()), 7u64), 15);
        assert_eq!(parse_or_default("K", Some("abc".to_string()), 7u64), 7);
        assert_eq!(parse_or_default("K", None, 7u64), 7);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_pagination_defaults() {
        if env::var("DEFAULT_PAGE_SIZE").is_err() {
            assert_eq!(PaginationConfig::default_page_size(), 20);
        }

        if env::var("MAX_PAGE_SIZE").is_err() {
            assert_eq!(PaginationConfig::max_page_size(), 100);
        }
    }
}
