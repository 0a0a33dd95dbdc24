//! # Configuration Module
//!
//! 사용자 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 페이지네이션, Rate Limiting
//! - [`credential_config`] - 자격 증명 변환(pepper) 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # .env.dev
//! ENVIRONMENT=development
//! HOST=127.0.0.1
//! PORT=8080
//! USER_STORE=memory            # mongo | memory
//! MONGODB_URI=mongodb://localhost:27017
//! DATABASE_NAME=user_service_dev
//! REDIS_URL=redis://localhost:6379
//! USER_CACHE_TTL_SECONDS=600
//! CREDENTIAL_PEPPER=change-me
//! DEFAULT_PAGE_SIZE=20
//! MAX_PAGE_SIZE=100
//! RATE_LIMIT_PER_SECOND=20
//! RATE_LIMIT_BURST_SIZE=40
//! ```

pub mod data_config;
pub mod credential_config;

pub use data_config::*;
pub use credential_config::*;
