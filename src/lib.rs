//! 사용자 계정 관리 서비스 백엔드
//!
//! 사용자 계정의 생성, 조회, 검색, 수정, 삭제와 비밀번호 인증을 제공하는
//! actix-web 기반 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, ID 조회, 이름 부분 일치 검색, 구조화된 필터 검색, 부분 수정, 삭제
//! - **인증**: 이메일/비밀번호 확인 (실패 원인 비공개)
//! - **생성자 주입**: 저장소, 자격 증명 변환, 이벤트 싱크를 `UserService::new`로 주입
//! - **MongoDB**: 사용자 데이터 영구 저장 (`email` 유니크 인덱스)
//! - **Redis**: ID 조회 캐싱
//! - **메모리 저장소**: 외부 의존성 없는 로컬 실행과 테스트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────────────┐
//! │   UserService   │ ──▶ │ CredentialTransform      │
//! └─────────────────┘     │ UserEventSink            │
//!          │              └──────────────────────────┘
//!          ▼
//! ┌─────────────────┐
//! │    UserStore    │ ← Predicate 기반 검색
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 또는 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_service_backend::repositories::users::InMemoryUserRepository;
//! use user_service_backend::services::{
//!     credentials::Sha256CredentialTransform, events::LogEventSink, users::UserService,
//! };
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(Sha256CredentialTransform::new("pepper")),
//!     Arc::new(LogEventSink),
//! );
//! let user = service.create(request).await?;
//! service.authenticate(&login).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
