//! 사용자 계정 관리 서비스 메인 애플리케이션
//!
//! 설정에 따라 사용자 저장소를 고르고, `UserService`를 조립해
//! Actix-web HTTP 서버에 주입합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service_backend::caching::RedisUserCache;
use user_service_backend::caching::redis::RedisClient;
use user_service_backend::config::{
    CredentialConfig, RateLimitConfig, ServerConfig, StoreBackend, StoreConfig,
};
use user_service_backend::core::errors::{AppResult, ErrorContext};
use user_service_backend::db::Database;
use user_service_backend::repositories::users::{
    CachedUserRepository, InMemoryUserRepository, MongoUserRepository, UserStore,
    user_repo::USER_COLLECTION,
};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::credentials::Sha256CredentialTransform;
use user_service_backend::services::events::LogEventSink;
use user_service_backend::services::users::UserService;
use user_service_backend::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_start, print_sub_task, print_wiring_summary,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중...");

    let service = web::Data::new(build_user_service().await?);

    info!("✅ 모든 구성 요소가 성공적으로 초기화되었습니다!");

    start_http_server(service).await
}

/// 저장소, 자격 증명 변환, 이벤트 싱크를 조립해 `UserService`를 만듭니다
async fn build_user_service() -> std::io::Result<UserService> {
    print_boxed_title("USER SERVICE WIRING");

    let backend = StoreConfig::backend();

    print_step_start(1, "User store");
    let store = initialize_store(backend).await.map_err(|e| {
        error!("사용자 저장소 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    print_step_complete(1, "User store", 1);

    print_step_start(2, "Credential transform");
    let transform = Arc::new(Sha256CredentialTransform::new(CredentialConfig::pepper()));
    print_sub_task("Sha256CredentialTransform", "ready");
    print_step_complete(2, "Credential transform", 1);

    print_step_start(3, "Event sink");
    let events = Arc::new(LogEventSink);
    print_sub_task("LogEventSink", "ready");
    print_step_complete(3, "Event sink", 1);

    print_wiring_summary(
        backend.as_str(),
        &["UserStore", "Sha256CredentialTransform", "LogEventSink", "UserService"],
    );

    Ok(UserService::new(store, transform, events))
}

/// 설정된 백엔드의 사용자 저장소를 초기화합니다
///
/// MongoDB 백엔드는 MongoDB와 Redis에 모두 연결되어야 하며,
/// 시작 시 `users` 컬렉션 인덱스를 생성합니다. ID 조회는 Redis 캐시를 거칩니다.
async fn initialize_store(backend: StoreBackend) -> AppResult<Arc<dyn UserStore>> {
    match backend {
        StoreBackend::Memory => {
            print_sub_task("InMemoryUserRepository", "ready");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::new().await.context("MongoDB 연결 실패")?);
            print_sub_task("MongoDB", database.database_name());

            let redis = Arc::new(RedisClient::new().await.context("Redis 연결 실패")?);
            print_sub_task("Redis", "connected");

            let repository = MongoUserRepository::new(database);
            repository
                .create_indexes()
                .await
                .with_context(|| format!("{} 컬렉션 인덱스 생성 실패", USER_COLLECTION))?;
            print_sub_task("MongoUserRepository", "ready");

            let cache = RedisUserCache::new(redis, StoreConfig::cache_ttl_seconds());
            print_sub_task("RedisUserCache", "ready");

            Ok(Arc::new(CachedUserRepository::new(Arc::new(repository), Arc::new(cache))))
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=user_service_backend::services=trace cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
    info!(
        "Current profile: {}",
        std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string())
    );
}

/// 로컬 프론트엔드와의 통신을 위한 CORS 설정
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec!["x-total-count", "x-page-count"])
        .max_age(3600)
}
