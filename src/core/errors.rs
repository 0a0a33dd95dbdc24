//! # Application Error Handling System
//!
//! 사용자 계정 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 정의하고 `actix_web::ResponseError`를 구현하여
//! 서비스 계층의 에러가 그대로 HTTP 응답으로 변환되도록 합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | HTTP 상태 | 발생 위치 |
//! |------|-----------|-----------|
//! | `NotFound` | 404 | 조회/수정/삭제 대상 사용자가 없음 |
//! | `InvalidCredentials` | 401 | 인증 실패 (이메일 미등록, 비밀번호 불일치 모두) |
//! | `ValidationError` | 400 | 요청 DTO 검증, 페이지 요청 범위, 정렬 필드 |
//! | `ConflictError` | 409 | 이메일 유니크 인덱스 위반 |
//! | `DatabaseError` / `RedisError` / `InternalError` | 500 | 인프라 오류 |
//!
//! 저장소에서 올라온 에러는 서비스 계층에서 재해석하지 않고 그대로 전파됩니다.
//! 서비스가 직접 만들어내는 에러는 `NotFound`와 `InvalidCredentials` 두 가지뿐입니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let user = store
//!     .find_by_id(id)
//!     .await?
//!     .ok_or_else(|| AppError::NotFound(format!("user '{}' doesn't exist", id)))?;
//! ```

use thiserror::Error;

/// 인증 실패 시 노출되는 고정 메시지
///
/// 어떤 이메일이 등록되어 있는지 유추할 수 없도록
/// 실패 원인과 무관하게 항상 같은 문구를 사용합니다.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연결 실패, 쿼리 실행 실패, 문서 역직렬화 실패 등에서 발생합니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    ///
    /// 조회 중 캐시 실패는 로그로만 남기고 원본 저장소로 넘어갑니다.
    /// 쓰기 뒤 캐시 무효화에 실패하면 이 에러가 호출자에게 전파됩니다.
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// 메시지에는 찾지 못한 사용자 ID가 포함됩니다.
    ///
    /// ```rust,ignore
    /// AppError::NotFound(format!("user '{}' doesn't exist", id))
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 이메일 유니크 인덱스를 위반하는 저장 시도에서 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// "등록되지 않은 이메일"과 "비밀번호 불일치"를 구분하지 않습니다.
    /// 두 경우 모두 같은 변형, 같은 메시지를 가지므로
    /// 에러 값만으로는 실패 원인을 알 수 없습니다.
    #[error("{}", INVALID_CREDENTIALS)]
    InvalidCredentials,

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "<message>"}` 형식의 JSON입니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("size must be at least 1".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("user 'abc' doesn't exist".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
        assert!(error.to_string().contains("abc"));
    }

    #[test]
    fn test_invalid_credentials_response() {
        let error = AppError::InvalidCredentials;
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.to_string(), INVALID_CREDENTIALS);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("email already registered".to_string());
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_infrastructure_errors_are_internal() {
        for error in [
            AppError::DatabaseError("connection reset".to_string()),
            AppError::RedisError("timeout".to_string()),
            AppError::InternalError("Something went wrong".to_string()),
        ] {
            assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
