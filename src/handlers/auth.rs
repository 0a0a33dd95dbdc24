//! # Authentication HTTP Handlers
//!
//! 이메일/비밀번호 인증 엔드포인트입니다. 세션이나 토큰은 발급하지 않으며,
//! 자격 증명 확인 결과만 상태 코드로 알려줍니다.
//!
//! | 결과 | 상태 코드 |
//! |------|-----------|
//! | 인증 성공 | 204 No Content |
//! | 이메일 미등록 / 비밀번호 불일치 | 401 `{"error": "Invalid credentials"}` |
//! | 요청 형식 오류 | 400 |

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::{
    core::errors::AppError,
    domain::dto::users::request::UserAuthRequest,
    services::users::UserService,
};

/// 로컬 로그인
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"ann@example.com","password":"hunter2"}'
/// ```
#[post("/login")]
pub async fn local_login(
    service: web::Data<UserService>,
    payload: web::Json<UserAuthRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    service.authenticate(&payload).await?;

    Ok(HttpResponse::NoContent().finish())
}
