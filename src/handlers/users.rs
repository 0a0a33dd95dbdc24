//! # User Management HTTP Handlers
//!
//! 사용자 관리 HTTP 엔드포인트입니다. 모든 핸들러는 `web::Data<UserService>`로
//! 주입된 서비스에 처리를 위임하고, 입력 검증과 응답 형식만 담당합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users?name=&page=&size=&sort=` | 이름 부분 일치 검색 / 전체 목록 | 200 OK |
//! | `POST` | `/users/search?page=&size=&sort=` | 구조화된 필터 검색 | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `PATCH` | `/users/{id}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 200 OK |
//!
//! 목록 응답에는 `x-total-count`, `x-page-count` 헤더가 붙습니다.
//!
//! ## 페이지 파라미터
//!
//! - `page`: 0부터 시작 (기본 0)
//! - `size`: 기본 `DEFAULT_PAGE_SIZE`, 최대 `MAX_PAGE_SIZE`
//! - `sort`: `field[,asc|desc]`, 여러 기준은 `;`로 구분 (예: `lastName,desc;firstName`)

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::Deserialize;
use validator::Validate;

use crate::{
    config::PaginationConfig,
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::{CreateUserRequest, UpdateUserRequest},
            response::DeleteUserResponse,
        },
        models::{
            filter::UserFilter,
            page::{PageRequest, SortOrder},
        },
    },
    services::users::UserService,
};

/// 페이지 쿼리 파라미터
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort: Option<String>,
}

impl PageQuery {
    pub fn to_page_request(&self) -> AppResult<PageRequest> {
        let size = self.size.unwrap_or_else(PaginationConfig::default_page_size);
        let max = PaginationConfig::max_page_size();
        if size > max {
            return Err(AppError::ValidationError(format!(
                "page size must not exceed {}",
                max
            )));
        }

        let sort = match self.sort.as_deref() {
            Some(raw) => SortOrder::parse_list(raw)?,
            None => Vec::new(),
        };

        Ok(PageRequest::of(self.page.unwrap_or(0), size)?.with_sort(sort))
    }
}

/// 이름 검색 쿼리 파라미터
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub name: Option<String>,
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort: Option<String>,
}

impl ListUsersQuery {
    fn page_query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            size: self.size,
            sort: self.sort.clone(),
        }
    }
}

/// 새 사용자 생성
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"first_name":"Ann","last_name":"Lee","email":"ann@example.com","password":"hunter2"}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// 이름 부분 일치 검색
///
/// `name`이 없으면 조건 없는 전체 목록을 페이지 단위로 반환합니다.
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<ListUsersQuery>,
) -> Result<HttpResponse, AppError> {
    let request = query.page_query().to_page_request()?;
    let mut response = HttpResponse::Ok();

    let users = match query.name.as_deref() {
        Some(name) => service.retrieve_by_name(name, &request, &mut response).await?,
        None => {
            service
                .retrieve_by_filter(&UserFilter::default(), &request, &mut response)
                .await?
        }
    };

    Ok(response.json(users))
}

/// 구조화된 필터 검색
///
/// ```bash
/// curl -X POST "http://localhost:8080/api/v1/users/search?page=0&size=20" \
///   -H "Content-Type: application/json" \
///   -d '{"last_names":["Lee"],"date_filter":{"start":"2024-01-01T00:00:00Z"}}'
/// ```
#[post("/search")]
pub async fn search_users(
    service: web::Data<UserService>,
    query: web::Query<PageQuery>,
    filter: web::Json<UserFilter>,
) -> Result<HttpResponse, AppError> {
    let request = query.to_page_request()?;
    let mut response = HttpResponse::Ok();

    let users = service.retrieve_by_filter(&filter, &request, &mut response).await?;
    Ok(response.json(users))
}

#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.retrieve(&user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 부분 수정
///
/// 이름 세 필드와 전화번호만 수정할 수 있습니다.
/// 비어 있거나 형식이 잘못된 값은 무시되고 나머지 필드만 반영됩니다.
#[patch("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner().without_invalid_fields();

    let user = service.update(&user_id, request).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제
///
/// 대상이 없으면 404, 삭제 후에도 레코드가 남아 있으면 `{"deleted": false}`입니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deleted = service.delete(&user_id).await?;
    Ok(HttpResponse::Ok().json(DeleteUserResponse { deleted }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::response::UserReadDto;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::routes::configure_all_routes;
    use crate::services::credentials::Sha256CredentialTransform;
    use crate::services::events::LogEventSink;
    use crate::utils::page_util::{PAGE_COUNT_HEADER, TOTAL_COUNT_HEADER};
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;
    use std::sync::Arc;

    fn service() -> web::Data<UserService> {
        web::Data::new(UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Sha256CredentialTransform::new("test-pepper")),
            Arc::new(LogEventSink),
        ))
    }

    fn header(resp: &actix_web::dev::ServiceResponse, name: &str) -> String {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn test_page_query_defaults_and_limits() {
        let request = PageQuery::default().to_page_request().unwrap();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, PaginationConfig::DEFAULT_PAGE_SIZE);

        let too_big = PageQuery {
            size: Some(PaginationConfig::MAX_PAGE_SIZE + 1),
            ..PageQuery::default()
        };
        assert!(matches!(too_big.to_page_request(), Err(AppError::ValidationError(_))));

        let zero = PageQuery {
            size: Some(0),
            ..PageQuery::default()
        };
        assert!(zero.to_page_request().is_err());
    }

    #[actix_web::test]
    async fn test_user_lifecycle_over_http() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "first_name": "Ann",
                "last_name": "Lee",
                "email": "ann@example.com",
                "password": "hunter2"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: UserReadDto = test::read_body_json(resp).await;
        assert_eq!(created.name, "Ann Lee");

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}", created.id))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["email"], "ann@example.com");
        assert_eq!(body["role"], "MEMBER");
        assert!(body.get("password").is_none());

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/users/{}", created.id))
            .set_json(json!({ "first_name": "Anna", "last_name": " " }))
            .to_request();
        let updated: UserReadDto = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.first_name.as_deref(), Some("Anna"));
        assert_eq!(updated.last_name.as_deref(), Some("Lee"));

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/users/{}", created.id))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "deleted": true }));

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_rejects_invalid_payload() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "email": "not-an-email", "password": "hunter2" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "email": "ann@example.com", "password": "  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_listing_sets_page_headers() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        for (first, last, email) in [
            ("Ann", "Lee", "ann@x.io"),
            ("Joanna", "Kim", "jo@x.io"),
            ("Bob", "Park", "bob@x.io"),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({ "first_name": first, "last_name": last, "email": email, "password": "pw" }))
                .to_request();
            assert!(test::call_service(&app, req).await.status().is_success());
        }

        let req = test::TestRequest::get().uri("/api/v1/users?size=2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(header(&resp, TOTAL_COUNT_HEADER), "3");
        assert_eq!(header(&resp, PAGE_COUNT_HEADER), "2");
        let users: Vec<UserReadDto> = test::read_body_json(resp).await;
        assert_eq!(users.len(), 2);

        let req = test::TestRequest::get()
            .uri("/api/v1/users?name=ANN&sort=firstName,desc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(header(&resp, TOTAL_COUNT_HEADER), "2");
        let users: Vec<UserReadDto> = test::read_body_json(resp).await;
        let emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["jo@x.io", "ann@x.io"]);

        let req = test::TestRequest::get()
            .uri("/api/v1/users?sort=password")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_search_with_filter_body() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        for (first, last, email) in [("Ann", "Lee", "a@x.io"), ("Bob", "Kim", "b@x.io"), ("Cid", "Lee", "c@x.io")] {
            let req = test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({ "first_name": first, "last_name": last, "email": email, "password": "pw" }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::post()
            .uri("/api/v1/users/search?size=1")
            .set_json(json!({ "last_names": ["Lee"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(header(&resp, TOTAL_COUNT_HEADER), "2");
        assert_eq!(header(&resp, PAGE_COUNT_HEADER), "2");

        let users: Vec<UserReadDto> = test::read_body_json(resp).await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "a@x.io");
    }

    #[actix_web::test]
    async fn test_unknown_user_operations_are_404() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        let req = test::TestRequest::patch()
            .uri("/api/v1/users/missing")
            .set_json(json!({ "first_name": "Ann" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/api/v1/users/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Not found: user 'missing' doesn't exist");
    }

    #[actix_web::test]
    async fn test_patch_keeps_valid_fields_when_others_are_malformed() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "first_name": "Ann",
                "last_name": "Lee",
                "phone_number": "555-0100",
                "email": "ann@example.com",
                "password": "hunter2"
            }))
            .to_request();
        let created: UserReadDto = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/users/{}", created.id))
            .set_json(json!({ "first_name": "Anna", "phone_number": "call me" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: UserReadDto = test::read_body_json(resp).await;
        assert_eq!(updated.first_name.as_deref(), Some("Anna"));
        assert_eq!(updated.phone_number.as_deref(), Some("555-0100"));
    }

    #[actix_web::test]
    async fn test_unreachable_page_is_rejected() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users?page={}&size=20", u64::MAX / 2))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
