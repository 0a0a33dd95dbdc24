//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기(생성, 조회, 검색, 수정, 삭제)와 비밀번호 인증을
//! 담당하는 비즈니스 로직 계층입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         UserService                          │
//! │                                                              │
//! │  create / retrieve / retrieve_by_name / retrieve_by_filter   │
//! │  update / delete / authenticate                              │
//! └───────┬───────────────────────┬──────────────────────┬───────┘
//!         │                       │                      │
//!         ▼                       ▼                      ▼
//! ┌───────────────┐   ┌──────────────────────┐   ┌───────────────┐
//! │   UserStore   │   │ CredentialTransform  │   │ UserEventSink │
//! │ (Mongo/메모리) │   │ (단방향 변환)         │   │ (log 파사드)   │
//! └───────────────┘   └──────────────────────┘   └───────────────┘
//! ```
//!
//! 세 협력 객체는 모두 생성자로 주입되며, 서비스 자체는 변경 가능한 상태를
//! 갖지 않으므로 actix 워커 사이에서 `web::Data`로 공유됩니다.
//!
//! ## 에러 정책
//!
//! 서비스가 직접 만드는 에러는 두 가지뿐입니다.
//!
//! - `NotFound`: 조회/수정/삭제 대상 ID가 없음 (메시지에 ID 포함)
//! - `InvalidCredentials`: 인증 실패 (원인과 무관하게 동일)
//!
//! 저장소 에러는 변환 없이 그대로 전파됩니다.
//!
//! ## 동시성
//!
//! `update`는 읽기-수정-쓰기를 원자적으로 수행하지 않습니다.
//! 같은 ID에 대한 동시 수정은 마지막 저장이 이깁니다.

use std::sync::Arc;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::{CreateUserRequest, UpdateUserRequest, UserAuthRequest},
            response::UserReadDto,
        },
        entities::users::User,
        models::{
            events::{AuthenticationFailure, UserEvent},
            filter::{UserFilter, UserNameFuzzyFilter, UserQuery},
            page::PageRequest,
        },
    },
    repositories::users::{Predicate, UserStore},
    services::{credentials::CredentialTransform, events::UserEventSink},
    utils::{
        page_util::{PaginationSink, update_page_headers},
        string_utils::valid_value,
    },
};

/// 사용자 관리 서비스
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(
///     Arc::new(InMemoryUserRepository::new()),
///     Arc::new(Sha256CredentialTransform::new(CredentialConfig::pepper())),
///     Arc::new(LogEventSink),
/// );
///
/// let created = service.create(request).await?;
/// let fetched = service.retrieve(&created.id).await?;
/// ```
pub struct UserService {
    store: Arc<dyn UserStore>,
    transform: Arc<dyn CredentialTransform>,
    events: Arc<dyn UserEventSink>,
}

impl UserService {
    pub fn new(
        store: Arc<dyn UserStore>,
        transform: Arc<dyn CredentialTransform>,
        events: Arc<dyn UserEventSink>,
    ) -> Self {
        Self {
            store,
            transform,
            events,
        }
    }

    fn not_found(&self, id: &str) -> AppError {
        self.events.publish(&UserEvent::NotFound { id: id.to_string() });
        AppError::NotFound(format!("user '{}' doesn't exist", id))
    }

    async fn existing(&self, id: &str) -> AppResult<User> {
        match self.store.find_by_id(id).await? {
            Some(user) => Ok(user),
            None => Err(self.not_found(id)),
        }
    }

    /// 캐시를 거치지 않은 현재 레코드. 수정과 삭제의 기준이 됩니다.
    async fn current(&self, id: &str) -> AppResult<User> {
        match self.store.find_by_id_uncached(id).await? {
            Some(user) => Ok(user),
            None => Err(self.not_found(id)),
        }
    }

    /// 새 사용자 생성
    ///
    /// 비밀번호를 변환한 뒤 새 ID와 현재 시각(`updated`)으로 레코드를 만들어 저장합니다.
    /// 요청 형식 검증은 호출자(핸들러)의 책임입니다.
    pub async fn create(&self, request: CreateUserRequest) -> AppResult<UserReadDto> {
        let credential = self.transform.transform(&request.password);

        let user = User::new(
            request.first_name,
            request.middle_name,
            request.last_name,
            request.email,
            request.phone_number,
            credential,
            request.role,
        );

        let saved = self.store.save(user).await?;
        self.events.publish(&UserEvent::Created { id: saved.id.clone() });

        Ok(UserReadDto::from(saved))
    }

    /// ID로 사용자 조회
    pub async fn retrieve(&self, id: &str) -> AppResult<UserReadDto> {
        let user = self.existing(id).await?;
        self.events.publish(&UserEvent::Retrieved { id: user.id.clone() });

        Ok(UserReadDto::from(user))
    }

    /// 이름 부분 일치 검색
    ///
    /// 이름(first/middle/last) 중 하나라도 `name`을 대소문자 구분 없이 포함하면 일치합니다.
    /// 결과가 없어도 에러가 아니며, 전체 개수와 페이지 수는 `sink`에 기록됩니다.
    pub async fn retrieve_by_name(
        &self,
        name: &str,
        request: &PageRequest,
        sink: &mut dyn PaginationSink,
    ) -> AppResult<Vec<UserReadDto>> {
        let query = UserQuery::FuzzyName(UserNameFuzzyFilter::new(name));
        self.search(&query, request, sink).await
    }

    /// 구조화된 필터 검색
    ///
    /// 아무 조건도 없는 필터는 전체 사용자를 페이지 단위로 반환합니다.
    pub async fn retrieve_by_filter(
        &self,
        filter: &UserFilter,
        request: &PageRequest,
        sink: &mut dyn PaginationSink,
    ) -> AppResult<Vec<UserReadDto>> {
        let query = UserQuery::Exact(filter.clone());
        self.search(&query, request, sink).await
    }

    async fn search(
        &self,
        query: &UserQuery,
        request: &PageRequest,
        sink: &mut dyn PaginationSink,
    ) -> AppResult<Vec<UserReadDto>> {
        let predicate = Predicate::from_query(query);
        let page = self.store.find_page(&predicate, request).await?.map(UserReadDto::from);

        update_page_headers(sink, &page);
        self.events.publish(&UserEvent::Found {
            count: page.content.len(),
            total: page.total_elements,
        });

        Ok(page.content)
    }

    /// 사용자 정보 수정
    ///
    /// 이름 세 필드와 전화번호만 수정 대상입니다. 요청 값이 비어 있거나
    /// 공백뿐이면 기존 값을 유지합니다. `updated`는 항상 현재 시각으로 갱신됩니다.
    /// 이메일, 역할, 자격 증명은 이 경로로 바뀌지 않습니다.
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> AppResult<UserReadDto> {
        let mut user = self.current(id).await?;
        user.updated = Some(User::timestamp_now());

        if let Some(first_name) = valid_value(request.first_name) {
            user.first_name = Some(first_name);
        }
        if let Some(middle_name) = valid_value(request.middle_name) {
            user.middle_name = Some(middle_name);
        }
        if let Some(last_name) = valid_value(request.last_name) {
            user.last_name = Some(last_name);
        }
        if let Some(phone_number) = valid_value(request.phone_number) {
            user.phone_number = Some(phone_number);
        }

        let saved = self.store.save(user).await?;
        self.events.publish(&UserEvent::Updated { id: saved.id.clone() });

        Ok(UserReadDto::from(saved))
    }

    /// 사용자 삭제
    ///
    /// 삭제 후 같은 ID를 다시 조회해 결과를 확인합니다.
    /// 레코드가 남아 있으면 에러 대신 `false`를 반환합니다.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let user = self.current(id).await?;

        self.store.delete_by_id(&user.id).await?;

        let removed = self.store.find_by_id_uncached(&user.id).await?.is_none();
        if removed {
            self.events.publish(&UserEvent::Deleted { id: user.id });
        } else {
            self.events.publish(&UserEvent::DeleteFailed { id: user.id });
        }

        Ok(removed)
    }

    /// 이메일과 비밀번호로 인증
    ///
    /// 같은 이메일의 레코드가 여러 개면 저장소 순서상 첫 번째를 사용합니다.
    /// 이메일이 없을 때와 비밀번호가 틀렸을 때 모두 같은
    /// [`AppError::InvalidCredentials`]를 반환합니다.
    pub async fn authenticate(&self, request: &UserAuthRequest) -> AppResult<()> {
        self.events.publish(&UserEvent::AuthenticationAttempt {
            email: request.email.clone(),
        });

        let predicate = Predicate::from_query(&UserQuery::Exact(UserFilter::by_emails([request.email.as_str()])));
        let user = self.store.find_all(&predicate).await?.into_iter().next();

        let Some(user) = user else {
            return Err(self.reject(AuthenticationFailure::UnknownEmail));
        };

        if !self.transform.matches(&request.password, &user.password) {
            return Err(self.reject(AuthenticationFailure::CredentialMismatch));
        }

        self.events.publish(&UserEvent::Authenticated { email: user.email });
        Ok(())
    }

    fn reject(&self, reason: AuthenticationFailure) -> AppError {
        self.events.publish(&UserEvent::AuthenticationRejected { reason });
        AppError::InvalidCredentials
    }
}
