//! # MongoDB 사용자 리포지토리
//!
//! MongoDB를 주 저장소로 사용합니다. ID 조회 캐싱은
//! [`CachedUserRepository`](super::cached_repo::CachedUserRepository)가 앞단에서 담당합니다.
//!
//! ## 특징
//!
//! - **술어 변환**: [`Predicate`] → BSON 필터 문서 ([`to_document`])
//! - **데이터 무결성**: `email` 유니크 인덱스로 중복 이메일 차단
//!
//! ## 문서 구조
//!
//! ```json
//! {
//!   "_id": "7c0e3c1e-...",
//!   "first_name": "Ann",
//!   "middle_name": null,
//!   "last_name": "Lee",
//!   "email": "ann@example.com",
//!   "phone_number": "+1 555 0100",
//!   "password": "<transformed>",
//!   "role": "MEMBER",
//!   "updated": ISODate("2024-05-01T09:00:00Z")
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use futures_util::TryStreamExt;
use log::info;
use mongodb::{
    Collection, IndexModel,
    bson::{self, Bson, Document, doc},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};
use serde::{Deserialize, Serialize};

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::{Role, User},
    domain::models::{
        filter::DateFilter,
        page::{Page, PageRequest, SortDirection, SortOrder},
        user_field::UserField,
    },
    repositories::users::{UserStore, predicate::Predicate},
};

pub const USER_COLLECTION: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB에 저장되는 사용자 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
    email: String,
    phone_number: Option<String>,
    password: String,
    role: Role,
    updated: Option<bson::DateTime>,
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            middle_name: user.middle_name,
            last_name: user.last_name,
            email: user.email,
            phone_number: user.phone_number,
            password: user.password,
            role: user.role,
            updated: user
                .updated
                .map(|updated| bson::DateTime::from_millis(updated.timestamp_millis())),
        }
    }
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        Self {
            id: document.id,
            first_name: document.first_name,
            middle_name: document.middle_name,
            last_name: document.last_name,
            email: document.email,
            phone_number: document.phone_number,
            password: document.password,
            role: document.role,
            updated: document
                .updated
                .and_then(|updated| chrono::DateTime::<Utc>::from_timestamp_millis(updated.timestamp_millis())),
        }
    }
}

/// 문서 필드 이름
fn field_name(field: UserField) -> &'static str {
    match field {
        UserField::Id => "_id",
        UserField::FirstName => "first_name",
        UserField::MiddleName => "middle_name",
        UserField::LastName => "last_name",
        UserField::Email => "email",
        UserField::PhoneNumber => "phone_number",
        UserField::Role => "role",
        UserField::Updated => "updated",
    }
}

/// 정규식 메타문자를 이스케이프합니다.
fn escape_regex(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if "\\^$.|?*+()[]{}/-".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn date_bounds(range: &DateFilter) -> Document {
    let mut bounds = Document::new();
    let millis = |instant: &chrono::DateTime<Utc>| bson::DateTime::from_millis(instant.timestamp_millis());

    if let Some(start) = &range.start {
        let op = if range.start_inclusive { "$gte" } else { "$gt" };
        bounds.insert(op, millis(start));
    }
    if let Some(end) = &range.end {
        let op = if range.end_inclusive { "$lte" } else { "$lt" };
        bounds.insert(op, millis(end));
    }
    bounds
}

/// 술어를 MongoDB 필터 문서로 변환합니다.
pub fn to_document(predicate: &Predicate) -> Document {
    let mut document = Document::new();

    match predicate {
        Predicate::All => {}
        Predicate::And(clauses) => {
            let clauses: Vec<Document> = clauses.iter().map(to_document).collect();
            document.insert("$and", clauses);
        }
        Predicate::Or(clauses) => {
            let clauses: Vec<Document> = clauses.iter().map(to_document).collect();
            document.insert("$or", clauses);
        }
        Predicate::In(field, values) => {
            let values: Vec<Bson> = values.iter().cloned().map(Bson::String).collect();
            document.insert(field_name(*field), doc! { "$in": values });
        }
        Predicate::Contains(field, fragment) => {
            document.insert(
                field_name(*field),
                doc! { "$regex": escape_regex(fragment), "$options": "i" },
            );
        }
        Predicate::UpdatedWithin(range) => {
            document.insert(field_name(UserField::Updated), date_bounds(range));
        }
    }

    document
}

/// 정렬 기준을 MongoDB 정렬 문서로 변환합니다.
pub fn sort_document(sort: &[SortOrder]) -> Document {
    let mut document = Document::new();
    for order in sort {
        let direction = match order.direction {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        };
        document.insert(field_name(order.field), direction);
    }
    document
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn database_error(error: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(error.to_string())
}

/// 사용자 데이터 액세스 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(database);
/// repo.create_indexes().await?;
///
/// let saved = repo.save(user).await?;
/// let found = repo.find_by_id(&saved.id).await?;
/// ```
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.db.get_database().collection(USER_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. `email` 유니크 인덱스: 중복 이메일 방지 및 인증 조회 최적화
    /// 2. `updated` 내림차순 인덱스: 기간 필터와 최근순 정렬
    /// 3. 이름 필드 복합 인덱스: 이름 정렬과 정확 일치 필터
    ///
    /// 이미 중복 이메일이 있는 컬렉션에서는 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let updated_index = IndexModel::builder()
            .keys(doc! { "updated": -1 })
            .options(IndexOptions::builder().name("updated_desc".to_string()).build())
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "last_name": 1, "first_name": 1, "middle_name": 1 })
            .options(IndexOptions::builder().name("name_fields".to_string()).build())
            .build();

        self.collection()
            .create_indexes([email_index, updated_index, name_index])
            .await
            .map_err(database_error)?;

        info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let document = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(database_error)?;

        Ok(document.map(User::from))
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        self.collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(database_error)?;

        Ok(())
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let document = UserDocument::from(user.clone());

        self.collection()
            .replace_one(doc! { "_id": user.id.as_str() }, &document)
            .upsert(true)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(format!("email '{}' is already registered", user.email))
                } else {
                    database_error(e)
                }
            })?;

        Ok(user)
    }

    async fn find_page(&self, predicate: &Predicate, request: &PageRequest) -> AppResult<Page<User>> {
        let filter = to_document(predicate);
        let collection = self.collection();

        let total = collection
            .count_documents(filter.clone())
            .await
            .map_err(database_error)?;

        let limit = i64::try_from(request.size).unwrap_or(i64::MAX);
        let mut find = collection.find(filter).skip(request.offset()).limit(limit);
        if !request.sort.is_empty() {
            find = find.sort(sort_document(&request.sort));
        }

        let documents: Vec<UserDocument> = find
            .await
            .map_err(database_error)?
            .try_collect()
            .await
            .map_err(database_error)?;

        Ok(Page::new(
            documents.into_iter().map(User::from).collect(),
            request,
            total,
        ))
    }

    async fn find_all(&self, predicate: &Predicate) -> AppResult<Vec<User>> {
        let documents: Vec<UserDocument> = self
            .collection()
            .find(to_document(predicate))
            .await
            .map_err(database_error)?
            .try_collect()
            .await
            .map_err(database_error)?;

        Ok(documents.into_iter().map(User::from).collect())
    }
}
