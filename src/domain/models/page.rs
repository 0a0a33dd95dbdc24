//! 페이지 요청과 페이지 결과
//!
//! 페이지 번호는 0부터 시작합니다. 전체 페이지 수는
//! `ceil(total_elements / size)`로 계산합니다.

use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::user_field::UserField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// 단일 정렬 기준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: UserField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(field: UserField) -> Self {
        Self { field, direction: SortDirection::Asc }
    }

    pub fn desc(field: UserField) -> Self {
        Self { field, direction: SortDirection::Desc }
    }

    /// `sort` 쿼리 파라미터를 해석합니다.
    ///
    /// 형식은 `field[,asc|desc]`이며 여러 기준은 `;`로 구분합니다.
    ///
    /// ```rust,ignore
    /// let orders = SortOrder::parse_list("lastName,desc;firstName")?;
    /// ```
    pub fn parse_list(raw: &str) -> AppResult<Vec<SortOrder>> {
        raw.split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Self::parse)
            .collect()
    }

    fn parse(raw: &str) -> AppResult<SortOrder> {
        let mut parts = raw.split(',').map(str::trim);
        let field = UserField::parse(parts.next().unwrap_or_default())?;

        let direction = match parts.next().map(str::to_lowercase).as_deref() {
            None | Some("") | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(AppError::ValidationError(format!(
                    "unknown sort direction '{}'",
                    other
                )));
            }
        };

        if parts.next().is_some() {
            return Err(AppError::ValidationError(format!("malformed sort order '{}'", raw)));
        }

        Ok(SortOrder { field, direction })
    }
}

/// 건너뛸 수 있는 최대 요소 수 (MongoDB `skip`의 64비트 부호 있는 정수 범위)
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// 페이지 요청 (페이지 번호, 크기, 정렬)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    /// 정렬 없는 페이지 요청을 만듭니다.
    ///
    /// 크기는 1 이상이어야 하고, 오프셋(`page * size`)은 [`MAX_OFFSET`]을 넘을 수 없습니다.
    pub fn of(page: u64, size: u64) -> AppResult<Self> {
        if size == 0 {
            return Err(AppError::ValidationError("page size must be at least 1".to_string()));
        }
        if page.checked_mul(size).is_none_or(|offset| offset > MAX_OFFSET) {
            return Err(AppError::ValidationError(format!("page {} is out of range", page)));
        }

        Ok(Self { page, size, sort: Vec::new() })
    }

    pub fn with_sort(mut self, sort: Vec<SortOrder>) -> Self {
        self.sort = sort;
        self
    }

    /// 건너뛸 요소 수
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// 페이지 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.size)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
