//! # Domain Models Module
//!
//! 엔티티와 구별되는 도메인 값 객체들을 정의합니다.
//!
//! ## Entities vs Models
//!
//! - **Entities** (`../entities/`): 고유 ID와 생명주기를 가지는 영속 객체 (`User`)
//! - **Models** (`./`): 검색 조건, 페이지, 이벤트처럼 값 자체가 의미를 가지는 객체
//!
//! ## 구성
//!
//! | 모듈 | 내용 |
//! |------|------|
//! | [`filter`] | `UserFilter`, `DateFilter`, `UserNameFuzzyFilter`, `UserQuery` |
//! | [`page`] | `PageRequest`, `SortOrder`, `Page<T>` |
//! | [`user_field`] | 필터/정렬에서 참조하는 필드 식별자 |
//! | [`events`] | 서비스가 이벤트 싱크로 발행하는 `UserEvent` |

pub mod events;
pub mod filter;
pub mod page;
pub mod user_field;

pub use events::*;
pub use filter::*;
pub use page::*;
pub use user_field::*;
