//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 부분 수정 값의 유효성 검사
//! - [`page_util`] - 페이지 메타데이터 싱크 (`x-total-count`, `x-page-count`)
//! - [`display_terminal`] - 기동 시 터미널 출력 포맷팅

pub mod string_utils;
pub mod page_util;
pub mod display_terminal;
