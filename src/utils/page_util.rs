//! # 페이지 메타데이터 출력
//!
//! 페이지 검색 결과의 전체 요소 수와 전체 페이지 수를 응답 메타데이터로
//! 내보내는 싱크입니다. HTTP 응답에서는 다음 헤더로 기록됩니다.
//!
//! | 헤더 | 값 |
//! |------|----|
//! | `x-total-count` | 조건에 맞는 전체 사용자 수 |
//! | `x-page-count` | 전체 페이지 수 |

use actix_web::HttpResponseBuilder;

use crate::domain::models::page::Page;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
pub const PAGE_COUNT_HEADER: &str = "x-page-count";

/// 페이지 메타데이터를 받는 싱크
pub trait PaginationSink {
    fn write_page_metadata(&mut self, total_elements: u64, total_pages: u64);
}

/// 페이지 결과의 메타데이터를 싱크에 기록합니다.
pub fn update_page_headers<T>(sink: &mut dyn PaginationSink, page: &Page<T>) {
    sink.write_page_metadata(page.total_elements, page.total_pages());
}

impl PaginationSink for HttpResponseBuilder {
    fn write_page_metadata(&mut self, total_elements: u64, total_pages: u64) {
        self.insert_header((TOTAL_COUNT_HEADER, total_elements.to_string()));
        self.insert_header((PAGE_COUNT_HEADER, total_pages.to_string()));
    }
}

/// HTTP 응답이 없는 호출자를 위한 값 싱크
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageHeaders {
    pub total_elements: u64,
    pub total_pages: u64,
}

impl PaginationSink for PageHeaders {
    fn write_page_metadata(&mut self, total_elements: u64, total_pages: u64) {
        self.total_elements = total_elements;
        self.total_pages = total_pages;
    }
}
