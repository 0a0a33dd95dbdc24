//! # 문자열 유틸리티
//!
//! 부분 수정 요청에서 "값이 주어졌는지"를 판단하는 검사 함수들입니다.

/// 문자열이 유효한 값인지 확인
///
/// 비어 있거나 공백 문자만으로 이루어진 문자열은 유효하지 않습니다.
///
/// # 예제
/// ```rust,ignore
/// assert!(is_valid_string("Ann"));
/// assert!(!is_valid_string("  \t"));
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 유효한 값만 통과시킵니다.
///
/// `None`이거나 [`is_valid_string`]을 통과하지 못한 값은 `None`이 되며,
/// 통과한 값은 손대지 않고 그대로 돌려줍니다.
pub fn valid_value(value: Option<String>) -> Option<String> {
    value.filter(|v| is_valid_string(v))
}
