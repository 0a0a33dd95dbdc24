//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 구성 요소 조립 과정을 단계별로 보여주는 출력 함수들입니다.
//! 로그 레벨과 무관하게 항상 표준 출력으로 보입니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    // 박스 내부 콘텐츠는 고정 너비 50칸
    let content_width = 50;
    let border = "═".repeat(content_width);

    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 조립이 끝난 뒤 요약을 출력합니다
pub fn print_wiring_summary(store_backend: &str, components: &[&str]) {
    println!();
    print_boxed_title("🎉 USER SERVICE WIRED");
    println!("   📦 User Store: {}", store_backend);
    println!("   🔧 Components: {}", components.join(", "));
    println!("   🚀 Total Components: {}", components.len());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_three_lines_of_equal_width() {
        let boxed = boxed_title("USER SERVICE");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("USER SERVICE"));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }
}
