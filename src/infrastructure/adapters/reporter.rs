//! 콘솔 리포터 포트 구현 어댑터.

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
/// `quiet`이면 핵심 결과(raw)만 출력하고 진행 상황/단계 안내는 생략한다.
#[derive(Default)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        if self.quiet {
            return;
        }
        println!();
        println!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        if self.quiet {
            return;
        }
        println!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!("[{:<12}] {}", scope, message);
    }

    fn detail(&self, text: &str) {
        if self.quiet {
            return;
        }
        println!("{}", text);
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}
