//! 사용자 확인 입력 포트 구현 어댑터.

use std::io::{self, Write};

use anyhow::Result;

use crate::application::ports::UserConfirmer;

/// stdin으로 yes/y 확인을 받는 어댑터.
pub struct StdinConfirmer;

impl UserConfirmer for StdinConfirmer {
    fn confirm(&self, message: &str) -> Result<bool> {
        eprint!("{message} (y/yes): ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(is_yes(&input))
    }
}

/// 항상 승인하는 무조건 확인 어댑터(`--yes` 실행용).
pub struct AutoConfirmer;

impl UserConfirmer for AutoConfirmer {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(true)
    }
}

fn is_yes(input: &str) -> bool {
    let answer = input.trim().to_ascii_lowercase();
    answer == "y" || answer == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_y_or_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }
}
