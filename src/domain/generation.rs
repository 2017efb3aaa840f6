//! 모델 호출 파라미터/응답 값 객체.

/// 모든 호출에 동일하게 적용되는 생성 파라미터.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_output_tokens: 1200,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
}

impl TokenUsage {
    /// 총합이 응답에 없으면 prompt + completion으로 보충한다.
    pub fn with_derived_total(mut self) -> Self {
        if self.total_tokens.is_none() {
            self.total_tokens = match (self.prompt_tokens, self.completion_tokens) {
                (Some(p), Some(c)) => Some(p + c),
                (Some(p), None) => Some(p),
                (None, Some(c)) => Some(c),
                (None, None) => None,
            };
        }
        self
    }

    /// 로그 표기용 문자열.
    pub fn summary(&self) -> String {
        format!(
            "prompt={}, completion={}, total={}",
            opt_num(self.prompt_tokens),
            opt_num(self.completion_tokens),
            opt_num(self.total_tokens)
        )
    }
}

/// 게이트웨이 응답(전체 텍스트 + best-effort 사용량).
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    pub content: String,
    pub usage: TokenUsage,
}

fn opt_num(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_derived_only_when_missing() {
        let derived = TokenUsage {
            prompt_tokens: Some(10),
            completion_tokens: Some(32),
            total_tokens: None,
        }
        .with_derived_total();
        assert_eq!(derived.total_tokens, Some(42));

        let reported = TokenUsage {
            prompt_tokens: Some(10),
            completion_tokens: Some(32),
            total_tokens: Some(50),
        }
        .with_derived_total();
        assert_eq!(reported.total_tokens, Some(50));
    }

    #[test]
    fn summary_marks_unknown_counts() {
        assert_eq!(
            TokenUsage::default().summary(),
            "prompt=n/a, completion=n/a, total=n/a"
        );
    }
}
