//! 콘솔 출력용 조리 단계 렌더링 모듈.

use crate::domain::recipe::StepRecord;

/// 단계별 원문/이미지/타이머 안내를 번호 목록으로 만든다.
pub fn render_steps_markdown(steps: &[StepRecord]) -> String {
    let mut out = String::new();
    for (idx, step) in steps.iter().enumerate() {
        out.push_str(&format!("{}. **{}**\n", idx + 1, collapse_lines(&step.text)));
        out.push_str(&format!("   - Step Visual: {}\n", step.image.url()));
        if step.is_timed() {
            out.push_str(&format!("   - Timer: {} min\n", format_minutes(step.minutes)));
        }
    }
    out
}

/// 여러 줄에 걸친 단계 원문을 한 줄로 합친다.
fn collapse_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{minutes:.0}")
    } else {
        format!("{minutes:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::StepImage;

    fn step(text: &str, minutes: f64, image: StepImage) -> StepRecord {
        StepRecord {
            text: text.to_string(),
            minutes,
            image,
        }
    }

    #[test]
    fn timed_and_untimed_steps() {
        let rendered = render_steps_markdown(&[
            step("Step 1: Preheat oven (2 minutes)", 2.0, StepImage::Oven),
            step("Step 2: Let rest (overnight)", 0.0, StepImage::Generic),
        ]);

        assert_eq!(
            rendered,
            "1. **Step 1: Preheat oven (2 minutes)**\n   \
             - Step Visual: https://images.unsplash.com/photo-1600585154340-be6161a56a0c\n   \
             - Timer: 2 min\n\
             2. **Step 2: Let rest (overnight)**\n   \
             - Step Visual: https://images.unsplash.com/photo-1546069901-ba9599a7e63c\n"
        );
    }

    #[test]
    fn multi_line_step_is_collapsed() {
        let rendered = render_steps_markdown(&[step(
            "Step 1: Knead\n  until smooth (30 seconds)",
            0.5,
            StepImage::Generic,
        )]);
        assert!(rendered.starts_with("1. **Step 1: Knead until smooth (30 seconds)**\n"));
        assert!(rendered.contains("Timer: 0.50 min"));
    }
}
