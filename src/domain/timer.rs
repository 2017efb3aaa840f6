//! 단계별 카운트다운 프레임 계산(표시 부수효과 없음).

/// 카운트다운 종료 문구.
pub const TIMER_FINISHED: &str = "Timer finished!";

/// 분 단위 소요 시간을 카운트다운 초로 바꾼다(소수점 이하 버림).
pub fn countdown_seconds(minutes: f64) -> u64 {
    if minutes.is_finite() && minutes > 0.0 {
        (minutes * 60.0) as u64
    } else {
        0
    }
}

/// `Timer: MM:SS` 형식 한 프레임.
pub fn format_frame(remaining_secs: u64) -> String {
    format!("Timer: {:02}:{:02}", remaining_secs / 60, remaining_secs % 60)
}

/// 전체 시간부터 0까지 1초 간격으로 표시할 프레임 목록.
pub fn countdown_frames(minutes: f64) -> impl Iterator<Item = String> {
    (0..=countdown_seconds(minutes)).rev().map(format_frame)
}

/// 타이머 시작 버튼/확인 문구(단계 원문 앞 30자만 사용).
pub fn timer_label(step_text: &str, minutes: f64) -> String {
    let head: String = step_text.chars().take(30).collect();
    format!("Start timer for {head}... ({minutes} min)")
}
