//! 터미널 카운트다운 타이머 어댑터.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use crossterm::cursor::MoveToColumn;
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::application::ports::StepTimer;
use crate::domain::timer::{TIMER_FINISHED, countdown_frames};

/// 1초마다 `Timer: MM:SS` 한 줄을 다시 그린다.
/// stdout이 TTY가 아니면 프레임을 줄 단위로 출력한다.
pub struct TerminalStepTimer {
    tick: Duration,
}

impl Default for TerminalStepTimer {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
        }
    }
}

#[async_trait]
impl StepTimer for TerminalStepTimer {
    async fn run(&self, minutes: f64) -> Result<()> {
        let interactive = io::stdout().is_terminal();
        run_countdown(&mut io::stdout(), minutes, self.tick, interactive).await
    }
}

async fn run_countdown<W: Write + Send>(
    out: &mut W,
    minutes: f64,
    tick: Duration,
    interactive: bool,
) -> Result<()> {
    let mut interval = tokio::time::interval(tick);

    for frame in countdown_frames(minutes) {
        interval.tick().await;
        write_line(out, &frame, interactive, false)?;
    }
    interval.tick().await;
    write_line(out, TIMER_FINISHED, interactive, true)?;
    Ok(())
}

fn write_line<W: Write>(out: &mut W, text: &str, interactive: bool, last: bool) -> Result<()> {
    if interactive {
        execute!(out, MoveToColumn(0), Clear(ClearType::CurrentLine), Print(text))?;
        if last {
            writeln!(out)?;
        }
    } else {
        writeln!(out, "{text}")?;
    }
    out.flush()?;
    Ok(())
}
