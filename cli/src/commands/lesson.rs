use std::time::Instant;

use colored::*;
use tracing::info;
use tutor_common::config::Config;
use tutor_core::lesson::{self, Lesson};

use crate::terminal::print::{self, TerminalSink};

pub fn lesson(lesson: Lesson, cfg: &Config) -> anyhow::Result<()> {
    print::header(lesson.title(), cfg.quiet);
    lesson::run(lesson, cfg, &mut TerminalSink)?;
    print::fat_separator(cfg.quiet);
    Ok(())
}

pub fn all(cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    lesson::run_all(cfg, &mut TerminalSink, |entry| {
        if entry != Lesson::ALL[0] && cfg.quiet == 0 {
            print::print("");
        }
        print::header(entry.title(), cfg.quiet);
    })?;

    print::fat_separator(cfg.quiet);
    info!(
        "{} lessons finished in {}",
        Lesson::ALL.len().to_string().green().bold(),
        format!("{:.2}ms", start_time.elapsed().as_secs_f64() * 1000.0).yellow()
    );
    Ok(())
}
