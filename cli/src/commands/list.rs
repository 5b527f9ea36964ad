use colored::*;
use tutor_common::config::Config;
use tutor_core::lesson::Lesson;

use crate::terminal::{colors, print};

pub fn list(cfg: &Config) -> anyhow::Result<()> {
    print::header("available lessons", cfg.quiet);

    for (idx, lesson) in Lesson::ALL.into_iter().enumerate() {
        print::tree_head(idx, lesson.title());
        print::as_tree_one_level(&[
            ("Command", command_name(lesson).color(colors::ACCENT)),
            ("About", lesson.summary().normal()),
        ]);
    }

    if cfg.quiet == 0 {
        print::fat_separator(cfg.quiet);
        let total: String = format!("{} lessons", Lesson::ALL.len());
        print::centerln(&total.color(colors::TEXT_DEFAULT).to_string());
    }
    Ok(())
}

fn command_name(lesson: Lesson) -> &'static str {
    match lesson {
        Lesson::AbstractClasses => "abstract-classes",
        Lesson::ConstructorExecution => "constructor-execution",
        Lesson::MethodOverriding => "method-overriding",
        Lesson::ModernSyntax => "modern-syntax",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandLine;
    use clap::Parser;

    #[test]
    fn listed_commands_parse() {
        for lesson in Lesson::ALL {
            let parsed = CommandLine::try_parse_from(["tutor", command_name(lesson)]);
            assert!(parsed.is_ok(), "'{}' is not a valid subcommand", command_name(lesson));
        }
    }
}
