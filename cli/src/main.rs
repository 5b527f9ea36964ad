mod commands;
mod terminal;

use commands::{CommandLine, Commands, lesson, list};
use terminal::{logging, print};
use tutor_common::config::Config;
use tutor_core::lesson::Lesson;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose)?;
    print::initialize(commands.no_color);

    let mut cfg = Config {
        quiet: commands.quiet,
        ..Config::default()
    };

    match commands.command {
        Commands::List => list::list(&cfg),
        Commands::AbstractClasses => lesson::lesson(Lesson::AbstractClasses, &cfg),
        Commands::ConstructorExecution => lesson::lesson(Lesson::ConstructorExecution, &cfg),
        Commands::MethodOverriding => lesson::lesson(Lesson::MethodOverriding, &cfg),
        Commands::ModernSyntax { output } => {
            if let Some(path) = output {
                cfg.text_block_path = path;
            }
            lesson::lesson(Lesson::ModernSyntax, &cfg)
        }
        Commands::All { output } => {
            if let Some(path) = output {
                cfg.text_block_path = path;
            }
            lesson::all(&cfg)
        }
    }
}
