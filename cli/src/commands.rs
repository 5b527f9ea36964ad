pub mod lesson;
pub mod list;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tutor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Runnable lessons on dispatch, initialization order and modern syntax.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide headers and separators (lesson output is always shown)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show diagnostic logging; repeat for more detail
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every available lesson
    #[command(alias = "ls")]
    List,
    /// An abstract root can only be reached through its variants
    #[command(alias = "abstract")]
    AbstractClasses,
    /// Ancestors are initialized before their descendants
    #[command(alias = "ctor")]
    ConstructorExecution,
    /// Calls resolve by the bound instance, not the handle type
    #[command(alias = "override")]
    MethodOverriding,
    /// Switch expressions, text blocks and immutable records
    #[command(alias = "modern")]
    ModernSyntax {
        /// File the text-block payload is written to [default: demo.txt]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run every lesson in order
    All {
        /// File the text-block payload is written to [default: demo.txt]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
