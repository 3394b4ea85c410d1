use clap::{Parser, Subcommand};

use crate::commands::parse::ParseCommand;
use crate::commands::sort::SortCommand;
use crate::commands::validate::ValidateCommand;
use crate::output::{parse_output, Output};

pub mod parse;
pub mod sort;
pub mod validate;

#[derive(Debug, Parser)]
#[command(name = "semver", version, about = "Parse and validate semantic versions")]
pub struct Opt {
    #[arg(
        long,
        help = "Prints a verbose output during the program execution",
        global = true
    )]
    pub debug: bool,

    #[arg(
        long,
        short,
        env = "SEMVER_OUTPUT",
        default_value = "text",
        value_parser = parse_output,
        help = "How a command output should be rendered",
        global = true
    )]
    pub output: Output,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[remain::sorted]
#[derive(Debug, Subcommand)]
pub enum Commands {
    Parse(ParseCommand),
    Sort(SortCommand),
    Validate(ValidateCommand),
}

/// What a command rendered and whether every input was accepted.
#[derive(Debug)]
pub struct CommandOutput {
    pub body: String,
    pub success: bool,
}

pub trait Command {
    fn execute(&self, output: Output) -> anyhow::Result<CommandOutput>;
}

impl Command for Commands {
    fn execute(&self, output: Output) -> anyhow::Result<CommandOutput> {
        match self {
            Commands::Parse(cmd) => cmd.execute(output),
            Commands::Sort(cmd) => cmd.execute(output),
            Commands::Validate(cmd) => cmd.execute(output),
        }
    }
}
