use clap::Parser;
use std::num::NonZeroUsize;

#[derive(Debug, Parser)]
#[command(version, about, author)]
pub struct Argg {
    /// Execute one invocation per batch concurrently. e.g. `ls | argg -P -n 1 -- echo`
    #[arg(short = 'P', long)]
    pub parallel: bool,

    /// Take at most N piped args per invocation.
    #[arg(short, long)]
    pub number: Option<NonZeroUsize>,

    /// Write log into $(PWD)/logs.
    #[arg(short, long)]
    pub debug: bool,

    /// The command to run, plus any fixed leading arguments.
    #[arg(required = true, trailing_var_arg = true)]
    pub command: Vec<String>,
}

impl Argg {
    pub fn batch_size(&self) -> usize {
        self.number.map(NonZeroUsize::get).unwrap_or(usize::MAX)
    }

    pub fn template(&self) -> CommandTemplate {
        // clap guarantees at least one positional
        CommandTemplate {
            program: self.command[0].clone(),
            fixed_args: self.command[1..].to_vec(),
        }
    }
}

/// The fixed part of every invocation: executable name plus any leading
/// arguments supplied on the invoking command line.
#[derive(Debug, Clone)]
pub struct CommandTemplate {
    program: String,
    fixed_args: Vec<String>,
}

impl CommandTemplate {
    pub fn program(&self) -> &str {
        self.program.as_str()
    }

    /// Produces the final argument vector for one batch: the template's
    /// fixed arguments followed by the batch. The program name itself is
    /// never part of the result.
    pub fn merge(&self, batch: Vec<String>) -> Vec<String> {
        if self.fixed_args.is_empty() {
            batch
        } else {
            self.fixed_args.iter().cloned().chain(batch).collect()
        }
    }
}
