/*!
Running a whole command line against a [`ProgramSpec`]: picking the command,
printing help when it's asked for, and calling the command with its parsed
parameters.
 */

use std::{
    ffi::OsString,
    io::{self, Write},
};

use tracing::{debug, trace};

use crate::{
    errors::ValidationError,
    help::Help,
    parse::parse,
    spec::{CommandSpec, ProgramSpec},
};

/// What happened during a successful [`Cli::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A command was called, and returned successfully. This is the
    /// command's registered name, even if it was invoked through an alias.
    Ran { command: String },

    /// Help was requested, and printed
    Help,
}

/// The ways a [`Cli::run`] can fail
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The command itself failed
    #[error("command {command} failed")]
    Command {
        command: String,

        #[source]
        source: anyhow::Error,
    },

    /// Help text couldn't be printed
    #[error("error writing help text")]
    Io(#[from] io::Error),

    /// One of the process's arguments wasn't valid UTF-8
    #[error("argument {0:?} is not valid UTF-8")]
    NonUtf8Argument(OsString),
}

/// Convert raw process arguments to strings, failing on the first one that
/// isn't valid UTF-8
fn utf8_args(args: impl IntoIterator<Item = OsString>) -> Result<Vec<String>, Error> {
    args.into_iter()
        .map(|arg| arg.into_string().map_err(Error::NonUtf8Argument))
        .collect()
}

/// Whether the user asked for help anywhere in these arguments
fn wants_help<'a>(args: impl IntoIterator<Item = &'a str>) -> bool {
    args.into_iter().any(|arg| arg == "--help" || arg == "-h")
}

/// A program, ready to run command lines.
#[derive(Debug, Clone)]
pub struct Cli {
    program: ProgramSpec,
}

impl Cli {
    #[must_use]
    pub fn new(program: ProgramSpec) -> Self {
        Self { program }
    }

    #[must_use]
    pub fn spec(&self) -> &ProgramSpec {
        &self.program
    }

    /// Run the command line in the process's arguments (skipping the
    /// program name), printing help to stdout.
    pub fn run_from_env(&self) -> Result<Outcome, Error> {
        let args = utf8_args(std::env::args_os().skip(1))?;
        self.run(args.iter().map(String::as_str))
    }

    /// Run a command line (without the program name), printing help to stdout.
    pub fn run<'a>(&self, args: impl IntoIterator<Item = &'a str>) -> Result<Outcome, Error> {
        let stdout = io::stdout();
        self.run_with(args, &mut stdout.lock())
    }

    /**
    Run a command line (without the program name), printing help to `out`.

    The first argument names the command, either by its name or one of its
    aliases. If it doesn't name any command, the program's help is printed;
    that's a success if `--help` or `-h` appeared anywhere, and an
    [`UnknownCommand`][ValidationError::UnknownCommand] error otherwise. If
    `--help` or `-h` appears after the command, the command's help is printed
    instead of running it.
    */
    pub fn run_with<'a>(
        &self,
        args: impl IntoIterator<Item = &'a str>,
        out: &mut impl Write,
    ) -> Result<Outcome, Error> {
        let args: Vec<&str> = args.into_iter().collect();
        let program = &self.program;

        let resolved = args
            .split_first()
            .and_then(|(&wanted, rest)| Some((wanted, program.resolve_command(wanted)?, rest)));

        let Some((wanted, (name, command), rest)) = resolved else {
            debug!(command = ?args.first(), "no command matched");
            self.print_help(out, None)?;

            return match wants_help(args.iter().copied()) {
                true => Ok(Outcome::Help),
                false => Err(ValidationError::UnknownCommand {
                    known: program.commands().map(|(name, _)| name.to_owned()).collect(),
                }
                .into()),
            };
        };

        if wanted != name {
            debug!(alias = wanted, command = name, "resolved command alias");
        }

        if wants_help(rest.iter().copied()) {
            debug!(command = name, "help requested");
            self.print_help(out, Some(name))?;
            return Ok(Outcome::Help);
        }

        self.call(name, command, rest)?;
        Ok(Outcome::Ran {
            command: name.to_owned(),
        })
    }

    fn call(&self, name: &str, command: &CommandSpec, args: &[&str]) -> Result<(), Error> {
        let options = self.program.options_for(command);
        let params = parse(args.iter().copied(), &options)?;
        trace!(command = name, ?params, "parsed command line");

        if let Some(positional) = command.positional_argument() {
            if params.positionals().is_empty() {
                return Err(ValidationError::MissingPositional {
                    placeholder: positional.placeholder().to_string(),
                }
                .into());
            }
        }

        debug!(command = name, "running command");
        command.invoke(&params).map_err(|source| Error::Command {
            command: name.to_owned(),
            source,
        })
    }

    fn print_help(&self, out: &mut impl Write, command: Option<&str>) -> io::Result<()> {
        let help = Help::new(self.program.name(), command, &self.program);
        writeln!(out, "{help}")
    }
}
