/*!
A small, declarative command line parser for programs with subcommands.

A program is described once, up front, as a [`ProgramSpec`]: a name, a
description, options shared by every command, and the commands themselves.
Each command has its own options, maybe some aliases and a positional
argument, and a function that's called with the [`ParsedParams`]. From that
one description, `lilo` can:

- [`parse`][parse::parse] a command line into a record of typed values,
  folding repeated options through their [`Handler`] and checking that
  required options are present;
- [`render`][help::render] aligned, word-wrapped help text;
- [`run`][Cli::run] a whole command line, picking the command, printing help
  when asked for it, and calling the command.

```no_run
use lilo::{Cli, CommandSpec, Handler, OptionSpec, Positional, ProgramSpec};

let program = ProgramSpec::new("greeter", "Greets people")
    .option("verbose", OptionSpec::flag("--verbose").name("-v"))
    .command(
        "greet",
        CommandSpec::new("Greet someone", |params| {
            for name in params.positionals() {
                println!("{}, {name}!", params.string("greeting").unwrap_or("Hello"));
            }
            Ok(())
        })
        .positional(Positional::many("name"))
        .option(
            "greeting",
            OptionSpec::valued("--greeting", Handler::string()).describe("How to greet"),
        ),
    )?;

Cli::new(program).run_from_env()?;
# Ok::<(), anyhow::Error>(())
```
*/

pub mod cli;
pub mod errors;
pub mod help;
pub mod params;
pub mod parse;
pub mod spec;
pub mod value;
mod wrap;

pub use cli::{Cli, Outcome};
pub use errors::ValidationError;
pub use params::ParsedParams;
pub use spec::{CommandSpec, OptionKind, OptionSet, OptionSpec, Positional, ProgramSpec};
pub use value::{Handler, Value};
pub use wrap::{WRAP_WIDTH, wrap};
