use std::sync::{Arc, Mutex};

use lilo::{CommandSpec, Handler, OptionSpec, ParsedParams, Positional, ProgramSpec};

/// Every set of parameters a command was called with
pub type Calls = Arc<Mutex<Vec<ParsedParams>>>;

fn recording(calls: &Calls) -> impl Fn(&ParsedParams) -> anyhow::Result<()> + Send + Sync + 'static {
    let calls = Arc::clone(calls);

    move |params: &ParsedParams| {
        calls.lock().unwrap().push(params.clone());
        Ok(())
    }
}

/// A program with global options, and one command with an alias and a
/// required option.
pub fn test_cli(calls: &Calls) -> ProgramSpec {
    ProgramSpec::new("test", "description")
        .option(
            "g1",
            OptionSpec::valued("--global-string", Handler::string()).describe("foo"),
        )
        .option(
            "g2",
            OptionSpec::flag("--global-bool").describe("global bool option"),
        )
        .command(
            "foo",
            CommandSpec::new("foo command", recording(calls))
                .alias("f")
                .option(
                    "f_string",
                    OptionSpec::valued("--f-string", Handler::string()).describe("f string option"),
                )
                .option(
                    "f_string_required",
                    OptionSpec::valued("--f-string-required", Handler::string())
                        .describe("f string required option")
                        .required(),
                )
                .option(
                    "f_number",
                    OptionSpec::valued("--f-number", Handler::number()).describe("f number option"),
                ),
        )
        .unwrap()
}

/// A command with every kind of option the parser knows about
pub fn kitchen_sink(calls: &Calls) -> ProgramSpec {
    let option = |name: &str, handler: Handler| OptionSpec::valued(name, handler).describe("description");

    ProgramSpec::new("test", "test description")
        .command(
            "foo",
            CommandSpec::new("foo command", recording(calls))
                .option("f_string", option("--f-string", Handler::string()))
                .option(
                    "f_string_skipped",
                    option("--f-string-skipped", Handler::comma_separated()),
                )
                .option(
                    "f_string_array",
                    option("--f-string-array", Handler::comma_separated()),
                )
                .option(
                    "f_string_array_eq",
                    option("--f-string-array-eq", Handler::comma_separated()),
                )
                .option(
                    "f_string_required",
                    option("--f-string-required", Handler::string()).required(),
                )
                .option("f_number", option("--f-number", Handler::number())),
        )
        .unwrap()
}

const REALLY: &str = concat!(
    "A really really really really really really really really really really really ",
    "really really really really really really really really really really really ",
    "really really really log description.",
);

const UNBREAKABLE: &str =
    "Option_with_uncomfortably_long_and_unbreakable_description_that_should_have_benn_on_multiple_lines";

/// A program with a global flag, and two commands with their own flags, some
/// of them with descriptions that need wrapping.
pub fn foo() -> ProgramSpec {
    let noop = |_: &ParsedParams| Ok(());

    ProgramSpec::new("foo", "test cli description")
        .option(
            "globalFlag",
            OptionSpec::flag("--global-opt").describe("available for all subcommands"),
        )
        .command(
            "bar",
            CommandSpec::new("bar subcommand", noop).option(
                "barOnly",
                OptionSpec::flag("--bar-only").describe("only foo bar cmd"),
            ),
        )
        .unwrap()
        .command(
            "zoo",
            CommandSpec::new("zoo subcommand", noop)
                .option("optionOne", OptionSpec::flag("--option-one").describe(REALLY))
                .option(
                    "optionTwo",
                    OptionSpec::flag("--option-two-with-really-long-name").describe(
                        "A somewhat resonably long description with extra words here and there",
                    ),
                )
                .option(
                    "optionThree",
                    OptionSpec::flag("--option-three").describe(UNBREAKABLE),
                )
                .option(
                    "optionFour",
                    OptionSpec::flag("--option-four").describe(format!(
                        "{UNBREAKABLE} that also has a few spaces so only one line will stick out \
                         from the descriopton, you should not write your documentation like this."
                    )),
                ),
        )
        .unwrap()
}

/// A program whose only command takes a positional argument
pub fn positional(description: &str, positional: Positional) -> ProgramSpec {
    ProgramSpec::new("foo", description)
        .command(
            "bar",
            CommandSpec::new("the only command", |_| Ok(())).positional(positional),
        )
        .unwrap()
}
