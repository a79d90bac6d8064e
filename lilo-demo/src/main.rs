mod error;

use lazy_format::lazy_format;
use lilo::{
    Cli, CommandSpec, Handler, OptionSpec, Outcome, ParsedParams, Positional, ProgramSpec,
    ValidationError,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::DemoError;

const MAX_TIMES: i64 = 10;

fn greet(params: &ParsedParams) -> anyhow::Result<()> {
    let greeting = params.string("greeting").unwrap_or("Hello");
    let times = params.integer("times").unwrap_or(1);

    if !(1..=MAX_TIMES).contains(&times) {
        return Err(DemoError::Times {
            times,
            max: MAX_TIMES,
        }
        .into());
    }

    for name in params.positionals() {
        let line = lazy_format!("{greeting}, {name}!");
        let line = match params.flag("shout") {
            true => line.to_string().to_uppercase(),
            false => line.to_string(),
        };

        for _ in 0..times {
            println!("{line}");
        }
    }

    if params.flag("verbose") {
        eprintln!("greeted {} people", params.positionals().len());
    }

    Ok(())
}

fn sum(params: &ParsedParams) -> anyhow::Result<()> {
    let numbers = params
        .list("numbers")
        .iter()
        .map(|item| {
            item.trim()
                .parse::<f64>()
                .map_err(|source| DemoError::NotANumber {
                    item: item.clone(),
                    source,
                })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    if numbers.is_empty() {
        return Err(DemoError::NoNumbers.into());
    }

    info!(count = numbers.len(), "adding numbers");
    let total: f64 = numbers.iter().sum();

    match params.flag("verbose") {
        true => println!(
            "{}",
            lazy_format!("{total} ({} numbers)", numbers.len())
        ),
        false => println!("{total}"),
    }

    Ok(())
}

fn program() -> Result<ProgramSpec, ValidationError> {
    ProgramSpec::new("lilo-demo", "A couple of small commands, to show off lilo")
        .option(
            "verbose",
            OptionSpec::flag("--verbose")
                .name("-v")
                .describe("Print a little more about what happened"),
        )
        .command(
            "greet",
            CommandSpec::new("Greet everyone named on the command line", greet)
                .alias("hi")
                .positional(Positional::many("name"))
                .option(
                    "greeting",
                    OptionSpec::valued("--greeting", Handler::string())
                        .name("-g")
                        .describe("The greeting to use, instead of Hello"),
                )
                .option(
                    "times",
                    OptionSpec::valued("--times", Handler::integer())
                        .describe("How many times to greet each person"),
                )
                .option(
                    "shout",
                    OptionSpec::flag("--shout").describe("Greet in all caps"),
                ),
        )?
        .command(
            "sum",
            CommandSpec::new("Add up some numbers", sum)
                .alias("add")
                .option(
                    "numbers",
                    OptionSpec::valued("--numbers", Handler::comma_separated())
                        .name("-n")
                        .describe(
                            "Comma separated numbers to add up. Can be given more than once, in \
                             which case every list is added to the total.",
                        )
                        .required(),
                ),
        )
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::new(program()?);

    match cli.run_from_env()? {
        Outcome::Ran { command } => debug!(%command, "finished"),
        Outcome::Help => debug!("printed help"),
    }

    Ok(())
}
