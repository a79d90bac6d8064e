/*!
Declarative descriptions of a program: its global options, its commands, and
the options each command accepts. A [`ProgramSpec`] is built once at startup
and is read-only afterwards; it's the input to both
[`parse`][crate::parse::parse] and [`render`][crate::help::render].
 */

use std::{fmt, sync::Arc};

use lazy_format::lazy_format;
use lilo_parser::Name;

use crate::{errors::ValidationError, params::ParsedParams, value::Handler};

/// Whether an option must appear on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    #[default]
    Optional,
    Mandatory,
}

/// Whether a positional argument is a single item or a list of them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    Single,
    Multiple,
}

/// What an option does when it appears on the command line
#[derive(Debug, Clone)]
pub enum OptionKind {
    /// A boolean flag, like `--verbose`. It never takes a value, and it is
    /// `true` when present.
    Flag,

    /// An option that takes a value, like `--output file.txt` or
    /// `--output=file.txt`. The value is passed through the handler.
    Valued(Handler),
}

/**
A single option. It's identified on the command line by one or more names;
the first one is canonical, and is used in error messages and help text.

```
use lilo::{spec::OptionSpec, value::Handler};

let verbose = OptionSpec::flag("--verbose")
    .name("-v")
    .describe("Print more");

let output = OptionSpec::valued("--output", Handler::string())
    .name("-o")
    .describe("Where to write the result")
    .required();

assert_eq!(verbose.canonical_name(), "--verbose");
assert!(output.is_required());
```
*/
#[derive(Debug, Clone)]
pub struct OptionSpec {
    names: Vec<String>,
    kind: OptionKind,
    description: String,
    requirement: Requirement,
}

impl OptionSpec {
    pub fn new(name: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            names: Vec::from([name.into()]),
            kind,
            description: String::new(),
            requirement: Requirement::Optional,
        }
    }

    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, OptionKind::Flag)
    }

    pub fn valued(name: impl Into<String>, handler: Handler) -> Self {
        Self::new(name, OptionKind::Valued(handler))
    }

    /// Add another name for this option
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.requirement = Requirement::Mandatory;
        self
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn canonical_name(&self) -> &str {
        // There is always at least one name, see `new`
        &self.names[0]
    }

    #[must_use]
    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    #[must_use]
    pub fn is_flag(&self) -> bool {
        matches!(self.kind, OptionKind::Flag)
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Mandatory
    }
}

/**
An ordered set of options, keyed by their logical parameter name (the key
they get in [`ParsedParams`]).

Order matters: it's the order options appear in help output, the order in
which their names are tried against each token, and the order in which
missing required options are reported.
*/
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    options: Vec<(String, OptionSpec)>,
}

impl OptionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option. An option already registered under the same key is
    /// replaced, keeping its position.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, option: OptionSpec) -> Self {
        self.insert(key, option);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, option: OptionSpec) {
        let key = key.into();

        match self.options.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = option,
            None => self.options.push((key, option)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionSpec> {
        self.options
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, option)| option)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &OptionSpec)> + Clone {
        self.options
            .iter()
            .map(|(key, option)| (key.as_str(), option))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /**
    Combine global options with a command's options. Globals come first, in
    their own order; a command option with the same key as a global replaces
    it in place. The command's remaining options follow in their order.
    */
    #[must_use]
    pub fn merged(&self, overrides: &OptionSet) -> OptionSet {
        overrides
            .options
            .iter()
            .fold(self.clone(), |merged, (key, option)| {
                merged.with(key.as_str(), option.clone())
            })
    }

    /// Build the table of names the low-level parser matches tokens against.
    /// Every name of every option, in order. Fails if two options share a
    /// name.
    pub(crate) fn name_table(&self) -> Result<Vec<Name<'_>>, ValidationError> {
        let mut table: Vec<Name<'_>> = Vec::new();

        for (index, (key, option)) in self.options.iter().enumerate() {
            for tag in option.names() {
                if let Some(existing) = table
                    .iter()
                    .find(|name| name.tag == tag.as_str() && name.option != index)
                {
                    return Err(ValidationError::DuplicateName {
                        name: tag.clone(),
                        first: self.options[existing.option].0.clone(),
                        second: key.clone(),
                    });
                }

                table.push(Name::new(tag, index));
            }
        }

        Ok(table)
    }

    pub(crate) fn by_index(&self, index: usize) -> (&str, &OptionSpec) {
        let (key, option) = &self.options[index];
        (key.as_str(), option)
    }
}

/**
The positional argument a command expects, as shown in help: `<NAME>` for a
single item, `<NAME>...` for one or more.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positional {
    name: String,
    repetition: Repetition,
}

impl Positional {
    pub fn one(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repetition: Repetition::Single,
        }
    }

    pub fn many(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repetition: Repetition::Multiple,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    /// The placeholder for this argument, like `<ITEM>` or `<ITEM>...`
    pub fn placeholder(&self) -> impl fmt::Display + '_ {
        let name = self.name.to_uppercase();

        lazy_format!(match (self.repetition) {
            Repetition::Single => "<{name}>",
            Repetition::Multiple => "<{name}>...",
        })
    }
}

type CommandFn = dyn Fn(&ParsedParams) -> anyhow::Result<()> + Send + Sync;

/// A subcommand: its description, options, aliases, positional argument, and
/// the function called with the parsed parameters.
#[derive(Clone)]
pub struct CommandSpec {
    description: String,
    options: OptionSet,
    aliases: Vec<String>,
    positional: Option<Positional>,
    handler: Arc<CommandFn>,
}

impl CommandSpec {
    pub fn new<F>(description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&ParsedParams) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            options: OptionSet::new(),
            aliases: Vec::new(),
            positional: None,
            handler: Arc::new(handler),
        }
    }

    #[must_use]
    pub fn option(mut self, key: impl Into<String>, option: OptionSpec) -> Self {
        self.options.insert(key, option);
        self
    }

    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    #[must_use]
    pub fn positional(mut self, positional: Positional) -> Self {
        self.positional = Some(positional);
        self
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    #[must_use]
    pub fn positional_argument(&self) -> Option<&Positional> {
        self.positional.as_ref()
    }

    /// Call this command's handler
    pub fn invoke(&self, params: &ParsedParams) -> anyhow::Result<()> {
        (self.handler)(params)
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("description", &self.description)
            .field("options", &self.options)
            .field("aliases", &self.aliases)
            .field("positional", &self.positional)
            .finish_non_exhaustive()
    }
}

/**
A whole program: its name and description, options shared by every command,
and the commands themselves, in registration order.

```
use lilo::{
    spec::{CommandSpec, OptionSpec, Positional, ProgramSpec},
    value::Handler,
};

let program = ProgramSpec::new("files", "Do things to files")
    .option("verbose", OptionSpec::flag("--verbose").name("-v"))
    .command(
        "copy",
        CommandSpec::new("Copy files", |_params| Ok(()))
            .alias("cp")
            .positional(Positional::many("file"))
            .option("into", OptionSpec::valued("--into", Handler::string()).required()),
    )?;

assert_eq!(program.resolve_command("cp").map(|(name, _)| name), Some("copy"));
# Ok::<(), lilo::errors::ValidationError>(())
```
*/
#[derive(Debug, Clone)]
pub struct ProgramSpec {
    name: String,
    description: String,
    options: OptionSet,
    commands: Vec<(String, CommandSpec)>,
}

impl ProgramSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: OptionSet::new(),
            commands: Vec::new(),
        }
    }

    /// Add a global option, available to every command
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, option: OptionSpec) -> Self {
        self.options.insert(key, option);
        self
    }

    /// Register a command. A command registered again under the same name
    /// replaces the earlier one, keeping its position.
    pub fn command(
        mut self,
        name: impl Into<String>,
        command: CommandSpec,
    ) -> Result<Self, ValidationError> {
        let name = name.into();

        if !is_valid_command_name(&name) {
            return Err(ValidationError::InvalidCommandName { name });
        }

        match self.commands.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = command,
            None => self.commands.push((name, command)),
        }

        Ok(self)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn commands(&self) -> impl ExactSizeIterator<Item = (&str, &CommandSpec)> + Clone {
        self.commands
            .iter()
            .map(|(name, command)| (name.as_str(), command))
    }

    /// Look up a command by its exact registered name
    #[must_use]
    pub fn command_spec(&self, name: &str) -> Option<&CommandSpec> {
        self.commands
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, command)| command)
    }

    /// Find the command `wanted` refers to, either by name or by one of its
    /// aliases. Names take precedence over aliases; among aliases, the
    /// command registered first wins. Returns the canonical name.
    #[must_use]
    pub fn resolve_command(&self, wanted: &str) -> Option<(&str, &CommandSpec)> {
        self.commands()
            .find(|&(name, _)| name == wanted)
            .or_else(|| {
                self.commands()
                    .find(|(_, command)| command.aliases().iter().any(|alias| alias == wanted))
            })
    }

    /// The options in effect for a command: the globals merged with the
    /// command's own options.
    #[must_use]
    pub fn options_for(&self, command: &CommandSpec) -> OptionSet {
        self.options.merged(command.options())
    }
}

fn is_valid_command_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
