/*!
Rendering help text for a program or one of its commands.

```text

my-cli
Used to do a thing or two

USAGE:
    my-cli

SUBCOMMANDS:
    cmd1            Works in one way
    cmd2 <FILE>...  Works in another way

OPTIONS:
    --option, -o <OPTION>
                    Can be used to pass option
    --message, -m   Supply message value
```

Every row of a table is the item, padded to [`DESCRIPTION_COLUMN`], followed
by its description. Items that are too wide to leave room for that padding
get their description on the following lines instead. Long descriptions are
broken into lines at the last space before the 80th character.
*/

use std::{
    borrow::Cow,
    fmt::{self, Display, Write},
};

use indent_write::fmt::IndentWriter;
use joinery::JoinableIterator;
use lazy_format::lazy_format;

use crate::{
    spec::{OptionKind, OptionSpec, Positional, ProgramSpec},
    wrap::wrap,
};

/// Indentation of everything inside a section
const INDENT: &str = "    ";

/// The column at which descriptions start, counting the section indent
pub const DESCRIPTION_COLUMN: usize = 20;

/// Starts a description line that isn't on the same line as its item
const CONTINUATION: &str = "\n                    ";

/**
Render help for a program, or for one of its commands.

`command` is the command help was requested for, by its registered name.
When it's absent or doesn't name a registered command, the program-level
help (including the table of subcommands) is rendered instead; the usage
line still mentions it.
*/
#[must_use]
pub fn render(program_name: &str, command: Option<&str>, program: &ProgramSpec) -> String {
    Help::new(program_name, command, program).to_string()
}

/// Help text, as a value that can be displayed. See [`render`].
#[derive(Debug, Clone, Copy)]
pub struct Help<'a> {
    program_name: &'a str,
    command: Option<&'a str>,
    program: &'a ProgramSpec,
}

impl<'a> Help<'a> {
    #[must_use]
    pub fn new(program_name: &'a str, command: Option<&'a str>, program: &'a ProgramSpec) -> Self {
        Self {
            program_name,
            command,
            program,
        }
    }
}

impl Display for Help<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let program = self.program;
        let command = self.command.and_then(|name| program.command_spec(name));

        writeln!(f)?;
        writeln!(f, "{}", self.program_name)?;
        writeln!(f, "{}", program.description())?;

        section(f, "USAGE", |out| {
            let mut out = IndentWriter::new(INDENT, out);
            let path = self.command.unwrap_or_default();
            let marker = command
                .and_then(|command| command.positional_argument())
                .map(|positional| positional.placeholder().to_string())
                .unwrap_or_default();

            let usage = format!("{} {path} {marker}", self.program_name);
            writeln!(out, "{}", usage.trim_end())
        })?;

        // Subcommands are only listed when help wasn't requested for one
        if command.is_none() {
            maybe_section(f, "SUBCOMMANDS", program.commands(), |out, (name, command)| {
                let marker = command.positional_argument().map(Positional::placeholder);
                let item = lazy_format!(match (&marker) {
                    Some(marker) => "{name} {marker}",
                    None => "{name}",
                });

                describe(out, item, command.description())
            })?;
        }

        let options = match command {
            Some(command) => Cow::Owned(program.options_for(command)),
            None => Cow::Borrowed(program.options()),
        };

        maybe_section(f, "OPTIONS", options.iter(), |out, (key, option)| {
            describe(out, option_item(key, option), option.description())
        })
    }
}

/// The item column for an option: its names, and a placeholder for its value
/// unless it's a flag
fn option_item<'a>(key: &'a str, option: &'a OptionSpec) -> impl Display + 'a {
    let names = option.names().iter().join_with(", ");

    lazy_format!(match (option.kind()) {
        OptionKind::Flag => "{names}",
        OptionKind::Valued(_) => ("{names} <{key}>", key = key.to_uppercase()),
    })
}

/// Write a section by writing a newline, then the `header`, then the `body`.
/// The body is responsible for its own indentation.
fn section<O: Write>(
    out: &mut O,
    header: &str,
    body: impl FnOnce(&mut O) -> fmt::Result,
) -> fmt::Result {
    writeln!(out, "\n{header}:")?;
    body(out)
}

/// Write an optional section, only if the iterator is not empty.
/// Otherwise identical to `section`.
fn maybe_section<O: Write, I: IntoIterator>(
    out: &mut O,
    header: &str,
    items: I,
    body: impl Fn(&mut O, I::Item) -> fmt::Result,
) -> fmt::Result {
    let mut items = items.into_iter();

    match items.next() {
        None => Ok(()),
        Some(first) => section(out, header, |out| {
            body(out, first)?;
            items.try_for_each(|item| body(out, item))
        }),
    }
}

/// Describe an item by writing the indented item, then its description
/// starting at `DESCRIPTION_COLUMN`. If the item is too wide, the description
/// starts on the next line. Only the item is indented; line breaks inside the
/// description are written as they are.
fn describe(out: &mut impl Write, item: impl Display, description: &str) -> fmt::Result {
    /// Helper type that counts the characters that flow through it. We use
    /// this to find out how much padding the item needs.
    struct CharCounter<'a, T: Write + ?Sized> {
        inner: &'a mut T,
        count: &'a mut usize,
    }

    impl<T: Write + ?Sized> Write for CharCounter<'_, T> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.inner.write_str(s)?;
            *self.count += s.chars().count();
            Ok(())
        }
    }

    let mut width = 0;

    {
        let mut counter = CharCounter {
            inner: &mut *out,
            count: &mut width,
        };
        write!(IndentWriter::new(INDENT, &mut counter), "{item}")?;
    }

    match width < DESCRIPTION_COLUMN {
        true => write!(out, "{:padding$}", "", padding = DESCRIPTION_COLUMN - width)?,
        false => out.write_str(CONTINUATION)?,
    }

    let lines = wrap(description);
    writeln!(out, "{}", lines.iter().join_with(CONTINUATION))
}
