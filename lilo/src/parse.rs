/*!
Parsing a command line against an [`OptionSet`].

Parsing happens in two steps, like the `state` and `build` layers of most
argument parsers: each token is fed into a [`State`], which folds option
values through their handlers; once the tokens are exhausted, the state is
checked for missing required options and turned into [`ParsedParams`].
 */

use lilo_parser::{ArgAccess, ArgumentsParser, Visitor};

use crate::{
    errors::ValidationError,
    params::ParsedParams,
    spec::{OptionKind, OptionSet},
    value::{Handler, Value},
};

/**
Parse `args` against `options`.

`args` should exclude the program name and the subcommand. Tokens that
don't match any option name are collected as positionals; an option that
needs a value takes the next token, whatever it looks like.

```
use lilo::{
    parse::parse,
    spec::{OptionSet, OptionSpec},
    value::Handler,
};

let options = OptionSet::new()
    .with("name", OptionSpec::valued("--name", Handler::string()).required())
    .with("loud", OptionSpec::flag("--loud"));

let params = parse(["--name=world", "extra", "--loud"], &options)?;

assert_eq!(params.string("name"), Some("world"));
assert!(params.flag("loud"));
assert_eq!(params.positionals(), ["extra"]);
# Ok::<(), lilo::errors::ValidationError>(())
```
*/
pub fn parse<'arg>(
    args: impl IntoIterator<Item = &'arg str>,
    options: &OptionSet,
) -> Result<ParsedParams, ValidationError> {
    let names = options.name_table()?;
    let mut parser = ArgumentsParser::new(&names, args);
    let mut state = State::new(options);

    while let Some(result) = parser.next_arg(&mut state) {
        result?;
    }

    state.build()
}

/// In-progress parse. Holds the value folded so far for each option, indexed
/// like the option set.
struct State<'s> {
    options: &'s OptionSet,
    values: Vec<Option<Value>>,

    /// Option indexes, in the order each option first appeared
    order: Vec<usize>,
    positionals: Vec<String>,
}

impl<'s> State<'s> {
    fn new(options: &'s OptionSet) -> Self {
        Self {
            options,
            values: vec![None; options.len()],
            order: Vec::new(),
            positionals: Vec::new(),
        }
    }

    fn store(&mut self, option: usize, value: Value) {
        if !self.order.contains(&option) {
            self.order.push(option);
        }

        self.values[option] = Some(value);
    }

    /// Fold one more raw value into the option's value
    fn coerce(
        &mut self,
        option: usize,
        tag: &str,
        handler: &Handler,
        raw: &str,
    ) -> Result<(), ValidationError> {
        let previous = self.values[option].take();
        let value = handler
            .coerce(raw, previous)
            .map_err(|message| ValidationError::InvalidValue {
                option: tag.to_owned(),
                value: raw.to_owned(),
                message,
            })?;

        self.store(option, value);
        Ok(())
    }

    fn build(self) -> Result<ParsedParams, ValidationError> {
        let missing: Vec<String> = self
            .options
            .iter()
            .zip(&self.values)
            .filter(|((_, option), value)| option.is_required() && value.is_none())
            .map(|((_, option), _)| option.canonical_name().to_owned())
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingRequired { options: missing });
        }

        let Self {
            options,
            mut values,
            order,
            positionals,
        } = self;

        let values = order
            .into_iter()
            .filter_map(|index| {
                let (key, _) = options.by_index(index);
                values[index]
                    .take()
                    .map(|value| (key.to_owned(), value))
            })
            .collect();

        Ok(ParsedParams::new(values, positionals))
    }
}

impl<'arg> Visitor<'arg> for &mut State<'_> {
    type Value = Result<(), ValidationError>;

    fn visit_positional(self, argument: &'arg str) -> Self::Value {
        self.positionals.push(argument.to_owned());
        Ok(())
    }

    fn visit_option_value(self, option: usize, tag: &str, value: &'arg str) -> Self::Value {
        let options = self.options;

        match options.by_index(option).1.kind() {
            OptionKind::Flag => Err(ValidationError::FlagGotValue {
                option: tag.to_owned(),
            }),
            OptionKind::Valued(handler) => self.coerce(option, tag, handler, value),
        }
    }

    fn visit_option(self, option: usize, tag: &str, value: impl ArgAccess<'arg>) -> Self::Value {
        let options = self.options;

        match options.by_index(option).1.kind() {
            OptionKind::Flag => {
                self.store(option, Value::Bool(true));
                Ok(())
            }
            OptionKind::Valued(handler) => {
                let raw = value.take().ok_or_else(|| ValidationError::MissingValue {
                    option: tag.to_owned(),
                })?;

                self.coerce(option, tag, handler, raw)
            }
        }
    }
}
