#![no_std]

/*!
Low-level implementation of argument handling. Takes care of matching raw
command line tokens against a table of known option names, and of handing
out the following token to options that need a value. No type handling
happens here. Usually this is too low level to use directly.
*/

/**
A single known option name, such as `--verbose` or `-v`, paired with the index
of the option it belongs to.

Several names can point to the same option. The order of names in the table
passed to [`ArgumentsParser::new`] is significant: when a token could match
more than one name, the first one wins.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Name<'n> {
    pub tag: &'n str,
    pub option: usize,
}

impl<'n> Name<'n> {
    #[inline]
    #[must_use]
    pub const fn new(tag: &'n str, option: usize) -> Self {
        Self { tag, option }
    }
}

/**
The [`ArgumentsParser`] type operates by passing tokens it classifies into a
[`Visitor`], to be handled.
 */
pub trait Visitor<'arg> {
    type Value;

    /// A token that didn't match any known name.
    fn visit_positional(self, argument: &'arg str) -> Self::Value;

    /// A known option that definitely has a value, because it was given as
    /// `--option=value`
    fn visit_option_value(self, option: usize, tag: &str, value: &'arg str) -> Self::Value;

    /// A known option or flag given on its own, such as `--option`
    fn visit_option(self, option: usize, tag: &str, value: impl ArgAccess<'arg>) -> Self::Value;
}

/**
[`ArgAccess`] allows a visitor to decide if a given option needs a value,
based on the identity of the option.

Consider `--foo bar`. Is this a pair of tokens (the flag `--foo` and the
positional `bar`) or a single option `--foo bar` that takes a value? The
[`ArgumentsParser`] can't independently classify it, so instead, a visitor
requests a value via this trait only for options that need one.
*/
pub trait ArgAccess<'arg>: Sized {
    /**
    Get the next token from the parser, verbatim, even if it looks like an
    option itself. This should only be called by options that need it; flags
    should simply ignore it, to ensure that the next token can correctly be
    classified independently.

    This returns [`None`] if all of the tokens have been exhausted.
    */
    fn take(self) -> Option<&'arg str>;
}

/**
An `ArgumentsParser` is the main entry point into `lilo_parser`. It classifies
one token in each call to [`next_arg`][ArgumentsParser::next_arg], sending it
to the given [`Visitor`].

The parser operates entirely on borrowed data: the `'arg` lifetime refers to
the command line tokens and the `'n` lifetime to the table of known names.
*/
#[derive(Debug, Clone)]
pub struct ArgumentsParser<'n, I> {
    names: &'n [Name<'n>],
    args: I,
}

impl<'arg, 'n, I> ArgumentsParser<'n, I>
where
    I: Iterator<Item = &'arg str>,
{
    /**
    Create a new [`ArgumentsParser`] from a table of known names and the
    tokens to classify. The tokens should *exclude* the name of the program
    and, for programs with subcommands, the subcommand itself.
     */
    #[inline]
    #[must_use]
    pub fn new(names: &'n [Name<'n>], args: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            names,
            args: args.into_iter(),
        }
    }

    pub fn next_arg<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        let argument = self.args.next()?;

        Some(match classify(self.names, argument) {
            None => visitor.visit_positional(argument),
            Some((name, None)) => visitor.visit_option(
                name.option,
                name.tag,
                StandardArgAccess {
                    args: &mut self.args,
                },
            ),
            Some((name, Some(value))) => visitor.visit_option_value(name.option, name.tag, value),
        })
    }
}

/// ArgAccess implementation that gets the next token from the list.
struct StandardArgAccess<'a, I> {
    args: &'a mut I,
}

impl<'arg, I> ArgAccess<'arg> for StandardArgAccess<'_, I>
where
    I: Iterator<Item = &'arg str>,
{
    #[inline]
    fn take(self) -> Option<&'arg str> {
        self.args.next()
    }
}

/// Find the first name in `names` that `argument` refers to, either exactly
/// or as `name=value`.
fn classify<'n, 'arg>(
    names: &'n [Name<'n>],
    argument: &'arg str,
) -> Option<(&'n Name<'n>, Option<&'arg str>)> {
    // Tokens without an `=` can only ever match exactly
    let has_value = memchr::memchr(b'=', argument.as_bytes()).is_some();

    names.iter().find_map(|name| {
        if argument == name.tag {
            Some((name, None))
        } else if has_value {
            split_value(argument, name.tag).map(|value| (name, Some(value)))
        } else {
            None
        }
    })
}

fn split_value<'arg>(argument: &'arg str, tag: &str) -> Option<&'arg str> {
    argument.strip_prefix(tag)?.strip_prefix('=')
}
