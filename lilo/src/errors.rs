/*!
The error raised when command line arguments, or the specification they are
checked against, are invalid.
 */

use joinery::JoinableIterator;

/// Something was wrong with the command line, or with the way the program
/// declared its commands and options. Every variant aborts the invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// An option that needs a value was the last token on the command line
    #[error("Option \"{option}\" expects a value, but got none")]
    MissingValue { option: String },

    /// A flag was given as `--flag=value`
    #[error("Provided a value for a boolean option {option}")]
    FlagGotValue { option: String },

    /// One or more required options were absent. They are listed by their
    /// canonical name, in the order they were declared.
    #[error(
        "Required options are not provided: {}",
        .options.iter().join_with(", ")
    )]
    MissingRequired { options: Vec<String> },

    /// The option's handler rejected its value
    #[error("Invalid value {value:?} for option {option}: {message}")]
    InvalidValue {
        option: String,
        value: String,
        message: String,
    },

    /// A command declaring a positional argument got none
    #[error("Required argument {placeholder} was not provided")]
    MissingPositional { placeholder: String },

    /// The first argument didn't name a known command or alias
    #[error("Expected one of known commands: {}", .known.iter().join_with(", "))]
    UnknownCommand { known: Vec<String> },

    #[error(
        "Command names can only contain letters, digits, underscores, and hyphens. Got \"{name}\""
    )]
    InvalidCommandName { name: String },

    /// Two options in the same option set claim the same name
    #[error("Option name {name} is declared by both {first:?} and {second:?}")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },
}
