/*!
Parsed option values, and the [`Handler`] type that coerces raw command line
text into them.
 */

use std::{
    convert::Infallible,
    fmt::{self, Display},
    sync::Arc,
};

/**
The value of a single option, after it has been coerced by its [`Handler`].

Flags are always [`Value::Bool`]. Valued options produce whatever their
handler returns; repeat-aware handlers like [`Handler::comma_separated`]
produce a [`Value::List`].
*/
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    String(String),
    Number(f64),
    Integer(i64),
    List(Vec<String>),
}

impl Value {
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// Get this value as a number. Integers are widened.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Number(value) => Some(value),
            Value::Integer(value) => Some(value as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Value::Integer(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::List(values)
    }
}

type CoerceFn = dyn Fn(&str, Option<Value>) -> Result<Value, String> + Send + Sync;

/**
A handler coerces the raw text given to an option into a [`Value`].

Each time the option appears on the command line, the handler is called with
the raw text and the value produced by the previous occurrence, if any. This
makes parsing a fold over the occurrences of an option: plain handlers ignore
the previous value (the last occurrence wins), while accumulating handlers
extend it.

Handlers are cheap to clone and can be shared between threads.
*/
#[derive(Clone)]
pub struct Handler {
    coerce: Arc<CoerceFn>,
}

impl Handler {
    /**
    Create a handler from a function. The error, if any, is used as the
    reason in the resulting
    [`InvalidValue`][crate::errors::ValidationError::InvalidValue] error.
    */
    pub fn from_fn<F, E>(coerce: F) -> Self
    where
        F: Fn(&str, Option<Value>) -> Result<Value, E> + Send + Sync + 'static,
        E: Display,
    {
        Self {
            coerce: Arc::new(move |raw: &str, previous: Option<Value>| {
                coerce(raw, previous).map_err(|err| err.to_string())
            }),
        }
    }

    /// The raw text, unchanged.
    #[must_use]
    pub fn string() -> Self {
        Self::from_fn(|raw, _| Ok::<_, Infallible>(Value::from(raw)))
    }

    /// A floating point number.
    #[must_use]
    pub fn number() -> Self {
        Self::from_fn(|raw, _| raw.trim().parse::<f64>().map(Value::Number))
    }

    /// A signed integer.
    #[must_use]
    pub fn integer() -> Self {
        Self::from_fn(|raw, _| raw.trim().parse::<i64>().map(Value::Integer))
    }

    /// A list of comma separated items. Repeated occurrences extend the list,
    /// so `--tag a,b --tag=c` produces `["a", "b", "c"]`.
    #[must_use]
    pub fn comma_separated() -> Self {
        Self::from_fn(|raw, previous| {
            let mut items = into_list(previous);
            items.extend(raw.split(',').map(String::from));
            Ok::<_, Infallible>(Value::List(items))
        })
    }

    /// A list with one item per occurrence, in the order they appeared.
    #[must_use]
    pub fn repeated() -> Self {
        Self::from_fn(|raw, previous| {
            let mut items = into_list(previous);
            items.push(raw.into());
            Ok::<_, Infallible>(Value::List(items))
        })
    }

    pub(crate) fn coerce(&self, raw: &str, previous: Option<Value>) -> Result<Value, String> {
        (self.coerce)(raw, previous)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// The list accumulated so far. Anything that isn't a list is discarded.
fn into_list(previous: Option<Value>) -> Vec<String> {
    match previous {
        Some(Value::List(items)) => items,
        _ => Vec::new(),
    }
}
