use std::fmt;

use crate::value::Value;

/**
The result of parsing a command line against an
[`OptionSet`][crate::spec::OptionSet].

It has one entry per option that was actually supplied, keyed by the option's
logical name, in the order the options first appeared. Tokens that didn't
match any option are kept separately, in their original order, as the
positional arguments (`_` in the `Debug` output).
*/
#[derive(Clone, PartialEq, Default)]
pub struct ParsedParams {
    values: Vec<(String, Value)>,
    positionals: Vec<String>,
}

impl ParsedParams {
    pub(crate) fn new(values: Vec<(String, Value)>, positionals: Vec<String>) -> Self {
        Self {
            values,
            positionals,
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether a flag was given. Absent flags are `false`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_number)
    }

    #[must_use]
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_integer)
    }

    /// A list valued option, or an empty list if it was absent
    #[must_use]
    pub fn list(&self, key: &str) -> &[String] {
        self.get(key).and_then(Value::as_list).unwrap_or(&[])
    }

    /// The tokens that didn't match any option, in order
    #[must_use]
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// The supplied options, in the order they first appeared
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for ParsedParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entry(&"_", &self.positionals)
            .entries(self.iter())
            .finish()
    }
}
