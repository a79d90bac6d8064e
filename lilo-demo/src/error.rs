use std::num::ParseFloatError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("{item:?} is not a number")]
    NotANumber {
        item: String,

        #[source]
        source: ParseFloatError,
    },

    #[error("--times must be between 1 and {max}, got {times}")]
    Times { times: i64, max: i64 },

    #[error("nothing to add up")]
    NoNumbers,
}
