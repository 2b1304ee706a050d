use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("extract_max called on an empty queue")]
    EmptyQueue,

    #[error("input is empty; expected an operation count")]
    MissingCount,

    #[error("line {line}: expected an operation count, found {text:?}")]
    BadCount { line: usize, text: String },

    #[error("line {line}: unknown command {text:?}")]
    UnknownCommand { line: usize, text: String },

    #[error("line {line}: Insert requires a priority argument")]
    MissingArgument { line: usize },

    #[error("line {line}: invalid priority {text:?}")]
    BadPriority { line: usize, text: String },

    #[error("line {line}: unexpected trailing input")]
    TrailingInput { line: usize },

    #[error("expected {expected} commands, but input ended after {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
