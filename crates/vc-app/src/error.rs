use thiserror::Error;

/// Errors raised when a step needs a slot an earlier step should have filled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("`{0}` has not been selected yet")]
    MissingSlot(&'static str),

    #[error("unknown compiler setup `{0}`")]
    UnknownSetup(String),
}
