use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    #[error("Cannot divide by zero.")]
    DivisionByZero,
}
