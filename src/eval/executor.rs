use thiserror::Error;

use super::message::EvalMessage;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecutorError {
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Timed out waiting for reply")]
    Timeout,
    #[error("Executor error: {0}")]
    Other(String),
}

pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Delivers one source string to the remote interpreter and blocks until
/// its reply payload arrives.
///
/// Timeouts and cancellation belong to the implementation.
#[mockall::automock]
pub trait CodeExecutor {
    fn send(&self, message: &EvalMessage) -> ExecutorResult<String>;
}

impl<E: CodeExecutor + ?Sized> CodeExecutor for &E {
    fn send(&self, message: &EvalMessage) -> ExecutorResult<String> {
        (**self).send(message)
    }
}

impl<E: CodeExecutor + ?Sized> CodeExecutor for Box<E> {
    fn send(&self, message: &EvalMessage) -> ExecutorResult<String> {
        (**self).send(message)
    }
}
