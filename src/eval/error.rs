use thiserror::Error;

use super::executor::ExecutorError;
use crate::{call::CallError, escape::EscapeError};

#[derive(Error, Debug)]
pub enum EvalError {
    /// The reply payload could not be decoded into an [`EvalReply`](super::EvalReply).
    #[error("Malformed reply: {0}")]
    MalformedReply(String),
    /// The remote side reported that the submitted code raised.
    #[error("Remote evaluation failed: {0}")]
    RemoteEvaluationFailure(String),
    #[error("Transport error: {0}")]
    Transport(#[from] ExecutorError),
    #[error("Escape error: {0}")]
    Escape(#[from] EscapeError),
    #[error("Call error: {0}")]
    Call(#[from] CallError),
}

pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    pub fn is_malformed_reply(&self) -> bool {
        matches!(self, EvalError::MalformedReply(_))
    }
}
