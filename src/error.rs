use thiserror::Error;

use crate::call::CallError;
use crate::config::ConfigError;
use crate::escape::EscapeError;
use crate::eval::{EvalError, ExecutorError};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Escape error: {0}")]
    Escape(#[from] EscapeError),
    #[error("Call error: {0}")]
    Call(#[from] CallError),
    #[error("Eval error: {0}")]
    Eval(#[from] EvalError),
    #[error("Executor error: {0}")]
    Executor(#[from] ExecutorError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type InternalResult<T> = Result<T, Error>;
