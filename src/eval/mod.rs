//! Remote evaluation protocol.
//!
//! ```text
//! statement ──► EvalMessage ──CodeExecutor──► reply payload ──► EvalReply ──► result text
//! ```
//!
//! [`RemoteEvaluator`] builds statements (plain eval, variable assignment,
//! last-result reads, function and builtin calls) and sends them one at a
//! time through a [`CodeExecutor`]. Undecodable replies fail with
//! [`EvalError::MalformedReply`]; replies carrying an error fail with
//! [`EvalError::RemoteEvaluationFailure`]. Nothing is retried.

pub mod canned;
pub mod error;
pub mod evaluator;
pub mod executor;
pub mod message;

pub use canned::CannedExecutor;
pub use error::{EvalError, EvalResult};
pub use evaluator::RemoteEvaluator;
pub use executor::{CodeExecutor, ExecutorError, ExecutorResult, MockCodeExecutor};
pub use message::{EvalMessage, EvalReply};
