//! # kodi-bridge: scripted control of a running Kodi instance
//!
//! Builds interpreter source from typed call descriptions, sends it to the
//! Python interpreter hosted inside Kodi and reads results back through a
//! named-variable convention.
//!
//! ## Pipeline
//!
//! ```text
//! Argument → escape → literal → call assembly → statement → CodeExecutor → reply → result
//! ```
//!
//! - Escaping ([`escape`]): typed arguments become source literals under
//!   composable [`EscapeFlags`].
//! - Call assembly ([`call`]): `module.function(...)` expressions and the
//!   single-blob builtin dispatcher form.
//! - Evaluation ([`eval`]): the request/reply protocol on top of a
//!   [`CodeExecutor`] supplied by the caller.
//! - Namespace ([`namespace`]): remote variables as a key/value store.
//!
//! ## Remote conventions
//!
//! The remote side keeps a mapping named `Variables`. Every value-producing
//! call assigns its expression to `Variables['LastResult']`, and the reply to
//! that assignment is the value:
//!
//! ```
//! use kodi_bridge::{CannedExecutor, RemoteEvaluator};
//!
//! let evaluator = RemoteEvaluator::new(CannedExecutor::new("skin.estuary"));
//! let skin = evaluator.call_function("xbmc", "getSkinDir", &[] as &[&str]).unwrap();
//! assert_eq!(skin, "skin.estuary");
//! assert_eq!(
//!     evaluator.executor().last_sent().unwrap(),
//!     "Variables['LastResult'] = xbmc.getSkinDir()"
//! );
//! ```
//!
//! Calls are strictly sequential: the remote namespace is shared state and
//! concurrent evaluations would race on `LastResult`.

pub mod call;
pub mod config;
pub mod error;
pub mod escape;
pub mod eval;
pub mod namespace;

// Re-exports
pub use call::{FunctionReference, PyModule};
pub use config::BridgeConfig;
pub use error::*;
pub use escape::{Argument, ArgumentListBuilder, EscapeFlags};
pub use eval::{
    CannedExecutor, CodeExecutor, EvalError, EvalMessage, EvalReply, ExecutorError,
    RemoteEvaluator,
};
pub use namespace::{RemoteVariable, VariableStore};
