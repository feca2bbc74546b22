//! Call expression assembly.
//!
//! Formats escaped literals into `module.function(...)` expressions and the
//! builtin dispatcher form, where the whole invocation travels as one
//! quoted string blob:
//!
//! ```text
//! Notification, ["Title", "Text"]
//!   → xbmc.executebuiltin("Notification(Title,Text)")
//! ```

pub mod assembler;
pub mod error;
pub mod function;
pub mod template;

pub use assembler::{
    assemble_builtin_call, assemble_builtin_call_with, assemble_call, assemble_reference_call,
};
pub use error::{CallError, CallResult};
pub use function::{FunctionReference, PyModule};
pub use template::format_template;
