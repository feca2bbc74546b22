//! Argument escaping.
//!
//! Turns typed [`Argument`]s into source literals for the remote interpreter.
//!
//! ```text
//! Argument ──escape_argument──► literal text
//! [Argument] ──escape_arguments──► [literal text]   (optional trailing-null strip)
//! ```
//!
//! Text arguments pass through a fixed pipeline controlled by
//! [`EscapeFlags`]:
//!
//! 1. `QUOTES`: line breaks become `\n`, `"` becomes `\"`, result is wrapped in `"`
//! 2. `ESCAPE_BUILTIN`: `,` becomes `\,`
//! 3. `RAW_STRING`: result is wrapped in `r'...'`
//!
//! Each stage reads the previous stage's output.

pub mod argument;
pub mod builder;
pub mod error;
pub mod escaper;
pub mod flags;

pub use argument::Argument;
pub use builder::{escape_arguments, strip_trailing_nulls, ArgumentListBuilder};
pub use error::{EscapeError, EscapeResult};
pub use escaper::{escape_argument, escape_text, is_none_literal, NONE_LITERAL};
pub use flags::EscapeFlags;
