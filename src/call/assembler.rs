use crate::escape::{escape_text, EscapeFlags, EscapeResult};

use super::function::FunctionReference;

/// `module.function(arg0,arg1,...)` with literals joined by a bare comma.
pub fn assemble_call<S: AsRef<str>>(module: &str, function: &str, literal_args: &[S]) -> String {
    format!("{}.{}({})", module, function, join_literals(literal_args))
}

pub fn assemble_reference_call<S: AsRef<str>>(
    function: &FunctionReference,
    literal_args: &[S],
) -> String {
    assemble_call(&function.module, &function.function, literal_args)
}

/// Packs `name(arg0,arg1,...)` into the single string argument the builtin
/// dispatcher expects, quoting the blob with the default flags.
pub fn assemble_builtin_call<S: AsRef<str>>(
    dispatcher: &FunctionReference,
    builtin_name: &str,
    arguments: &[S],
) -> EscapeResult<String> {
    assemble_builtin_call_with(dispatcher, builtin_name, arguments, EscapeFlags::default())
}

/// Like [`assemble_builtin_call`], with explicit flags for the outer blob.
///
/// Commas inside each argument are backslash-escaped; the commas separating
/// arguments are not.
pub fn assemble_builtin_call_with<S: AsRef<str>>(
    dispatcher: &FunctionReference,
    builtin_name: &str,
    arguments: &[S],
    blob_flags: EscapeFlags,
) -> EscapeResult<String> {
    let packed = arguments
        .iter()
        .map(|argument| escape_text(argument.as_ref(), EscapeFlags::ESCAPE_BUILTIN))
        .collect::<EscapeResult<Vec<_>>>()?;
    let blob = format!("{}({})", builtin_name, packed.join(","));
    let blob_literal = escape_text(&blob, blob_flags)?;
    Ok(assemble_reference_call(dispatcher, &[blob_literal]))
}

fn join_literals<S: AsRef<str>>(literal_args: &[S]) -> String {
    literal_args
        .iter()
        .map(|literal| literal.as_ref())
        .collect::<Vec<&str>>()
        .join(",")
}
