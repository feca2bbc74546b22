use super::error::{CallError, CallResult};

/// Substitutes positional `{N}` placeholders with literal arguments.
///
/// `{{` and `}}` produce literal braces. Placeholders may repeat and appear
/// in any order; an index past the end of `literals` is an error.
pub fn format_template<S: AsRef<str>>(template: &str, literals: &[S]) -> CallResult<String> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    output.push('{');
                    continue;
                }
                let mut digits = String::new();
                let mut closed = false;
                for (_, next) in chars.by_ref() {
                    if next == '}' {
                        closed = true;
                        break;
                    }
                    digits.push(next);
                }
                if !closed {
                    return Err(CallError::MalformedTemplate(format!(
                        "unclosed placeholder at {}",
                        position
                    )));
                }
                let index: usize = digits.parse().map_err(|_| {
                    CallError::MalformedTemplate(format!(
                        "placeholder '{{{}}}' at {} is not an argument index",
                        digits, position
                    ))
                })?;
                let literal = literals
                    .get(index)
                    .ok_or(CallError::MissingTemplateArgument {
                        index,
                        available: literals.len(),
                    })?;
                output.push_str(literal.as_ref());
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    output.push('}');
                } else {
                    return Err(CallError::MalformedTemplate(format!(
                        "unmatched '}}' at {}",
                        position
                    )));
                }
            }
            _ => output.push(c),
        }
    }
    Ok(output)
}
