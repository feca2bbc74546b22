use super::argument::Argument;
use super::error::EscapeResult;
use super::escaper::escape_argument;
use super::flags::EscapeFlags;

/// Escapes an ordered argument list, one literal per argument.
///
/// With `STRIP_NULL_ITEMS` the trailing run of nulls is dropped first;
/// interior nulls are kept.
pub fn escape_arguments(arguments: &[Argument], flags: EscapeFlags) -> EscapeResult<Vec<String>> {
    let kept = if flags.contains(EscapeFlags::STRIP_NULL_ITEMS) {
        strip_trailing_nulls(arguments)
    } else {
        arguments
    };
    kept.iter()
        .map(|argument| escape_argument(argument, flags))
        .collect()
}

/// Everything up to and including the last non-null argument.
pub fn strip_trailing_nulls(arguments: &[Argument]) -> &[Argument] {
    let end = arguments
        .iter()
        .rposition(|argument| !argument.is_null())
        .map_or(0, |last| last + 1);
    &arguments[..end]
}

/// Collects heterogeneous arguments before escaping them together.
#[derive(Debug, Clone, Default)]
pub struct ArgumentListBuilder {
    arguments: Vec<Argument>,
    flags: EscapeFlags,
}

impl ArgumentListBuilder {
    pub fn new(flags: EscapeFlags) -> Self {
        Self {
            arguments: Vec::new(),
            flags,
        }
    }

    pub fn arg<A: Into<Argument>>(mut self, argument: A) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn args<I, A>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    pub fn build(&self) -> EscapeResult<Vec<String>> {
        escape_arguments(&self.arguments, self.flags)
    }
}
