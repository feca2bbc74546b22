use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallError {
    #[error("Template references argument {index} but only {available} were given")]
    MissingTemplateArgument { index: usize, available: usize },
    #[error("Malformed template: {0}")]
    MalformedTemplate(String),
}

pub type CallResult<T> = Result<T, CallError>;
