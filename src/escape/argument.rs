use std::fmt;

/// A value to embed in generated source.
///
/// Classification is fixed when the argument is built, so escaping switches
/// on a closed set of variants.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Argument {
    #[default]
    Null,
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// A live remote expression (usually `Variables['name']`), emitted verbatim.
    Variable(String),
    /// Any other value, carried as its string form.
    Object(String),
}

impl Argument {
    /// Wraps any displayable value as a generic object argument.
    pub fn object<T: fmt::Display>(value: T) -> Self {
        Argument::Object(value.to_string())
    }

    pub fn variable<S: Into<String>>(expression: S) -> Self {
        Argument::Variable(expression.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Argument::Null)
    }

    /// True for the variants the escaper never transforms.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Argument::Int(_) | Argument::UInt(_) | Argument::Float(_) | Argument::Bool(_)
        )
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Argument {
            fn from(value: $t) -> Self {
                Argument::Int(value as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Argument {
            fn from(value: $t) -> Self {
                Argument::UInt(value as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Float(value)
    }
}

impl From<f32> for Argument {
    // Widening through the shortest f32 text keeps 0.1f32 rendering as 0.1.
    fn from(value: f32) -> Self {
        let widened = value
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(value));
        Argument::Float(widened)
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Object(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Object(value)
    }
}

impl From<&String> for Argument {
    fn from(value: &String) -> Self {
        Argument::Object(value.clone())
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map_or(Argument::Null, Into::into)
    }
}
