//! The remote variable namespace as a key/value store.
//!
//! Values live only on the remote side. A [`RemoteVariable`] is a handle:
//! it is created by assignment, read through the last-result convention and
//! removed by an explicit [`RemoteVariable::destroy`]. Dropping the handle
//! leaves the remote value in place.

use uuid::Uuid;

use crate::escape::Argument;
use crate::eval::{CodeExecutor, EvalResult, RemoteEvaluator};

pub trait VariableStore {
    /// Binds the value of the raw expression `code` to `name`.
    fn set(&self, name: &str, code: &str) -> EvalResult<String>;
    fn get(&self, name: &str) -> EvalResult<String>;
    fn delete(&self, name: &str) -> EvalResult<()>;
    /// The source expression that reads `name` remotely.
    fn expression(&self, name: &str) -> String;
}

impl<E: CodeExecutor> VariableStore for RemoteEvaluator<E> {
    fn set(&self, name: &str, code: &str) -> EvalResult<String> {
        self.eval_to_variable(name, code)
    }

    fn get(&self, name: &str) -> EvalResult<String> {
        self.get_variable(name)
    }

    fn delete(&self, name: &str) -> EvalResult<()> {
        self.destroy_variable(name)
    }

    fn expression(&self, name: &str) -> String {
        self.config().variable_expression(name)
    }
}

/// Handle to a named value in the remote namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteVariable {
    name: String,
    expression: String,
}

impl RemoteVariable {
    /// A handle with a fresh `var_<uuid>` name.
    pub fn generate<S: VariableStore + ?Sized>(store: &S) -> Self {
        let name = format!("var_{}", Uuid::new_v4().simple());
        Self::named(store, name)
    }

    pub fn named<S: VariableStore + ?Sized, N: Into<String>>(store: &S, name: N) -> Self {
        let name = name.into();
        let expression = store.expression(&name);
        Self { name, expression }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Variables['name']`, usable verbatim inside generated code.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn assign<S: VariableStore + ?Sized>(&self, store: &S, code: &str) -> EvalResult<String> {
        store.set(&self.name, code)
    }

    pub fn value<S: VariableStore + ?Sized>(&self, store: &S) -> EvalResult<String> {
        store.get(&self.name)
    }

    pub fn destroy<S: VariableStore + ?Sized>(self, store: &S) -> EvalResult<()> {
        store.delete(&self.name)
    }

    pub fn as_argument(&self) -> Argument {
        Argument::Variable(self.expression.clone())
    }
}

impl From<&RemoteVariable> for Argument {
    fn from(variable: &RemoteVariable) -> Self {
        variable.as_argument()
    }
}
