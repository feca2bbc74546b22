use tracing::{debug, trace, warn};

use super::error::{EvalError, EvalResult};
use super::executor::CodeExecutor;
use super::message::{EvalMessage, EvalReply};
use crate::call::{
    assemble_builtin_call_with, assemble_call, format_template, FunctionReference, PyModule,
};
use crate::config::BridgeConfig;
use crate::escape::{escape_arguments, Argument, EscapeFlags};

/// Protocol layer over a [`CodeExecutor`].
///
/// Every operation is one blocking round trip. Value retrieval always goes
/// through the last-result variable: the expression is assigned to
/// `Variables['LastResult']` and the reply to that assignment carries the
/// value. The remote namespace is shared, so callers must not run two
/// evaluations against the same interpreter at once.
pub struct RemoteEvaluator<E: CodeExecutor> {
    executor: E,
    config: BridgeConfig,
}

impl<E: CodeExecutor> RemoteEvaluator<E> {
    pub fn new(executor: E) -> Self {
        Self::with_config(executor, BridgeConfig::default())
    }

    pub fn with_config(executor: E, config: BridgeConfig) -> Self {
        Self { executor, config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Sends `code` as-is and returns the reply's result text.
    pub fn eval(&self, code: &str) -> EvalResult<String> {
        let reply = self.round_trip(code)?;
        Self::log_failure(code, reply.into_result())
    }

    /// Sends `code` as-is; only the reply's error state is checked.
    pub fn exec(&self, code: &str) -> EvalResult<()> {
        let reply = self.round_trip(code)?;
        Self::log_failure(code, reply.into_status())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn round_trip(&self, code: &str) -> EvalResult<EvalReply> {
        let message = EvalMessage::new(code);
        let payload = self.executor.send(&message)?;
        trace!("reply payload: {}", payload);

        EvalReply::decode(&payload).map_err(|e| {
            warn!("undecodable reply for `{}`: {}", code, e);
            e
        })
    }

    fn log_failure<T>(code: &str, outcome: EvalResult<T>) -> EvalResult<T> {
        outcome.map_err(|e| {
            if let EvalError::RemoteEvaluationFailure(remote) = &e {
                warn!("remote evaluation of `{}` failed: {}", code, remote);
            }
            e
        })
    }

    /// `Variables['name'] = code`
    pub fn eval_to_variable(&self, name: &str, code: &str) -> EvalResult<String> {
        if self.config.log_statements {
            debug!("{} = {}", name, code);
        }
        let statement = format!("{} = {}", self.config.variable_expression(name), code);
        self.eval(&statement)
    }

    /// Escapes `arguments` with `flags`, substitutes them into the `{N}`
    /// placeholders of `template`, then assigns the result to `name`.
    pub fn eval_to_variable_with(
        &self,
        name: &str,
        template: &str,
        arguments: &[Argument],
        flags: EscapeFlags,
    ) -> EvalResult<String> {
        let literals = escape_arguments(arguments, flags)?;
        let code = format_template(template, &literals)?;
        self.eval_to_variable(name, &code)
    }

    pub fn eval_to_last_result(&self, code: &str) -> EvalResult<String> {
        self.eval_to_variable(&self.config.last_result_name, code)
    }

    /// Reads a remote variable through the last-result convention.
    pub fn get_variable(&self, name: &str) -> EvalResult<String> {
        self.eval_to_last_result(&self.config.variable_expression(name))
    }

    pub fn destroy_variable(&self, name: &str) -> EvalResult<()> {
        let statement = format!("del {}", self.config.variable_expression(name));
        self.exec(&statement)
    }

    /// Calls `module.function` with already-escaped literal arguments.
    pub fn call_function<S: AsRef<str>>(
        &self,
        module: &str,
        function: &str,
        literal_args: &[S],
    ) -> EvalResult<String> {
        self.eval_to_last_result(&assemble_call(module, function, literal_args))
    }

    /// Escapes `arguments` with the default flags and calls `function`.
    pub fn call(&self, function: &FunctionReference, arguments: &[Argument]) -> EvalResult<String> {
        let literals = escape_arguments(arguments, EscapeFlags::default())?;
        self.call_function(&function.module, &function.function, &literals)
    }

    pub fn call_in(
        &self,
        module: PyModule,
        function: &str,
        arguments: &[Argument],
    ) -> EvalResult<String> {
        self.call(&FunctionReference::in_module(module, function), arguments)
    }

    /// Runs a host builtin through the dispatcher.
    ///
    /// Arguments are rendered without quoting first, so text, numbers and
    /// variables all land in the blob as bare words.
    pub fn call_builtin(&self, builtin_name: &str, arguments: &[Argument]) -> EvalResult<String> {
        let literals = escape_arguments(arguments, EscapeFlags::NONE)?;
        self.call_builtin_raw(builtin_name, &literals)
    }

    /// Runs a host builtin with string arguments taken as given.
    pub fn call_builtin_raw<S: AsRef<str>>(
        &self,
        builtin_name: &str,
        arguments: &[S],
    ) -> EvalResult<String> {
        self.call_builtin_raw_with(builtin_name, arguments, EscapeFlags::default())
    }

    /// Like [`call_builtin_raw`](Self::call_builtin_raw), escaping the packed
    /// blob with `blob_flags` instead of the default quoting.
    pub fn call_builtin_raw_with<S: AsRef<str>>(
        &self,
        builtin_name: &str,
        arguments: &[S],
        blob_flags: EscapeFlags,
    ) -> EvalResult<String> {
        let call = assemble_builtin_call_with(
            &self.config.builtin_dispatcher,
            builtin_name,
            arguments,
            blob_flags,
        )?;
        self.eval_to_last_result(&call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::is_none_literal;
    use crate::eval::executor::{ExecutorError, MockCodeExecutor};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn expect_statement(mock: &mut MockCodeExecutor, statement: &'static str, result: &'static str) {
        mock.expect_send()
            .withf(move |message| message.code == statement)
            .times(1)
            .returning(move |_| Ok(EvalReply::success(result).encode()));
    }

    #[test]
    fn test_eval_returns_result() {
        let mut mock = MockCodeExecutor::new();
        mock.expect_send()
            .with(eq(EvalMessage::new("1 + 1")))
            .times(1)
            .returning(|_| Ok(r#"{"result": "2"}"#.to_string()));
        let evaluator = RemoteEvaluator::new(mock);
        assert_eq!(evaluator.eval("1 + 1").unwrap(), "2");
    }

    #[test]
    fn test_eval_to_variable_statement() {
        let mut mock = MockCodeExecutor::new();
        expect_statement(&mut mock, "Variables['x'] = 5", "5");
        let evaluator = RemoteEvaluator::new(mock);
        assert_eq!(evaluator.eval_to_variable("x", "5").unwrap(), "5");
    }

    #[test]
    fn test_eval_to_last_result_and_get_variable() {
        let mut mock = MockCodeExecutor::new();
        expect_statement(&mut mock, "Variables['LastResult'] = xbmc.getSkinDir()", "skin.estuary");
        expect_statement(&mut mock, "Variables['LastResult'] = Variables['player']", "<Player>");
        let evaluator = RemoteEvaluator::new(mock);
        assert_eq!(
            evaluator.eval_to_last_result("xbmc.getSkinDir()").unwrap(),
            "skin.estuary"
        );
        assert_eq!(evaluator.get_variable("player").unwrap(), "<Player>");
    }

    #[test]
    fn test_destroy_variable() {
        let mut mock = MockCodeExecutor::new();
        expect_statement(&mut mock, "del Variables['tmp']", "None");
        let evaluator = RemoteEvaluator::new(mock);
        evaluator.destroy_variable("tmp").unwrap();
    }

    #[test]
    fn test_destroy_variable_accepts_null_result() {
        let mut mock = MockCodeExecutor::new();
        mock.expect_send()
            .withf(|message| message.code == "del Variables['tmp']")
            .times(1)
            .returning(|_| Ok(r#"{"result": null, "success": true}"#.to_string()));
        let evaluator = RemoteEvaluator::new(mock);
        evaluator.destroy_variable("tmp").unwrap();
    }

    #[test]
    fn test_destroy_variable_surfaces_remote_error() {
        let mut mock = MockCodeExecutor::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(EvalReply::failure("KeyError: 'tmp'").encode()));
        let evaluator = RemoteEvaluator::new(mock);
        let err = evaluator.destroy_variable("tmp").unwrap_err();
        assert!(matches!(err, EvalError::RemoteEvaluationFailure(_)));
    }

    #[test]
    fn test_eval_to_variable_with_template() {
        let mut mock = MockCodeExecutor::new();
        expect_statement(
            &mut mock,
            "Variables['dlg'] = xbmcgui.Dialog().ok(\"Title\", \"a\\\"b\")",
            "True",
        );
        let evaluator = RemoteEvaluator::new(mock);
        let args = [Argument::from("Title"), Argument::from("a\"b"), Argument::Null];
        let result = evaluator
            .eval_to_variable_with(
                "dlg",
                "xbmcgui.Dialog().ok({0}, {1})",
                &args,
                EscapeFlags::QUOTES | EscapeFlags::STRIP_NULL_ITEMS,
            )
            .unwrap();
        assert_eq!(result, "True");
    }

    #[test]
    fn test_call_escapes_with_default_flags() {
        let mut mock = MockCodeExecutor::new();
        expect_statement(
            &mut mock,
            "Variables['LastResult'] = xbmc.log(\"hello\",1)",
            "None",
        );
        let evaluator = RemoteEvaluator::new(mock);
        let result = evaluator
            .call_in(PyModule::Xbmc, "log", &["hello".into(), 1.into()])
            .unwrap();
        assert!(is_none_literal(&result));
    }

    #[test]
    fn test_call_builtin() {
        let mut mock = MockCodeExecutor::new();
        expect_statement(
            &mut mock,
            "Variables['LastResult'] = xbmc.executebuiltin(\"Notification(Title,Text,5000)\")",
            "None",
        );
        let evaluator = RemoteEvaluator::new(mock);
        evaluator
            .call_builtin("Notification", &["Title".into(), "Text".into(), 5000.into()])
            .unwrap();
    }

    #[test]
    fn test_call_builtin_with_raw_blob() {
        let mut mock = MockCodeExecutor::new();
        expect_statement(
            &mut mock,
            r"Variables['LastResult'] = xbmc.executebuiltin(r'PlayMedia(C:\movies\a.mkv)')",
            "None",
        );
        let evaluator = RemoteEvaluator::new(mock);
        evaluator
            .call_builtin_raw_with("PlayMedia", &[r"C:\movies\a.mkv"], EscapeFlags::RAW_STRING)
            .unwrap();
    }

    #[test]
    fn test_escape_failure_sends_nothing() {
        let mut mock = MockCodeExecutor::new();
        mock.expect_send().never();
        let evaluator = RemoteEvaluator::new(mock);
        let err = evaluator
            .eval_to_variable_with("x", "{0}", &["it's".into()], EscapeFlags::RAW_STRING)
            .unwrap_err();
        assert!(matches!(err, EvalError::Escape(_)));
    }

    #[test]
    fn test_transport_error_propagates() {
        let mut mock = MockCodeExecutor::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Err(ExecutorError::Timeout));
        let evaluator = RemoteEvaluator::new(mock);
        let err = evaluator.eval("1").unwrap_err();
        assert!(matches!(err, EvalError::Transport(ExecutorError::Timeout)));
    }

    #[test]
    fn test_custom_config_names() {
        let mut mock = MockCodeExecutor::new();
        expect_statement(&mut mock, "Vars['Out'] = Vars['a']", "1");
        let config = BridgeConfig {
            variables_name: "Vars".to_string(),
            last_result_name: "Out".to_string(),
            ..BridgeConfig::default()
        };
        let evaluator = RemoteEvaluator::with_config(mock, config);
        assert_eq!(evaluator.get_variable("a").unwrap(), "1");
    }
}
