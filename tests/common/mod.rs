use std::collections::HashMap;
use std::sync::Mutex;

use kodi_bridge::{eval::ExecutorResult, CodeExecutor, EvalMessage, EvalReply};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ASSIGN: Regex = Regex::new(r"^Variables\['([^']+)'\] = (.*)$").unwrap();
    static ref DELETE: Regex = Regex::new(r"^del Variables\['([^']+)'\]$").unwrap();
    static ref LOOKUP: Regex = Regex::new(r"^Variables\['([^']+)'\]$").unwrap();
}

/// A stand-in for the remote interpreter: keeps a `Variables` map and
/// understands assignment, lookup and deletion. Any other expression
/// evaluates to its own text.
#[derive(Default)]
pub struct FakeKodi {
    variables: Mutex<HashMap<String, String>>,
    log: Mutex<Vec<String>>,
}

impl FakeKodi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable(&self, name: &str) -> Option<String> {
        self.variables.lock().unwrap().get(name).cloned()
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn evaluate(&self, expression: &str) -> Result<String, String> {
        match LOOKUP.captures(expression) {
            Some(caps) => self
                .variable(&caps[1])
                .ok_or_else(|| format!("KeyError: '{}'", &caps[1])),
            None => Ok(expression.to_string()),
        }
    }

    fn execute(&self, code: &str) -> Result<String, String> {
        if let Some(caps) = ASSIGN.captures(code) {
            let value = self.evaluate(&caps[2])?;
            self.variables
                .lock()
                .unwrap()
                .insert(caps[1].to_string(), value.clone());
            return Ok(value);
        }
        if let Some(caps) = DELETE.captures(code) {
            return match self.variables.lock().unwrap().remove(&caps[1]) {
                Some(_) => Ok("None".to_string()),
                None => Err(format!("KeyError: '{}'", &caps[1])),
            };
        }
        self.evaluate(code)
    }
}

impl CodeExecutor for FakeKodi {
    fn send(&self, message: &EvalMessage) -> ExecutorResult<String> {
        self.log.lock().unwrap().push(message.code.clone());
        let reply = match self.execute(&message.code) {
            Ok(result) => EvalReply::success(result),
            Err(error) => EvalReply::failure(error),
        };
        Ok(reply.encode())
    }
}

/// Answers every statement with the same payload.
pub struct FixedPayload(pub &'static str);

impl CodeExecutor for FixedPayload {
    fn send(&self, _message: &EvalMessage) -> ExecutorResult<String> {
        Ok(self.0.to_string())
    }
}
