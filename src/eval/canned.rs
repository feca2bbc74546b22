use std::sync::Mutex;

use super::executor::{CodeExecutor, ExecutorResult};
use super::message::{EvalMessage, EvalReply};

/// In-process executor that records every statement and answers with a
/// fixed result. Nothing leaves the process.
#[derive(Debug, Default)]
pub struct CannedExecutor {
    result: String,
    sent: Mutex<Vec<String>>,
}

impl CannedExecutor {
    pub fn new<S: Into<String>>(result: S) -> Self {
        Self {
            result: result.into(),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Statements received so far, oldest first.
    pub fn sent(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last_sent(&self) -> Option<String> {
        self.sent().pop()
    }
}

impl CodeExecutor for CannedExecutor {
    fn send(&self, message: &EvalMessage) -> ExecutorResult<String> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.code.clone());
        Ok(EvalReply::success(self.result.clone()).encode())
    }
}
