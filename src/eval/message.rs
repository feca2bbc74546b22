use serde::{Deserialize, Serialize};

use super::error::{EvalError, EvalResult};

/// Request envelope: the complete statement to evaluate remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalMessage {
    pub code: String,
}

impl EvalMessage {
    pub fn new<S: Into<String>>(code: S) -> Self {
        Self { code: code.into() }
    }
}

/// Reply envelope.
///
/// A reply with `error` set, or with `success: false`, is a failure. A
/// successful reply must carry `result`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvalReply {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvalReply {
    pub fn success<S: Into<String>>(result: S) -> Self {
        Self {
            result: Some(result.into()),
            success: Some(true),
            error: None,
        }
    }

    pub fn failure<S: Into<String>>(error: S) -> Self {
        Self {
            result: None,
            success: Some(false),
            error: Some(error.into()),
        }
    }

    pub fn decode(payload: &str) -> EvalResult<Self> {
        serde_json::from_str(payload).map_err(|e| EvalError::MalformedReply(e.to_string()))
    }

    pub fn encode(&self) -> String {
        // Serializing plain strings and bools cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Checks only the error state; the result, if any, is discarded.
    pub fn into_status(self) -> EvalResult<()> {
        if let Some(error) = self.error {
            return Err(EvalError::RemoteEvaluationFailure(error));
        }
        if self.success == Some(false) {
            return Err(EvalError::RemoteEvaluationFailure(
                "remote side reported failure without details".to_string(),
            ));
        }
        Ok(())
    }

    /// The result of a value-producing statement; a missing result is malformed.
    pub fn into_result(mut self) -> EvalResult<String> {
        let result = self.result.take();
        self.into_status()?;
        result.ok_or_else(|| EvalError::MalformedReply("reply carries no result".to_string()))
    }
}
