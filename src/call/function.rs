use std::fmt;

use serde::{Deserialize, Serialize};

/// Modules exposed by the remote host interpreter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PyModule {
    Xbmc,
    XbmcGui,
    XbmcPlugin,
    XbmcAddon,
    XbmcVfs,
}

/// A remote callable, written into source as `module.function`.
///
/// Neither part is validated; both are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionReference {
    pub module: String,
    pub function: String,
}

impl FunctionReference {
    pub fn new<M: Into<String>, F: Into<String>>(module: M, function: F) -> Self {
        Self {
            module: module.into(),
            function: function.into(),
        }
    }

    pub fn in_module<F: Into<String>>(module: PyModule, function: F) -> Self {
        Self::new(module.as_ref(), function)
    }

    /// `xbmc.executebuiltin`, the host's builtin dispatcher.
    pub fn builtin_dispatcher() -> Self {
        Self::in_module(PyModule::Xbmc, "executebuiltin")
    }
}

impl fmt::Display for FunctionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.function)
    }
}
