use thiserror::Error;

/// Reasons a style injection could not be performed.
///
/// The public `apply` entry points never surface these; they log and hand
/// back a no-op cancel. The `try_*` variants return them to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InjectError {
    /// No document is reachable from the current environment.
    #[error("document is not available")]
    NoDocument,
    /// The document has no `<head>` to attach style nodes to.
    #[error("document has no <head> element")]
    NoHead,
    /// A selector target resolved to nothing.
    #[error("element not found: {0}")]
    TargetNotFound(String),
    /// The host rejected a DOM operation.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Malformed option input (config files, inline JSON).
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid scrollbar options: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InjectError>;

/// Shorthand constructors.
impl InjectError {
    pub fn target_not_found(selector: &str) -> Self {
        Self::TargetNotFound(selector.to_string())
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }
}
