//! Hook error types.

/// Error returned by a lifecycle hook to veto an operation.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Hook Error: {} at line {} in {}", message, line, file)]
pub struct HookError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HookError {
    /// Create a new HookError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vasari_error::HookError;
    ///
    /// let err = HookError::new("asset rejected by policy");
    /// assert!(err.message.contains("rejected"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
