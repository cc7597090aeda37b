//! Errors raised by the game environments.

use thiserror::Error;

/// Errors that can occur while producing events or applying commands.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event input closed before a terminate event was read")]
    InputClosed,

    #[error("Event script exhausted before a terminate event was replayed")]
    ScriptExhausted,
}

impl EnvironmentError {
    /// Check if the error only means the event source ran dry.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::InputClosed | Self::ScriptExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_input_variants() {
        assert!(EnvironmentError::InputClosed.is_end_of_input());
        assert!(EnvironmentError::ScriptExhausted.is_end_of_input());

        let io = EnvironmentError::from(std::io::Error::other("broken pipe"));
        assert!(!io.is_end_of_input());
        assert_eq!(io.to_string(), "I/O error: broken pipe");
    }
}
