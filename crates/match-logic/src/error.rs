//! Engine error types

use thiserror::Error;

/// Errors the engine can report. All of them are input errors raised before
/// any round is played.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("round count must be at least 1, got {0}")]
    InvalidRoundCount(u32),

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("catalogue of {0} entries is too large")]
    CatalogueTooLarge(usize),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// True when the caller passed bad arguments, as opposed to a bad config source
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidRoundCount(_)
                | EngineError::UnknownStrategy(_)
                | EngineError::CatalogueTooLarge(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            EngineError::InvalidRoundCount(0).to_string(),
            "round count must be at least 1, got 0"
        );
        assert_eq!(
            EngineError::UnknownStrategy("Pavlov".into()).to_string(),
            "unknown strategy: Pavlov"
        );
    }

    #[test]
    fn test_is_invalid_argument() {
        assert!(EngineError::InvalidRoundCount(0).is_invalid_argument());
        assert!(EngineError::UnknownStrategy("x".into()).is_invalid_argument());
        assert!(EngineError::CatalogueTooLarge(usize::MAX).is_invalid_argument());

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(!EngineError::from(json_err).is_invalid_argument());
    }
}
