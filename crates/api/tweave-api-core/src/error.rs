//! Error types for the tweening engine

/// Error type for transition scheduling and configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TweenError {
    /// Invalid timing configuration, surfaced when a transition starts
    #[error("invalid transition configuration: {reason}")]
    Configuration { reason: String },

    /// Target has no readable property under this key
    #[error("target is missing property '{key}'")]
    MissingProperty { key: String },

    /// Target holds no child collection under this key
    #[error("target has no collection '{key}'")]
    MissingCollection { key: String },

    /// Easing identifier did not resolve to a known curve
    #[error("unknown easing function: {name}")]
    UnknownEasing { name: String },

    /// The transition is terminal and will never be ticked again
    #[error("transition already stopped")]
    AlreadyStopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_key() {
        let err = TweenError::MissingProperty {
            key: "opacity".to_string(),
        };
        assert_eq!(err.to_string(), "target is missing property 'opacity'");
    }
}
