use thiserror::Error;

/// Errors raised when a caller breaks a throughput precondition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThroughputError {
    #[error("Throughput mode has not changed: no override applies")]
    ModeUnchanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_error_display() {
        assert_eq!(
            ThroughputError::ModeUnchanged.to_string(),
            "Throughput mode has not changed: no override applies"
        );
    }
}
