use std::fmt;

/// Failures that come out of native interaction. None of these are fatal:
/// callers convert them into a safe default and log the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The platform lacks the OS integration being asked for.
    Unavailable(String),
    /// A native value was not of the expected shape.
    TypeMismatch(String),
    /// The settings query process failed to run, exited abnormally or timed out.
    Process(String),
}

impl PlatformError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch(message.into())
    }

    pub fn process(message: impl Into<String>) -> Self {
        Self::Process(message.into())
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "native feature unavailable: {}", msg),
            Self::TypeMismatch(msg) => write!(f, "unexpected native value: {}", msg),
            Self::Process(msg) => write!(f, "settings query failed: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure_kind() {
        let cases = [
            (PlatformError::unavailable("NSScreen"), "native feature unavailable: NSScreen"),
            (PlatformError::type_mismatch("NaN"), "unexpected native value: NaN"),
            (PlatformError::process("timed out"), "settings query failed: timed out"),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = PlatformError::unavailable("gsettings").into();
        let back = err.downcast_ref::<PlatformError>().unwrap();
        assert!(back.is_unavailable());
    }
}
