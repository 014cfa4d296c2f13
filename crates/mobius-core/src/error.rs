use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobiusError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Numeric degeneracy: {0}")]
    NumericDegeneracy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MobiusError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn numeric_degeneracy(msg: impl Into<String>) -> Self {
        Self::NumericDegeneracy(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, MobiusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MobiusError::invalid_parameter("n must be at least 2, got 1");
        assert_eq!(err.to_string(), "Invalid parameter: n must be at least 2, got 1");

        let err = MobiusError::numeric_degeneracy("1 sample");
        assert!(err.to_string().starts_with("Numeric degeneracy"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: MobiusError = io.into();
        assert!(matches!(err, MobiusError::Io(_)));
    }
}
