use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The call could not complete (unreachable host, aborted connection, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The list endpoint answered with a non-2xx status.
    #[error("Remote error: status {status}")]
    Remote { status: u16 },

    /// The detail endpoint answered with a non-2xx status for this key.
    #[error("Not found: {key}")]
    NotFound { key: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn is_transport(&self) -> bool {
        matches!(self, CoreError::Transport(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            CoreError::Remote { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code() {
        assert_eq!(CoreError::Remote { status: 503 }.status_code(), Some(503));
        assert_eq!(
            CoreError::NotFound {
                key: "ditto".to_string()
            }
            .status_code(),
            None
        );
    }

    #[test]
    fn test_display() {
        let err = CoreError::NotFound {
            key: "missingno".to_string(),
        };
        assert_eq!(err.to_string(), "Not found: missingno");
        assert!(CoreError::Transport("reset".to_string()).is_transport());
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let core: CoreError = err.into();
        assert!(matches!(core, CoreError::Decode(_)));
    }
}
