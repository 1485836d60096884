use thiserror::Error;

/// Errors from session store operations (used by trait definitions in
/// stanbot-core).
///
/// The in-memory store never produces these; the variants exist so a
/// persistent backend can implement the same port.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage backend unavailable")]
    Connection,

    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors from the conversation pipeline.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is empty after trimming")]
    EmptyMessage,

    #[error("session storage error: {0}")]
    Storage(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Operation("write failed".to_string());
        assert_eq!(err.to_string(), "storage operation failed: write failed");
    }

    #[test]
    fn test_chat_error_display() {
        assert_eq!(
            ChatError::EmptyMessage.to_string(),
            "message is empty after trimming"
        );
    }

    #[test]
    fn test_chat_error_from_repository_error() {
        let err: ChatError = RepositoryError::Connection.into();
        assert!(matches!(err, ChatError::Storage(_)));
        assert!(err.to_string().contains("storage backend unavailable"));
    }
}
