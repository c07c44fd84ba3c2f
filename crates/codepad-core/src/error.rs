//! Error types for codepad
//!
//! Every rejection the service can produce is one of these variants.
//! The `Display` text is the exact message sent back to clients.

/// Request rejection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Body could not be decoded as the expected JSON shape
    #[error("Invalid request body")]
    InvalidBody,

    /// `code` was missing or empty
    #[error("Code is required")]
    CodeRequired,

    /// `query` was missing or empty
    #[error("Query is required")]
    QueryRequired,
}

/// Result type alias for codepad operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_wire_text() {
        assert_eq!(Error::InvalidBody.to_string(), "Invalid request body");
        assert_eq!(Error::CodeRequired.to_string(), "Code is required");
        assert_eq!(Error::QueryRequired.to_string(), "Query is required");
    }
}
