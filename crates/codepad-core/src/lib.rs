//! Codepad Core - the logic behind the codepad playground backend
//!
//! Everything here is plain string processing. Nothing is parsed,
//! compiled or run.
//!
//! # Architecture
//!
//! ```text
//! CodeRequest  → api::run      → simulator → canned output
//! CodeRequest  → api::autofix  → autofix   → fixed + re-indented code
//! QueryRequest → api::help     → help      → canned paragraph
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same input always produces identical output
//! - **Line preserving**: autofix never adds or removes lines
//! - **Total**: every non-empty input produces an answer

pub mod api;
pub mod autofix;
pub mod error;
pub mod help;
pub mod simulator;

pub use api::{CodeRequest, QueryRequest, Response};
pub use error::{Error, Result};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let req = CodeRequest::new("print('hi')");
        let json = serde_json::to_string(&req).unwrap();
        let deserialized: CodeRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, deserialized);
    }

    #[test]
    fn test_determinism_100_iterations() {
        let req = CodeRequest::new("for (i = 0; i < 3; i++) {\nconsole.log(i)\n}");
        let first = (api::run(&req).unwrap(), api::autofix(&req).unwrap());
        for i in 0..100 {
            let result = (api::run(&req).unwrap(), api::autofix(&req).unwrap());
            assert_eq!(first, result, "Non-determinism at iteration {}", i);
        }
    }
}
