//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business rule violations.
/// Node-level anomalies are recovered silently and never surface here.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("no test cases found in mind map")]
    NoTestCases,
}
