//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod extractor;
pub mod priority;
pub mod steps;

pub use entities::{TestCase, Topic};
pub use error::DomainError;
pub use extractor::CaseExtractor;
pub use priority::priority_from_marker;
pub use steps::compile_steps;
