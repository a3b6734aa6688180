//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod convert;
pub mod error;
pub mod error_ext;
pub mod table;
pub mod workbook;

pub use convert::{ConversionOutcome, ConversionService};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
