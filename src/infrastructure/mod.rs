//! Infrastructure layer: I/O implementations
//!
//! This layer implements the I/O boundary traits used by the services.

pub mod traits;

pub use traits::{AlwaysConfirm, Confirmer, FileSystem, RealFileSystem, StdinConfirmer};
