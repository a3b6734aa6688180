//! Convert XMind mind maps into flat test case tables (CSV).
//!
//! Mind map conventions: `/Title` nodes are modules, `#Title` nodes are
//! comments (subtree skipped), a node whose first marker decodes to a
//! priority is a test case, its children are steps and its grandchildren
//! are expected results.

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod util;
