//! Tree walker: turns the mind map into a flat list of test cases
//!
//! Title conventions drive the walk:
//! - `/Title` marks a module node; it re-roots paths and resets inherited
//!   note/labels for its subtree
//! - `#Title` marks a comment node; the node and its whole subtree are skipped
//! - a node whose first marker decodes to a priority is a test case
//!
//! Notes and labels flow from ancestor to descendant; a node's own non-empty
//! values replace (never merge with) the inherited ones.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::entities::{TestCase, Topic};
use crate::domain::priority::priority_from_marker;
use crate::domain::steps::compile_steps;

/// Traversal state for one extraction run.
///
/// `current_module` and `seen_keys` are deliberately walk-wide, not scoped to
/// a subtree: a module stays current until a deeper module node replaces it,
/// and a case key emitted anywhere suppresses later duplicates everywhere.
#[derive(Debug)]
pub struct CaseExtractor {
    cases: Vec<TestCase>,
    seen_keys: HashSet<String>,
    current_module: String,
}

impl CaseExtractor {
    pub fn new() -> Self {
        Self {
            cases: Vec::new(),
            seen_keys: HashSet::new(),
            current_module: String::new(),
        }
    }

    /// Walk the root's children in pre-order and collect every test case.
    ///
    /// The root topic itself is never a case; its children are the first-level
    /// nodes (typically module nodes).
    pub fn extract(mut self, root: &Topic) -> Vec<TestCase> {
        for child in &root.children {
            self.visit(child, &[], "", &[]);
        }
        self.cases
    }

    fn visit(
        &mut self,
        node: &Topic,
        parent_path: &[String],
        parent_note: &str,
        parent_labels: &[String],
    ) {
        let title = node.title.trim();

        // Comment nodes hide their entire subtree.
        if title.starts_with('#') {
            debug!("skipping comment subtree: {}", title);
            return;
        }

        // A module node becomes a fresh root: path, note and labels restart
        // here no matter what the caller passed in.
        let (current_path, parent_note, parent_labels): (Vec<String>, &str, &[String]) =
            if title.starts_with('/') {
                debug!("entering module: {}", title);
                self.current_module = title.to_string();
                (vec![title.to_string()], "", &[])
            } else {
                let mut path = parent_path.to_vec();
                if !title.is_empty() {
                    path.push(title.to_string());
                }
                (path, parent_note, parent_labels)
            };

        let own_note = node.note.trim();
        let current_note = if own_note.is_empty() {
            parent_note
        } else {
            own_note
        };
        let current_labels: &[String] = if node.labels.is_empty() {
            parent_labels
        } else {
            &node.labels
        };

        // Only the first marker counts; an unknown first marker means the
        // node is not a case even if a later marker would decode.
        if let Some(priority) = node.markers.first().and_then(|m| priority_from_marker(m)) {
            let case_title = current_path.join("-");
            let in_module = current_path
                .first()
                .map_or(false, |segment| segment.starts_with('/'));

            if !in_module {
                debug!("dropping case outside any module: {}", case_title);
            } else {
                let case_key = format!("{}_{}", self.current_module, case_title);
                if self.seen_keys.insert(case_key) {
                    debug!("case: {} (priority {})", case_title, priority);
                    let case =
                        self.build_case(node, &case_title, priority, current_labels, current_note);
                    self.cases.push(case);
                } else {
                    debug!("dropping duplicate case: {}", case_title);
                }
            }
        }

        // Emission never stops descent; steps may themselves carry cases.
        for child in &node.children {
            self.visit(child, &current_path, current_note, current_labels);
        }
    }

    fn build_case(
        &self,
        node: &Topic,
        case_title: &str,
        priority: u8,
        labels: &[String],
        note: &str,
    ) -> TestCase {
        let (steps, expects) = compile_steps(&node.children);

        // Drop the module segment from the displayed title: strip one leading
        // slash, then everything up to and including the first dash. A
        // single-segment path (the module node itself) keeps its name.
        let stripped = case_title.strip_prefix('/').unwrap_or(case_title);
        let title = match stripped.split_once('-') {
            Some((_, rest)) => rest.to_string(),
            None => stripped.to_string(),
        };

        TestCase {
            module: format!("/{}", self.current_module.trim_start_matches('/')),
            title,
            case_type: labels.first().cloned().unwrap_or_default(),
            priority,
            precondition: note.to_string(),
            steps,
            expects,
        }
    }
}

impl Default for CaseExtractor {
    fn default() -> Self {
        Self::new()
    }
}
