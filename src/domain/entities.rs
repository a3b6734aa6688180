//! Domain entities: core data structures

/// A node of the decoded mind map.
///
/// Optional document fields (note, labels, markers, children) normalize to
/// empty values, so inheritance checks reduce to `is_empty()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topic {
    /// Raw title text (may be empty; trimmed during extraction)
    pub title: String,
    /// Plain-text note attached to the node
    pub note: String,
    /// Labels attached to the node
    pub labels: Vec<String>,
    /// Marker identifiers in document order
    pub markers: Vec<String>,
    /// Attached child nodes in document order
    pub children: Vec<Topic>,
}

/// A flat test case record, one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Owning module, always with a single leading `/`
    pub module: String,
    /// Case title after path post-processing
    pub title: String,
    /// First inherited label, or empty
    pub case_type: String,
    /// Priority decoded from the first marker (1 = highest)
    pub priority: u8,
    /// Inherited note
    pub precondition: String,
    /// Numbered step lines joined with newlines
    pub steps: String,
    /// Numbered expectation lines joined with newlines
    pub expects: String,
}
