//! Priority marker decoding

/// Decode a test case priority from a marker identifier.
///
/// Accepts the XMind marker ids (`priority-1`..`priority-4`) plus the short
/// spellings some authors use as plain markers. Unknown markers yield `None`,
/// which means the carrying node is not a test case.
pub fn priority_from_marker(marker: &str) -> Option<u8> {
    match marker {
        "priority-1" | "p1" | "1" => Some(1),
        "priority-2" | "p2" | "2" => Some(2),
        "priority-3" | "p3" | "3" => Some(3),
        "priority-4" | "p4" | "4" => Some(4),
        _ => None,
    }
}
