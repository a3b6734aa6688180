//! Step and expectation compilation
//!
//! A case node's children are its test steps; each step's children are the
//! expected results for that step. Both lists carry 1-based numbering.

use crate::domain::entities::Topic;

/// Compile a case node's children into (steps, expects) text blocks.
///
/// Step lines are `"<i>. <title>"` where `i` counts ALL children, so a child
/// with a blank title leaves a gap in the numbering instead of shifting later
/// steps. Expectation lines are `"<i>. <text>"`, unless the step title itself
/// contains a `.` — then the text before the first `.` replaces `i`, which
/// lets authors pin expectations to an explicit step number
/// (`"3.Close file"` yields `"3.1. ..."`).
pub fn compile_steps(children: &[Topic]) -> (String, String) {
    let mut steps = Vec::new();
    let mut expects = Vec::new();

    for (i, step_node) in children.iter().enumerate() {
        let i = i + 1;
        let step = step_node.title.trim();
        if step.is_empty() {
            continue;
        }
        steps.push(format!("{}. {}", i, step));

        for (j, expect_node) in step_node.children.iter().enumerate() {
            let j = j + 1;
            let expect = expect_node.title.trim();
            if expect.is_empty() {
                continue;
            }
            match step.split_once('.') {
                Some((step_num, _)) => expects.push(format!("{}.{}. {}", step_num, j, expect)),
                None => expects.push(format!("{}. {}", i, expect)),
            }
        }
    }

    (steps.join("\n"), expects.join("\n"))
}
