//! Tests for CaseExtractor

use rstest::rstest;

use xmind2case::domain::{priority_from_marker, CaseExtractor, TestCase, Topic};

fn node(title: &str) -> Topic {
    Topic {
        title: title.to_string(),
        ..Topic::default()
    }
}

fn case_node(title: &str, marker: &str) -> Topic {
    Topic {
        title: title.to_string(),
        markers: vec![marker.to_string()],
        ..Topic::default()
    }
}

fn root_of(children: Vec<Topic>) -> Topic {
    Topic {
        title: "root".to_string(),
        children,
        ..Topic::default()
    }
}

fn extract(root: &Topic) -> Vec<TestCase> {
    CaseExtractor::new().extract(root)
}

// ============================================================
// CASE EMISSION
// ============================================================

#[test]
fn given_module_with_marked_child_when_extracting_then_emits_full_case() {
    // Arrange
    let mut case = case_node("Valid login", "p1");
    case.labels = vec!["functional".to_string()];
    case.note = "User exists".to_string();
    let mut step = node("Enter credentials");
    step.children = vec![node("Redirected to dashboard")];
    case.children = vec![step];
    let mut module = node("/Login");
    module.children = vec![case];
    let root = root_of(vec![module]);

    // Act
    let cases = extract(&root);

    // Assert
    assert_eq!(cases.len(), 1);
    let case = &cases[0];
    assert_eq!(case.module, "/Login");
    assert_eq!(case.title, "Valid login");
    assert_eq!(case.case_type, "functional");
    assert_eq!(case.priority, 1);
    assert_eq!(case.precondition, "User exists");
    assert_eq!(case.steps, "1. Enter credentials");
    assert_eq!(case.expects, "1. Redirected to dashboard");
}

#[test]
fn given_marked_module_node_when_extracting_then_title_keeps_module_name() {
    // Arrange - the module node itself carries a priority marker
    let module = case_node("/Login", "p1");
    let root = root_of(vec![module]);

    // Act
    let cases = extract(&root);

    // Assert - single-segment path: only the slash is stripped
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].module, "/Login");
    assert_eq!(cases[0].title, "Login");
}

#[test]
fn given_padded_titles_when_extracting_then_titles_are_trimmed() {
    // Arrange
    let mut module = node("  /Login  ");
    module.children = vec![case_node("  Valid login  ", "p1")];
    let root = root_of(vec![module]);

    // Act
    let cases = extract(&root);

    // Assert
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].module, "/Login");
    assert_eq!(cases[0].title, "Valid login");
}

#[test]
fn given_blank_title_node_when_extracting_then_no_path_segment_added() {
    // Arrange - a node whose title trims to nothing sits between module and case
    let mut blank = node("   ");
    blank.children = vec![case_node("Deep case", "p1")];
    let mut module = node("/Login");
    module.children = vec![blank];
    let root = root_of(vec![module]);

    // Act
    let cases = extract(&root);

    // Assert
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].title, "Deep case");
}

#[test]
fn given_same_tree_when_extracting_twice_then_results_are_identical() {
    // Arrange
    let mut module = node("/Login");
    module.children = vec![case_node("Valid login", "p1"), case_node("Lockout", "p2")];
    let root = root_of(vec![module]);

    // Act
    let first = CaseExtractor::new().extract(&root);
    let second = CaseExtractor::new().extract(&root);

    // Assert
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

// ============================================================
// PRUNING, GATING, DEDUPLICATION
// ============================================================

#[test]
fn given_comment_node_when_extracting_then_whole_subtree_is_skipped() {
    // Arrange
    let mut comment = node("  # disabled  ");
    comment.children = vec![case_node("Hidden case", "p1")];
    let mut module = node("/Login");
    module.children = vec![comment];
    let root = root_of(vec![module]);

    // Act
    let cases = extract(&root);

    // Assert
    assert!(cases.is_empty());
}

#[test]
fn given_marked_node_outside_any_module_when_extracting_then_nothing_emitted() {
    // Arrange - no ancestor title starts with '/'
    let mut group = node("Login");
    group.children = vec![case_node("Valid login", "p1")];
    let root = root_of(vec![group, case_node("Top level case", "p1")]);

    // Act
    let cases = extract(&root);

    // Assert
    assert!(cases.is_empty());
}

#[test]
fn given_duplicate_case_paths_when_extracting_then_first_occurrence_wins() {
    // Arrange - identical titles under the same module produce the same key
    let mut first = case_node("Duplicate", "p1");
    first.children = vec![node("First step")];
    let mut second = case_node("Duplicate", "p2");
    second.children = vec![node("Second step")];
    let mut module = node("/Login");
    module.children = vec![first, second];
    let root = root_of(vec![module]);

    // Act
    let cases = extract(&root);

    // Assert
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].priority, 1);
    assert_eq!(cases[0].steps, "1. First step");
}

#[test]
fn given_same_case_title_in_different_modules_when_extracting_then_both_emitted() {
    // Arrange
    let mut login = node("/Login");
    login.children = vec![case_node("Smoke", "p1")];
    let mut search = node("/Search");
    search.children = vec![case_node("Smoke", "p1")];
    let root = root_of(vec![login, search]);

    // Act
    let cases = extract(&root);

    // Assert
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].module, "/Login");
    assert_eq!(cases[1].module, "/Search");
}

// ============================================================
// INHERITANCE
// ============================================================

#[test]
fn given_ancestor_note_and_labels_when_extracting_then_case_inherits_them() {
    // Arrange
    let mut group = node("Account");
    group.children = vec![case_node("Child case", "p2")];
    let mut module = node("/Suite");
    module.note = "Shared precondition".to_string();
    module.labels = vec!["smoke".to_string(), "regression".to_string()];
    module.children = vec![group];
    let root = root_of(vec![module]);

    // Act
    let cases = extract(&root);

    // Assert - first label becomes the case type
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].precondition, "Shared precondition");
    assert_eq!(cases[0].case_type, "smoke");
    assert_eq!(cases[0].title, "Account-Child case");
    assert_eq!(cases[0].priority, 2);
}

#[test]
fn given_own_note_and_labels_when_extracting_then_they_replace_inherited() {
    // Arrange
    let mut case = case_node("Child case", "p1");
    case.note = "Own precondition".to_string();
    case.labels = vec!["regression".to_string()];
    let mut module = node("/Suite");
    module.note = "Shared precondition".to_string();
    module.labels = vec!["smoke".to_string()];
    module.children = vec![case];
    let root = root_of(vec![module]);

    // Act
    let cases = extract(&root);

    // Assert - replacement, not merging
    assert_eq!(cases[0].precondition, "Own precondition");
    assert_eq!(cases[0].case_type, "regression");
}

#[test]
fn given_nested_module_when_extracting_then_path_note_and_labels_restart() {
    // Arrange - inner module sits below an outer module that set everything
    let mut inner = node("/Inner");
    inner.children = vec![case_node("Deep case", "p1")];
    let mut outer = node("/Outer");
    outer.note = "Outer note".to_string();
    outer.labels = vec!["outer".to_string()];
    outer.children = vec![inner];
    let root = root_of(vec![outer]);

    // Act
    let cases = extract(&root);

    // Assert - nothing from the outer module leaks through
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].module, "/Inner");
    assert_eq!(cases[0].title, "Deep case");
    assert_eq!(cases[0].precondition, "");
    assert_eq!(cases[0].case_type, "");
}

#[test]
fn given_case_after_nested_module_subtree_when_extracting_then_latest_module_applies() {
    // Arrange - the current module is walk-wide state, so a sibling visited
    // after a nested module subtree reports that nested module
    let mut nested = node("/Nested");
    nested.children = vec![case_node("Deep", "p1")];
    let mut outer = node("/Outer");
    outer.children = vec![nested, case_node("Sibling", "p1")];
    let root = root_of(vec![outer]);

    // Act
    let cases = extract(&root);

    // Assert
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].module, "/Nested");
    assert_eq!(cases[0].title, "Deep");
    assert_eq!(cases[1].module, "/Nested");
    assert_eq!(cases[1].title, "Sibling");
}

// ============================================================
// PRIORITY MARKERS
// ============================================================

#[rstest]
#[case("priority-1", Some(1))]
#[case("priority-2", Some(2))]
#[case("priority-3", Some(3))]
#[case("priority-4", Some(4))]
#[case("p1", Some(1))]
#[case("p2", Some(2))]
#[case("p3", Some(3))]
#[case("p4", Some(4))]
#[case("1", Some(1))]
#[case("2", Some(2))]
#[case("3", Some(3))]
#[case("4", Some(4))]
#[case("p5", None)]
#[case("priority-5", None)]
#[case("star", None)]
#[case("", None)]
fn given_marker_when_decoding_priority_then_expected_value(
    #[case] marker: &str,
    #[case] expected: Option<u8>,
) {
    assert_eq!(priority_from_marker(marker), expected);
}

#[test]
fn given_unknown_first_marker_when_extracting_then_node_is_not_a_case() {
    // Arrange - only the first marker is consulted
    let mut starred = node("Starred");
    starred.markers = vec!["star".to_string(), "p1".to_string()];
    let mut module = node("/Login");
    module.children = vec![starred];
    let root = root_of(vec![module]);

    // Act
    let cases = extract(&root);

    // Assert
    assert!(cases.is_empty());
}

#[test]
fn given_known_first_marker_when_extracting_then_later_markers_ignored() {
    // Arrange
    let mut case = node("Flagged");
    case.markers = vec!["p3".to_string(), "star".to_string()];
    let mut module = node("/Login");
    module.children = vec![case];
    let root = root_of(vec![module]);

    // Act
    let cases = extract(&root);

    // Assert
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].priority, 3);
}
