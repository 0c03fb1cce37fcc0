mod common;

use common::{StepClock, names};
use std::io::Cursor;
use towersort::prelude::*;
use towersort::{CAPACITY, Driver};

fn run_script(script: &str) -> (Session<StepClock>, String) {
    let session = Session::with_clock(StepClock::new());
    let mut driver = Driver::with_session(Cursor::new(script.to_string()), Vec::new(), session);
    driver.run().unwrap();
    let (session, output) = driver.into_parts();
    (session, String::from_utf8(output).unwrap())
}

#[test]
fn test_register_then_search_with_auto_sort() {
    let script = "1\n3\nZeta\ncore\n3\nAlpha\nhull\n9\nMid\ncore\n15\n5\n5\ny\nalpha\n0\n";
    let (session, out) = run_script(script);

    assert!(out.contains("Invalid value. Try again."));
    assert!(out.contains("Registration complete: 3 components."));
    assert!(out.contains("Warning: binary search requires the components to be sorted by NAME."));
    assert!(out.contains("Bubble Sort by NAME complete: comparisons = 3, time = 0.000001 s"));
    assert!(out.contains("Component found at position 0 (ID 1):"));
    assert!(out.contains("Name: Alpha | Type: hull | Priority: 9"));
    assert!(out.contains("Binary search: comparisons = 2, time = 0.000001 s"));
    assert!(out.contains("Good luck escaping!"));

    assert!(session.is_sorted_by_name());
    assert_eq!(names(session.components()), vec!["Alpha", "Mid", "Zeta"]);
}

#[test]
fn test_sort_menu_entries() {
    let script = "1\n3\nZeta\ncore\n3\nAlpha\nhull\n9\nMid\ncore\n5\n4\n3\n0\n";
    let (session, out) = run_script(script);

    assert!(out.contains("Selection Sort by PRIORITY complete: comparisons = 3"));
    assert!(out.contains("Insertion Sort by TYPE complete: comparisons = 3"));
    assert!(!session.is_sorted_by_name());
    // Priority order [Alpha, Mid, Zeta], then stable by type.
    assert_eq!(names(session.components()), vec!["Mid", "Zeta", "Alpha"]);
}

#[test]
fn test_search_declined_when_unsorted() {
    let script = "1\n2\nb\nx\n1\na\nx\n2\n5\nn\n0\n";
    let (session, out) = run_script(script);

    assert!(out.contains("Search cancelled. Sort by NAME before using binary search."));
    assert!(!out.contains("Binary search:"));
    assert_eq!(names(session.components()), vec!["b", "a"]);
}

#[test]
fn test_search_missing_key() {
    let script = "1\n2\nb\nx\n1\na\nx\n2\n2\n5\nomega\n0\n";
    let (_, out) = run_script(script);

    assert!(out.contains("Component 'omega' not found."));
    assert!(out.contains("Binary search: comparisons = 2"));
}

#[test]
fn test_empty_collection_messages() {
    let (_, out) = run_script("2\n3\n4\n5\n6\n0\n");
    assert_eq!(out.matches("No components registered.").count(), 4);
    assert!(out.contains("[empty]"));
}

#[test]
fn test_invalid_menu_input() {
    let (_, out) = run_script("abc\n9\n-1\n0\n");
    assert_eq!(out.matches("Invalid input.").count(), 1);
    assert_eq!(out.matches("Invalid option.").count(), 2);
}

#[test]
fn test_defaults_for_empty_fields() {
    let (session, out) = run_script("1\n1\n\n\n7\n0\n");
    let component = session.get(0).unwrap();
    assert_eq!(component.name(), "SEM_NOME");
    assert_eq!(component.kind(), "GENERIC");
    assert_eq!(component.priority(), 7);
    assert!(out.contains("SEM_NOME"));
}

#[test]
fn test_invalid_quantity_clears_collection() {
    // Register "keep", sort it by name, then abort a second registration.
    let (session, out) = run_script("1\n1\nkeep\nx\n2\n2\n1\nzero\n0\n");
    assert_eq!(out.matches("Invalid input. Registration aborted.").count(), 1);
    assert!(session.components().is_empty());
    assert!(!session.is_sorted_by_name());
    assert!(out.ends_with("Good luck escaping!\n"));
}

#[test]
fn test_zero_quantity_then_search_reports_empty() {
    let (session, out) = run_script("1\n1\nkeep\nx\n2\n1\n0\n5\n0\n");
    assert!(session.components().is_empty());
    assert!(out.contains("[empty]"));
    assert!(out.contains("No components registered."));
}

#[test]
fn test_quantity_clamped_to_capacity() {
    let mut script = String::from("1\n25\n");
    for i in 0..CAPACITY {
        script.push_str(&format!("part-{i}\nhull\n{}\n", i % 10 + 1));
    }
    script.push_str("0\n");

    let (session, out) = run_script(&script);
    assert!(out.contains("Registration complete: 20 components."));
    assert_eq!(session.components().len(), CAPACITY);
}

#[test]
fn test_end_of_input_stops_cleanly() {
    let (session, out) = run_script("1\n2\nonly\nx\n");
    // Input ran out mid-registration: nothing is registered.
    assert!(session.components().is_empty());
    assert!(!out.contains("Good luck escaping!"));

    let (_, out) = run_script("");
    assert!(out.contains("Choice: "));
}
