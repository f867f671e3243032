//! Tests for the interactive shell
//!
//! These tests verify:
//! - Menu parsing and invalid choices
//! - Add-student flow with name and score re-prompting
//! - Report table output and empty notice
//! - Save/load through the menu
//! - Exit and end-of-input handling

use std::io::Cursor;
use std::path::Path;

use gradebook::shell::{format_row, prompt_score, read_line, render_table, MenuChoice, Shell};
use gradebook::{Config, Gradebook, GradebookError, Student, Subject};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

/// Run a full shell session over `input`; returns the output and the session
fn run_session(data_file: &Path, autoload: bool, input: &str) -> (String, Gradebook) {
    let config = Config::builder()
        .data_file(data_file)
        .autoload(autoload)
        .build();

    let mut output: Vec<u8> = Vec::new();
    let mut shell = Shell::new(Gradebook::new(config), input.as_bytes(), &mut output);
    shell.run().unwrap();
    let gradebook = shell.into_gradebook();

    (String::from_utf8(output).unwrap(), gradebook)
}

const SCENARIO_INPUT: &str = "2\nKim\n90\n80\n70\n2\nLee\n90\n80\n70\n2\nPark\n50\n60\n70\n";

// =============================================================================
// Menu Parsing Tests
// =============================================================================

#[test]
fn test_menu_choice_parse() {
    assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::Load);
    assert_eq!(MenuChoice::parse(" 3 \r").unwrap(), MenuChoice::Save);
    assert_eq!(MenuChoice::parse("5").unwrap(), MenuChoice::Exit);
    assert_eq!(MenuChoice::Report.number(), 4);
}

#[test]
fn test_menu_choice_out_of_range() {
    assert!(matches!(
        MenuChoice::parse("0"),
        Err(GradebookError::InvalidMenuChoice(0))
    ));
    assert!(matches!(
        MenuChoice::parse("6"),
        Err(GradebookError::InvalidMenuChoice(6))
    ));
}

#[test]
fn test_menu_choice_non_numeric() {
    assert!(matches!(
        MenuChoice::parse("load"),
        Err(GradebookError::InvalidInput(_))
    ));
    assert!(matches!(
        MenuChoice::parse(""),
        Err(GradebookError::InvalidInput(_))
    ));
}

// =============================================================================
// Prompt Tests
// =============================================================================

#[test]
fn test_read_line_strips_terminator() {
    let mut input = Cursor::new("first\r\nsecond\n");

    assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("first"));
    assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("second"));
    assert_eq!(read_line(&mut input).unwrap(), None);
}

#[test]
fn test_prompt_score_reprompts_until_valid() {
    let mut input = Cursor::new("101\n-3\nninety\n 90 \n");
    let mut output: Vec<u8> = Vec::new();

    let score = prompt_score(&mut input, &mut output, Subject::English).unwrap();

    assert_eq!(score, Some(90));
    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("English score: "));
    assert_eq!(text.matches("Invalid score").count(), 3);
}

#[test]
fn test_prompt_score_end_of_input() {
    let mut input = Cursor::new("200\n");
    let mut output: Vec<u8> = Vec::new();

    let score = prompt_score(&mut input, &mut output, Subject::Math).unwrap();

    assert_eq!(score, None);
}

// =============================================================================
// Table Tests
// =============================================================================

#[test]
fn test_format_row() {
    let student = Student {
        name: "Kim".to_string(),
        korean: 90,
        english: 80,
        math: 70,
        total: 240,
        average: 80.0,
        rank: 1,
    };

    assert_eq!(
        format_row(&student),
        "| Kim        | 90      | 80      | 70   | 240   | 80.00    | 1    |"
    );
}

#[test]
fn test_render_table_has_header_and_rows() {
    let students = vec![Student::new("A", 1, 2, 3).unwrap(), Student::new("B", 4, 5, 6).unwrap()];
    let mut output: Vec<u8> = Vec::new();

    render_table(&mut output, &students).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("| Name "));
    assert!(text.contains("| Average "));
    assert_eq!(text.lines().filter(|l| l.starts_with("| A ")).count(), 1);
    assert_eq!(text.lines().filter(|l| l.starts_with("| B ")).count(), 1);
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_session_add_and_report() {
    let temp = TempDir::new().unwrap();
    let input = format!("{}4\n5\n", SCENARIO_INPUT);

    let (output, gradebook) = run_session(&temp.path().join("students.dat"), false, &input);

    assert!(output.contains("Student 'Kim' added to the roster"));
    assert!(output.contains("| Kim        | 90      | 80      | 70   | 240   | 80.00    | 1    |"));
    assert!(output.contains("| Lee        | 90      | 80      | 70   | 240   | 80.00    | 1    |"));
    assert!(output.contains("| Park       | 50      | 60      | 70   | 180   | 60.00    | 3    |"));
    assert!(output.contains("Exiting"));
    assert!(!output.contains("Clearing"));

    let ranks: Vec<u32> = gradebook.roster().iter().map(|s| s.rank).collect();
    assert_eq!(ranks, vec![1, 1, 3]);
}

#[test]
fn test_session_rejects_out_of_range_scores() {
    let temp = TempDir::new().unwrap();
    let input = "2\nKim\n101\n-1\nabc\n90\n150\n80\n70\n5\n";

    let (output, gradebook) = run_session(&temp.path().join("students.dat"), false, input);

    assert_eq!(output.matches("Invalid score").count(), 4);
    assert_eq!(gradebook.roster().len(), 1);
    assert_eq!(gradebook.roster().get(0).unwrap().scores(), [90, 80, 70]);
}

#[test]
fn test_session_reprompts_on_empty_name() {
    let temp = TempDir::new().unwrap();
    let input = "2\n   \n\nKim\n1\n2\n3\n5\n";

    let (output, gradebook) = run_session(&temp.path().join("students.dat"), false, input);

    assert_eq!(output.matches("Name must not be empty").count(), 2);
    assert_eq!(gradebook.roster().len(), 1);
    assert_eq!(gradebook.roster().get(0).unwrap().name, "Kim");
}

#[test]
fn test_session_invalid_menu_input() {
    let temp = TempDir::new().unwrap();

    let (output, gradebook) = run_session(&temp.path().join("students.dat"), false, "abc\n9\n5\n");

    assert!(output.contains("Invalid input"));
    assert!(output.contains("Invalid menu choice"));
    assert!(gradebook.roster().is_empty());
}

#[test]
fn test_session_report_on_empty_roster() {
    let temp = TempDir::new().unwrap();

    let (output, _) = run_session(&temp.path().join("students.dat"), false, "4\n5\n");

    assert!(output.contains("No student data to display"));
    assert!(!output.contains("| Name "));
}

#[test]
fn test_session_save_empty_roster() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("students.dat");

    let (output, _) = run_session(&path, false, "3\n5\n");

    assert!(output.contains("No student data to save."));
    assert!(!path.exists());
}

#[test]
fn test_session_save_then_autoload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("students.dat");

    let (output, _) = run_session(&path, false, &format!("{}3\n5\n", SCENARIO_INPUT));
    assert!(output.contains("Saved 3 students"));

    let (output, gradebook) = run_session(&path, true, "5\n");

    assert!(output.contains("3 students in the roster"));
    let names: Vec<&str> = gradebook.roster().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Kim", "Lee", "Park"]);
}

#[test]
fn test_session_autoload_missing_file() {
    let temp = TempDir::new().unwrap();

    let (output, gradebook) = run_session(&temp.path().join("missing.dat"), true, "5\n");

    assert!(output.contains("Starting with an empty roster"));
    assert!(gradebook.roster().is_empty());
}

#[test]
fn test_session_menu_load_replaces_roster() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("students.dat");
    run_session(&path, false, "2\nKim\n1\n2\n3\n3\n5\n");

    let input = "2\nLee\n4\n5\n6\n1\n5\n";
    let (_, gradebook) = run_session(&path, false, input);

    assert_eq!(gradebook.roster().len(), 1);
    assert_eq!(gradebook.roster().get(0).unwrap().name, "Kim");
}

#[test]
fn test_session_ends_on_end_of_input() {
    let temp = TempDir::new().unwrap();

    let (output, gradebook) = run_session(&temp.path().join("students.dat"), false, "2\nKim\n90\n");

    assert!(output.contains("Exiting"));
    assert!(gradebook.roster().is_empty());
}
