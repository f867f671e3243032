//! Grade table rendering

use std::io::{self, Write};

use crate::record::Student;

const RULE: &str = "==================================================================";

/// Write the grade table for `students`
///
/// Callers are expected to skip this for an empty roster.
pub fn render_table<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "| {:<10} | {:<7} | {:<7} | {:<4} | {:<5} | {:<8} | {:<4} |",
        "Name", "Korean", "English", "Math", "Total", "Average", "Rank"
    )?;
    writeln!(out, "{}", RULE)?;

    for student in students {
        writeln!(out, "{}", format_row(student))?;
    }

    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// One table row
pub fn format_row(student: &Student) -> String {
    format!(
        "| {:<10} | {:<7} | {:<7} | {:<4} | {:<5} | {:<8.2} | {:<4} |",
        student.name,
        student.korean,
        student.english,
        student.math,
        student.total,
        student.average,
        student.rank
    )
}
