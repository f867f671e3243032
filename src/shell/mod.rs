//! Shell Module
//!
//! Interactive numbered-menu front end for a [`Gradebook`].
//!
//! ## Menu
//! 1. Load students from the data file
//! 2. Add a student
//! 3. Save students to the data file
//! 4. Show grades (total, average, rank)
//! 5. Exit
//!
//! The shell is generic over its input and output so it runs on
//! stdin/stdout as well as on in-memory buffers. Every recoverable error is
//! reported to the user and the menu is shown again; only a failure to read
//! input or write output ends the loop with an error.

mod menu;
mod prompt;
mod table;

pub use menu::MenuChoice;
pub use prompt::{prompt_name, prompt_score, read_line};
pub use table::{format_row, render_table};

use std::io::{BufRead, Write};

use crate::error::{GradebookError, Result};
use crate::gradebook::{Gradebook, SaveOutcome};
use crate::record::{Subject, SUBJECT_COUNT};

/// Drives a gradebook from line-based user input
pub struct Shell<R, W> {
    /// The session being driven
    gradebook: Gradebook,

    /// User input (one command or value per line)
    input: R,

    /// Prompts, messages, and tables
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell around a gradebook
    pub fn new(gradebook: Gradebook, input: R, output: W) -> Self {
        Self {
            gradebook,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// Performs the initial load first when the config asks for it.
    pub fn run(&mut self) -> Result<()> {
        if self.gradebook.config().autoload {
            self.load()?;
        }

        loop {
            self.display_menu()?;

            let Some(line) = read_line(&mut self.input)? else {
                tracing::debug!("Input closed, leaving menu loop");
                self.farewell()?;
                return Ok(());
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(GradebookError::InvalidMenuChoice(n)) => {
                    tracing::debug!("Rejected menu choice {}", n);
                    writeln!(
                        self.output,
                        "\n--- Invalid menu choice. Choose between 1 and 5. ---"
                    )?;
                    continue;
                }
                Err(_) => {
                    writeln!(
                        self.output,
                        "\n--- Invalid input. Enter a number between 1 and 5. ---"
                    )?;
                    continue;
                }
            };

            match choice {
                MenuChoice::Load => self.load()?,
                MenuChoice::AddStudent => self.add_student()?,
                MenuChoice::Save => self.save()?,
                MenuChoice::Report => self.report()?,
                MenuChoice::Exit => {
                    self.farewell()?;
                    return Ok(());
                }
            }
        }
    }

    /// The session being driven
    pub fn gradebook(&self) -> &Gradebook {
        &self.gradebook
    }

    /// Give the gradebook back, e.g. to close it
    pub fn into_gradebook(self) -> Gradebook {
        self.gradebook
    }

    // =========================================================================
    // Menu Handlers
    // =========================================================================

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n[Menu]")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        writeln!(self.output, "-------------------")?;
        write!(self.output, "Choose (1-5): ")?;
        self.output.flush()?;
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let path = self.gradebook.data_file().display().to_string();

        match self.gradebook.load() {
            Ok(report) => {
                writeln!(
                    self.output,
                    "--- Loaded '{}'. {} students in the roster. ---",
                    path, report.records
                )?;
            }
            Err(e @ GradebookError::Open { .. }) => {
                tracing::warn!("{}", e);
                writeln!(
                    self.output,
                    "--- Cannot open '{}'. Starting with an empty roster. ---",
                    path
                )?;
            }
            Err(e) => {
                tracing::warn!("Load of {} stopped early: {}", path, e);
                writeln!(
                    self.output,
                    "--- Failed to read '{}': {}. {} students in the roster. ---",
                    path,
                    e,
                    self.gradebook.roster().len()
                )?;
            }
        }
        Ok(())
    }

    fn add_student(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- New student ---")?;

        let Some(name) = prompt_name(&mut self.input, &mut self.output)? else {
            return Ok(());
        };

        let mut scores = [0i32; SUBJECT_COUNT];
        for (slot, subject) in scores.iter_mut().zip(Subject::ALL) {
            match prompt_score(&mut self.input, &mut self.output, subject)? {
                Some(score) => *slot = score,
                None => return Ok(()),
            }
        }

        let [korean, english, math] = scores;
        match self.gradebook.add_student(&name, korean, english, math) {
            Ok(student) => {
                let name = student.name.clone();
                writeln!(
                    self.output,
                    "Student '{}' added to the roster (choose 3 to save).",
                    name
                )?;
            }
            Err(e) => {
                tracing::warn!("Rejected new student: {}", e);
                writeln!(self.output, "--- Student not added: {} ---", e)?;
            }
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let path = self.gradebook.data_file().display().to_string();

        match self.gradebook.save() {
            Ok(SaveOutcome::NothingToSave) => {
                writeln!(self.output, "No student data to save.")?;
            }
            Ok(SaveOutcome::Written { records }) => {
                writeln!(
                    self.output,
                    "\n--- Saved {} students to '{}'. ---",
                    records, path
                )?;
            }
            Err(e) => {
                tracing::warn!("Save failed: {}", e);
                writeln!(self.output, "--- Cannot save to '{}': {} ---", path, e)?;
            }
        }
        Ok(())
    }

    fn report(&mut self) -> Result<()> {
        match self.gradebook.report() {
            Some(students) => render_table(&mut self.output, students)?,
            None => writeln!(
                self.output,
                "\n--- No student data to display (use menu 1 or 2). ---"
            )?,
        }
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Exiting. ---")?;
        self.output.flush()?;
        Ok(())
    }
}
