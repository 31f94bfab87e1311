//! Interactive command handler
//!
//! Walks the user through the same steps as the calculator form: set the
//! number of courses, fill in each grade and credit value, then calculate.

use gpa_calc::core::models::{CourseField, CourseSheet};
use gpa_calc::{debug, Cgpa, CreditPolicy, GpaError, Grade};
use std::io::{self, BufRead, Write};

/// Run the interactive command on stdin/stdout.
///
/// # Errors
/// Returns a printable message on I/O failure or invalid input
pub fn run(policy: CreditPolicy) -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match run_session(&mut input, &mut output, policy) {
        Ok(None) => {
            println!("No courses entered.");
            Ok(())
        }
        Ok(Some(Ok(cgpa))) => {
            println!("Your CGPA is: {cgpa}");
            Ok(())
        }
        Ok(Some(Err(err))) => Err(format!("✗ {}", err.user_message())),
        Err(e) => Err(format!("✗ Failed to read input: {e}")),
    }
}

/// Prompt for a course count and every entry, then calculate
///
/// Returns `None` when the count is zero (nothing to calculate). Grades are
/// upper-cased before they are stored, so `a+` is read as `A+`. End of input
/// leaves the remaining fields blank.
///
/// # Errors
/// Returns an error if reading or writing fails
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    policy: CreditPolicy,
) -> io::Result<Option<Result<Cgpa, GpaError>>> {
    let count = CourseSheet::parse_count(&prompt(input, output, "Enter the number of courses: ")?);
    let mut sheet = CourseSheet::with_count(count);
    if !sheet.can_calculate() {
        return Ok(None);
    }

    let symbols: Vec<&str> = Grade::ALL.iter().map(|g| g.symbol()).collect();
    let grade_hint = symbols.join(", ");

    for index in 0..sheet.len() {
        let grade = prompt(
            input,
            output,
            &format!("Course {} grade ({grade_hint}): ", index + 1),
        )?;
        let credits = prompt(input, output, &format!("Course {} credits: ", index + 1))?;

        sheet
            .edit(index, CourseField::Grade, &grade.to_uppercase())
            .and_then(|()| sheet.edit(index, CourseField::Credits, &credits))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    }

    debug!("Interactive sheet: {:?}", sheet.entries());
    Ok(Some(sheet.calculate(policy)))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<String> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
