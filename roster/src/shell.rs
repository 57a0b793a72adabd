//! Interactive menu loop over the two registries.
//!
//! Generic over the input and output streams so tests can drive a whole
//! session from a buffer; the binary passes locked stdin/stdout.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::core::command::{self, ArgError, Choice, Destination};
use crate::registry::{self, Registry};

/// Index of the enterprise the menu operates on.
pub const PRIMARY: usize = 0;
/// Index of the enterprise workers can be transferred to.
pub const SECONDARY: usize = 1;

const MENU: &str = "Choose an action:
1. Hire a worker
2. Fire a worker
3. Change a worker's position
4. Change a worker's salary
5. Transfer a worker to the other enterprise
6. View workers
7. Exit
";

const NOT_FOUND: &str = "No worker with that id.";
const INVALID_DATA: &str = "Invalid data.";
const INVALID_SALARY: &str = "Invalid salary.";

/// Drive the menu loop until the operator exits or input is exhausted.
///
/// Each iteration prints the menu, reads one choice, and dispatches exactly
/// one registry operation. "Not found" and malformed input are reported and
/// the loop continues; registry I/O errors are reported the same way without
/// touching the in-memory lists further. EOF ends the session cleanly.
pub fn run_session<R: BufRead, W: Write>(
    registries: &mut [Registry; 2],
    mut input: R,
    out: &mut W,
) -> Result<()> {
    loop {
        write!(out, "{}", MENU)?;
        out.flush()?;
        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };
        let Some(choice) = command::parse_choice(&line) else {
            writeln!(out, "Invalid choice, try again.")?;
            continue;
        };
        match choice {
            Choice::Hire => {
                writeln!(out, "Enter id, name, position and salary (space separated):")?;
                out.flush()?;
                let Some(args) = read_line(&mut input)? else {
                    return Ok(());
                };
                match command::parse_hire(&args) {
                    Ok(worker) => match registries[PRIMARY].hire(worker) {
                        Ok(()) => writeln!(out, "Worker hired.")?,
                        Err(err) => writeln!(out, "Error: {:#}", err)?,
                    },
                    Err(ArgError::Salary(_)) => writeln!(out, "{}", INVALID_SALARY)?,
                    Err(ArgError::TokenCount { .. }) => writeln!(out, "{}", INVALID_DATA)?,
                }
            }
            Choice::Fire => {
                writeln!(out, "Enter the id of the worker to fire:")?;
                out.flush()?;
                let Some(args) = read_line(&mut input)? else {
                    return Ok(());
                };
                match registries[PRIMARY].fire(args.trim()) {
                    Ok(Some(_)) => writeln!(out, "Worker fired.")?,
                    Ok(None) => writeln!(out, "{}", NOT_FOUND)?,
                    Err(err) => writeln!(out, "Error: {:#}", err)?,
                }
            }
            Choice::ChangePosition => {
                writeln!(out, "Enter the worker id and the new position (space separated):")?;
                out.flush()?;
                let Some(args) = read_line(&mut input)? else {
                    return Ok(());
                };
                match command::parse_change_position(&args) {
                    Ok((id, position)) => {
                        match registries[PRIMARY].change_position(&id, &position) {
                            Ok(true) => writeln!(out, "Position changed.")?,
                            Ok(false) => writeln!(out, "{}", NOT_FOUND)?,
                            Err(err) => writeln!(out, "Error: {:#}", err)?,
                        }
                    }
                    Err(_) => writeln!(out, "{}", INVALID_DATA)?,
                }
            }
            Choice::ChangeSalary => {
                writeln!(out, "Enter the worker id and the new salary (space separated):")?;
                out.flush()?;
                let Some(args) = read_line(&mut input)? else {
                    return Ok(());
                };
                match command::parse_change_salary(&args) {
                    Ok((id, salary)) => match registries[PRIMARY].change_salary(&id, salary) {
                        Ok(true) => writeln!(out, "Salary changed.")?,
                        Ok(false) => writeln!(out, "{}", NOT_FOUND)?,
                        Err(err) => writeln!(out, "Error: {:#}", err)?,
                    },
                    Err(ArgError::Salary(_)) => writeln!(out, "{}", INVALID_SALARY)?,
                    Err(ArgError::TokenCount { .. }) => writeln!(out, "{}", INVALID_DATA)?,
                }
            }
            Choice::Transfer => {
                writeln!(
                    out,
                    "Enter the worker id and the destination tag (1 = primary, anything else = branch):"
                )?;
                out.flush()?;
                let Some(args) = read_line(&mut input)? else {
                    return Ok(());
                };
                match command::parse_transfer(&args) {
                    Ok((id, destination)) => {
                        let dest = match destination {
                            Destination::Primary => PRIMARY,
                            Destination::Secondary => SECONDARY,
                        };
                        match registry::transfer(registries.as_mut_slice(), PRIMARY, dest, &id) {
                            Ok(true) => writeln!(out, "Worker transferred.")?,
                            Ok(false) => writeln!(out, "{}", NOT_FOUND)?,
                            Err(err) => writeln!(out, "Error: {:#}", err)?,
                        }
                    }
                    Err(_) => writeln!(out, "{}", INVALID_DATA)?,
                }
            }
            Choice::List => {
                writeln!(out, "Workers:")?;
                for worker in registries[PRIMARY].workers() {
                    writeln!(
                        out,
                        "\nID: {}\nName: {}\nPosition: {}\nSalary: {}",
                        worker.id, worker.name, worker.position, worker.salary
                    )?;
                }
                writeln!(out)?;
            }
            Choice::Exit => return Ok(()),
        }
    }
}

/// Read one line, `None` on EOF.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("read operator input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
