//! Menu parsing for the interactive shell.
//!
//! One menu choice per loop iteration, then (for most choices) one argument
//! line split on whitespace. Pure functions so the token contracts are
//! testable without I/O.

use crate::core::record::Worker;

/// Top-level menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Hire,
    Fire,
    ChangePosition,
    ChangeSalary,
    Transfer,
    List,
    Exit,
}

/// Map a menu line to a [`Choice`]. `None` means "invalid choice, re-prompt".
pub fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim() {
        "1" => Some(Choice::Hire),
        "2" => Some(Choice::Fire),
        "3" => Some(Choice::ChangePosition),
        "4" => Some(Choice::ChangeSalary),
        "5" => Some(Choice::Transfer),
        "6" => Some(Choice::List),
        "7" => Some(Choice::Exit),
        _ => None,
    }
}

/// Which registry a transfer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Primary,
    Secondary,
}

/// Why an argument line was rejected before reaching the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// Wrong number of whitespace-separated tokens.
    TokenCount { expected: usize, got: usize },
    /// A salary token that does not parse as a number.
    Salary(String),
}

/// Parse hire arguments: `id name position salary`.
pub fn parse_hire(line: &str) -> Result<Worker, ArgError> {
    let tokens = split(line, 4)?;
    let salary: f64 = tokens[3]
        .parse()
        .map_err(|_| ArgError::Salary(tokens[3].to_string()))?;
    Ok(Worker::new(tokens[0], tokens[1], tokens[2], salary))
}

/// Parse change-position arguments: `id new_position`.
pub fn parse_change_position(line: &str) -> Result<(String, String), ArgError> {
    let tokens = split(line, 2)?;
    Ok((tokens[0].to_string(), tokens[1].to_string()))
}

/// Parse change-salary arguments: `id new_salary`.
pub fn parse_change_salary(line: &str) -> Result<(String, f64), ArgError> {
    let tokens = split(line, 2)?;
    let salary: f64 = tokens[1]
        .parse()
        .map_err(|_| ArgError::Salary(tokens[1].to_string()))?;
    Ok((tokens[0].to_string(), salary))
}

/// Parse transfer arguments: `id destination_tag`.
///
/// Tag `"1"` selects the primary registry; any other tag the secondary,
/// matching the two-enterprise menu contract.
pub fn parse_transfer(line: &str) -> Result<(String, Destination), ArgError> {
    let tokens = split(line, 2)?;
    let destination = if tokens[1] == "1" {
        Destination::Primary
    } else {
        Destination::Secondary
    };
    Ok((tokens[0].to_string(), destination))
}

fn split(line: &str, expected: usize) -> Result<Vec<&str>, ArgError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(ArgError::TokenCount {
            expected,
            got: tokens.len(),
        });
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_choice_maps_menu_numbers() {
        assert_eq!(parse_choice("1"), Some(Choice::Hire));
        assert_eq!(parse_choice("7"), Some(Choice::Exit));
        assert_eq!(parse_choice(" 6 "), Some(Choice::List));
    }

    #[test]
    fn parse_choice_rejects_everything_else() {
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("8"), None);
        assert_eq!(parse_choice("hire"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn parse_hire_builds_a_worker() {
        let worker = parse_hire("E1 Ann Clerk 1000").expect("parse");
        assert_eq!(worker.id, "E1");
        assert_eq!(worker.name, "Ann");
        assert_eq!(worker.position, "Clerk");
        assert_eq!(worker.salary, 1000.0);
    }

    #[test]
    fn parse_hire_rejects_wrong_token_count() {
        assert_eq!(
            parse_hire("E1 Ann Clerk"),
            Err(ArgError::TokenCount {
                expected: 4,
                got: 3
            })
        );
    }

    #[test]
    fn parse_hire_rejects_bad_salary() {
        assert_eq!(
            parse_hire("E1 Ann Clerk lots"),
            Err(ArgError::Salary("lots".to_string()))
        );
    }

    #[test]
    fn parse_change_salary_parses_amount() {
        assert_eq!(
            parse_change_salary("E1 1500"),
            Ok(("E1".to_string(), 1500.0))
        );
    }

    #[test]
    fn parse_transfer_tag_one_is_primary() {
        let (id, destination) = parse_transfer("E1 1").expect("parse");
        assert_eq!(id, "E1");
        assert_eq!(destination, Destination::Primary);
    }

    #[test]
    fn parse_transfer_any_other_tag_is_secondary() {
        assert_eq!(
            parse_transfer("E1 2").expect("parse").1,
            Destination::Secondary
        );
        assert_eq!(
            parse_transfer("E1 branch").expect("parse").1,
            Destination::Secondary
        );
    }
}
