//! Worker records and the `;`-delimited store-line codec.
//!
//! Parsing and formatting of single lines only; file access lives in
//! [`crate::io::store`].

/// Fields per store line: `id;name;position;salary`.
pub const FIELD_COUNT: usize = 4;

const DELIMITER: char = ';';

/// One employee as held in a registry and persisted one-per-line.
///
/// `id` is operator-supplied and never validated: duplicates are accepted
/// silently, and lookups return the first match in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub position: String,
    /// No bounds enforced; zero or negative salaries are stored as given.
    pub salary: f64,
}

impl Worker {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: position.into(),
            salary,
        }
    }

    /// Render as one store line. Salary uses `f64` Display formatting,
    /// so whole amounts carry no decimal point (`1000`, not `1000.0`).
    pub fn to_line(&self) -> String {
        format!(
            "{};{};{};{}",
            self.id, self.name, self.position, self.salary
        )
    }
}

/// Why a store line could not be decoded into a [`Worker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line did not split into exactly [`FIELD_COUNT`] fields.
    FieldCount(usize),
    /// Four fields, but the salary field is not a number.
    Salary(String),
}

/// Decode one store line.
pub fn parse_line(line: &str) -> Result<Worker, LineError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(LineError::FieldCount(fields.len()));
    }
    let salary: f64 = fields[3]
        .parse()
        .map_err(|_| LineError::Salary(fields[3].to_string()))?;
    Ok(Worker {
        id: fields[0].to_string(),
        name: fields[1].to_string(),
        position: fields[2].to_string(),
        salary,
    })
}
