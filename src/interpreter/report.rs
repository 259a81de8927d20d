use std::fmt;

use num_bigint::BigInt;

/// The final value of every assigned variable, in order of first assignment.
///
/// Its `Display` form is the program's output line: `name = value` pairs
/// joined by single spaces, with lower-cased names. An empty report renders
/// as an empty string.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use varcalc::interpreter::report::Report;
///
/// let report = Report::from(vec![("x".to_string(), BigInt::from(3)),
///                                ("y".to_string(), BigInt::from(-2))]);
/// assert_eq!(report.to_string(), "x = 3 y = -2");
/// assert_eq!(Report::default().to_string(), "");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    entries: Vec<(String, BigInt)>,
}

impl Report {
    /// The `(name, value)` pairs in output order.
    #[must_use]
    pub fn entries(&self) -> &[(String, BigInt)] {
        &self.entries
    }

    /// Returns `true` if no variable was assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the report as a program of literal assignments.
    ///
    /// Interpreting the result yields this same report again.
    #[must_use]
    pub fn to_program(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{name} = {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Vec<(String, BigInt)>> for Report {
    fn from(entries: Vec<(String, BigInt)>) -> Self {
        Self { entries }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}
