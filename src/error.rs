//! Error types shared by the tables, the assembler and the ROM image reader.

use std::error::Error;
use std::fmt::{Display, self};
use nom::error::ErrorKind;

/// The error produced when a source line refers to a memory location that the
/// [MemoryTable](crate::memory::MemoryTable) does not contain.
///
/// This is the only error the translation itself can fail with. No partial ROM image
/// is produced once it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    UnresolvedMemoryReference {
        /// The name that could not be resolved.
        name: String,
        /// The 1-based line number of the offending source line.
        line: usize,
        /// A similarly named memory location, if one exists.
        suggestion: Option<String>,
    },
}

impl AssemblyError {
    /// The 1-based source line the error occurred on.
    pub fn line(&self) -> usize {
        match self {
            AssemblyError::UnresolvedMemoryReference { line, .. } => *line,
        }
    }
}

impl Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssemblyError::UnresolvedMemoryReference { name, line, suggestion } => {
                write!(f, "line {}: no memory location named '{}'", line, name)?;

                if let Some(suggestion) = suggestion {
                    write!(f, ", did you mean '{}'?", suggestion)?;
                }

                Ok(())
            },
        }
    }
}

impl Error for AssemblyError {}

/// A value that needs more bits than an instruction field has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOverflow {
    pub value: usize,
}

impl Display for FieldOverflow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "value {} does not fit in a {}-bit field", self.value, crate::instruction::FIELD_WIDTH)
    }
}

impl Error for FieldOverflow {}

/// Reasons for rejecting an operator or memory table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    EmptySymbol,
    DuplicateSymbol(String),
    DuplicateCode {
        first: String,
        second: String,
    },
    MissingCopyOperator,
    EmptyName,
    DuplicateName(String),
    TooManyLocations {
        count: usize,
    },
}

impl Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableError::EmptySymbol => write!(f, "operator symbols can not be empty"),
            TableError::DuplicateSymbol(symbol) => write!(f, "operator '{}' is defined twice", symbol),
            TableError::DuplicateCode { first, second } =>
                write!(f, "operators '{}' and '{}' share a function code", first, second),
            TableError::MissingCopyOperator =>
                write!(f, "the operator table has no '{}' operator", crate::operator::COPY_OPERATOR),
            TableError::EmptyName => write!(f, "memory location names can not be empty"),
            TableError::DuplicateName(name) => write!(f, "memory location '{}' is defined twice", name),
            TableError::TooManyLocations { count } =>
                write!(f, "{} memory locations do not fit in {} addresses", count, crate::instruction::FIELD_CAPACITY),
        }
    }
}

impl Error for TableError {}

#[derive(Debug, Clone)]
enum InnerError<Kind> {
    Incomplete,
    Context(&'static str),
    Other(Kind),
    Nom(ErrorKind),
}

impl<Kind: Display> fmt::Display for InnerError<Kind> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InnerError::Context(ctx) => write!(f, "invalid {}", ctx),
            InnerError::Nom(_err) => write!(f, "unexpected input"),
            InnerError::Other(op) => fmt::Display::fmt(op, f),
            InnerError::Incomplete => write!(f, "expected more input"),
        }
    }
}

/// Error type that contains the reason of the error and the unconsumed input.
///
/// For error location information see [ParseError::verbose].
#[derive(Clone, Debug)]
pub struct ParseError<Kind> {
    stack: Vec<(String, InnerError<Kind>)>,
}

impl<Kind> ParseError<Kind> {
    pub(crate) fn from_kind(input: String, kind: Kind) -> ParseError<Kind> {
        ParseError {
            stack: vec![(input, InnerError::Other(kind))],
        }
    }

    pub(crate) fn incomplete() -> ParseError<Kind> {
        ParseError {
            stack: vec![(String::new(), InnerError::Incomplete)],
        }
    }
}

/// Error type containing location information in addition to the reason of the error.
///
/// Created from a [ParseError] with [ParseError::verbose].
#[derive(Clone, Debug)]
pub struct VerboseParseError<'a, Kind> {
    /// The line number of the error location.
    pub line: usize,
    /// The column number of the error location.
    pub column: usize,
    kind: InnerError<Kind>,
    rest: &'a str,
}

impl<'a, Kind: Display> fmt::Display for VerboseParseError<'a, Kind> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "at line {} col {}: {}, at '{}'", self.line, self.column, self.kind, self.rest)
    }
}

impl<Kind> ParseError<Kind> {
    /// Calculates the error location information from the [ParseError] and the original input
    /// buffer.
    ///
    /// The innermost error of the stack is used, since it points closest to the actual problem.
    ///
    /// # Parameters
    /// - `input`: The original input buffer or an exact copy of it.
    pub fn verbose(mut self, input: &str) -> VerboseParseError<Kind> {
        let (rest, kind) = self.stack.swap_remove(0);

        let start = input.len().saturating_sub(rest.len());
        let mut line = 1;
        let mut column = 1;

        for ch in input[..start].chars() {
            if ch == '\n' {
                line += 1;
                column = 0;
            }

            column += 1;
        }

        let end = input[start..]
            .char_indices()
            .take(20)
            .find(|(_, ch)| *ch == '\n')
            .map(|(i, _)| start + i)
            .unwrap_or_else(|| input[start..].char_indices().nth(20).map(|(i, _)| start + i).unwrap_or(input.len()));

        VerboseParseError {
            line,
            column,
            kind,
            rest: &input[start..end],
        }
    }
}

impl<Kind: Display> fmt::Display for ParseError<Kind> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (input, kind) = &self.stack[0];

        let end = input
            .char_indices()
            .take(20)
            .find(|(_, c)| *c == '\n')
            .map(|(i, _)| i)
            .unwrap_or_else(|| input.char_indices().nth(20).map(|(i, _)| i).unwrap_or(input.len()));

        write!(f, "{} at: {}", kind, &input[..end])
    }
}

impl<Kind: Display + fmt::Debug> Error for ParseError<Kind> {}

impl<Kind> nom::error::ParseError<&str> for ParseError<Kind> {
    fn from_error_kind(input: &str, kind: ErrorKind) -> Self {
        ParseError {
            stack: vec![(input.to_string(), InnerError::Nom(kind))],
        }
    }

    fn append(input: &str, kind: ErrorKind, mut other: Self) -> Self {
        other.stack.push((input.to_string(), InnerError::Nom(kind)));
        other
    }

    fn add_context(input: &str, ctx: &'static str, mut other: Self) -> Self {
        other.stack.push((input.to_string(), InnerError::Context(ctx)));
        other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_reference_message() {
        let error = AssemblyError::UnresolvedMemoryReference {
            name: "unknown_name".into(),
            line: 3,
            suggestion: None,
        };

        assert_eq!(error.to_string(), "line 3: no memory location named 'unknown_name'");
        assert_eq!(error.line(), 3);

        let error = AssemblyError::UnresolvedMemoryReference {
            name: "scor".into(),
            line: 1,
            suggestion: Some("score".into()),
        };

        assert_eq!(error.to_string(), "line 1: no memory location named 'scor', did you mean 'score'?");
    }

    #[test]
    fn test_verbose_location() {
        let input = "{\n{b000000, b2}\n};";
        let rest = &input[12..];
        let error = ParseError::<String>::from_kind(rest.to_string(), "bad field".into());
        let verbose = error.verbose(input);

        assert_eq!(verbose.line, 2);
        assert_eq!(verbose.column, 11);
        assert_eq!(verbose.to_string(), "at line 2 col 11: bad field, at 'b2}'");
    }
}
