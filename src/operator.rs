//! ALU operators and the table mapping their symbols to function codes.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::TableError;
use crate::instruction::FunctionCode;

/// Symbol of the operator used for expressions that consist of a single operand.
///
/// `x` is assembled as `x + ZERO`.
pub const COPY_OPERATOR: &str = "+";

/// Operations of the target ALU that have a source level operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition. (`+`)
    Add,
    /// Subtraction. (`-`)
    Subtract,
    /// Multiplication. (`*`)
    Multiply,
    /// Bitwise exclusive or. (`^`)
    Xor,
    /// Bitwise and. (`&`)
    And,
    /// Bitwise or. (`|`)
    Or,
    /// Logical left shift. (`<<`)
    ShiftLeft,
    /// Logical right shift. (`>>`)
    ShiftRight,
    /// Equality comparison. (`==`)
    Equal,
    /// Less-than comparison. (`<`)
    Less,
    /// Less-or-equal comparison. (`<=`)
    LessOrEqual,
    /// Inequality comparison. (`!=`)
    NotEqual,
    /// Greater-or-equal comparison. (`>=`)
    GreaterOrEqual,
    /// Greater-than comparison. (`>`)
    Greater,
}

impl Operator {
    /// Every operator, in the order the ALU function codes are assigned.
    pub const ALL: [Operator; 14] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Xor,
        Operator::And,
        Operator::Or,
        Operator::ShiftLeft,
        Operator::ShiftRight,
        Operator::Equal,
        Operator::Less,
        Operator::LessOrEqual,
        Operator::NotEqual,
        Operator::GreaterOrEqual,
        Operator::Greater,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Xor => "^",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::ShiftLeft => "<<",
            Operator::ShiftRight => ">>",
            Operator::Equal => "==",
            Operator::Less => "<",
            Operator::LessOrEqual => "<=",
            Operator::NotEqual => "!=",
            Operator::GreaterOrEqual => ">=",
            Operator::Greater => ">",
        }
    }

    /// The raw 6-bit ALU function code of the operator.
    pub fn as_bits(self) -> u8 {
        match self {
            Operator::Add => 0b000000,
            Operator::Subtract => 0b000001,
            Operator::Multiply => 0b000010,
            Operator::Xor => 0b010110,
            Operator::And => 0b011000,
            Operator::Or => 0b011110,
            Operator::ShiftLeft => 0b100000,
            Operator::ShiftRight => 0b100001,
            Operator::Equal => 0b110011,
            Operator::Less => 0b110101,
            Operator::LessOrEqual => 0b110111,
            Operator::NotEqual => 0b111011,
            Operator::GreaterOrEqual => 0b111101,
            Operator::Greater => 0b111111,
        }
    }

    pub fn function_code(self) -> FunctionCode {
        FunctionCode::from_bits(self.as_bits())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(input: &str) -> Result<Operator, ()> {
        Operator::ALL.iter()
            .copied()
            .find(|op| op.symbol() == input)
            .ok_or(())
    }
}

/// A single row of an [OperatorTable].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorEntry {
    pub symbol: String,
    pub function: FunctionCode,
}

/// Mapping from operator symbols to ALU function codes.
///
/// Entries are kept sorted by descending symbol length, so scanning them in order never lets
/// a short operator (`<`) shadow a longer one that starts with it (`<=`).
#[derive(Clone, Debug)]
pub struct OperatorTable {
    entries: Vec<OperatorEntry>,
    copy_function: FunctionCode,
}

lazy_static! {
    static ref STANDARD: OperatorTable = OperatorTable::new(
        Operator::ALL.iter().map(|op| (op.symbol(), op.function_code()))
    ).expect("the standard operator table is valid");
}

impl OperatorTable {
    /// Builds a table from `(symbol, code)` pairs.
    ///
    /// Symbols of equal length keep the order they were given in.
    pub fn new<I, S>(entries: I) -> Result<OperatorTable, TableError>
    where
        I: IntoIterator<Item = (S, FunctionCode)>,
        S: Into<String>,
    {
        let mut codes = HashMap::<FunctionCode, String>::new();
        let mut table = Vec::<OperatorEntry>::new();

        for (symbol, function) in entries {
            let symbol = symbol.into();

            if symbol.is_empty() {
                return Err(TableError::EmptySymbol);
            }

            if table.iter().any(|entry| entry.symbol == symbol) {
                return Err(TableError::DuplicateSymbol(symbol));
            }

            if let Some(first) = codes.get(&function) {
                return Err(TableError::DuplicateCode {
                    first: first.clone(),
                    second: symbol,
                });
            }

            codes.insert(function, symbol.clone());
            table.push(OperatorEntry { symbol, function });
        }

        let copy_function = table.iter()
            .find(|entry| entry.symbol == COPY_OPERATOR)
            .map(|entry| entry.function)
            .ok_or(TableError::MissingCopyOperator)?;

        table.sort_by_key(|entry| Reverse(entry.symbol.len()));

        Ok(OperatorTable {
            entries: table,
            copy_function,
        })
    }

    /// The operator table of the target machine.
    pub fn standard() -> &'static OperatorTable {
        &STANDARD
    }

    /// Iterates the entries longest symbol first.
    pub fn iter(&self) -> impl Iterator<Item = &OperatorEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn code_of(&self, symbol: &str) -> Option<FunctionCode> {
        self.entries.iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.function)
    }

    pub fn symbol_of(&self, function: FunctionCode) -> Option<&str> {
        self.entries.iter()
            .find(|entry| entry.function == function)
            .map(|entry| entry.symbol.as_str())
    }

    /// Function code used for single operand (copy) expressions.
    pub fn copy_function(&self) -> FunctionCode {
        self.copy_function
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn code(bits: usize) -> FunctionCode {
        FunctionCode::new(bits).unwrap()
    }

    #[test]
    fn test_standard_codes() {
        let table = OperatorTable::standard();

        let expected = [
            ("+", "b000000"),
            ("-", "b000001"),
            ("*", "b000010"),
            ("^", "b010110"),
            ("&", "b011000"),
            ("|", "b011110"),
            ("<<", "b100000"),
            (">>", "b100001"),
            ("==", "b110011"),
            ("<", "b110101"),
            ("<=", "b110111"),
            ("!=", "b111011"),
            (">=", "b111101"),
            (">", "b111111"),
        ];

        assert_eq!(table.len(), expected.len());

        for (symbol, bits) in expected.iter() {
            assert_eq!(table.code_of(symbol).map(|c| c.to_string()).as_deref(), Some(*bits));
        }

        let distinct = table.iter().map(|entry| entry.function).collect::<HashSet<_>>();
        assert_eq!(distinct.len(), table.len());
    }

    #[test]
    fn test_longest_symbols_first() {
        let table = OperatorTable::standard();
        let lengths = table.iter().map(|entry| entry.symbol.len()).collect::<Vec<_>>();

        assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]));

        let position = |symbol: &str| table.iter().position(|entry| entry.symbol == symbol).unwrap();

        assert!(position("<=") < position("<"));
        assert!(position(">=") < position(">"));
        assert!(position("<<") < position("<"));
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let table = OperatorTable::new(vec![
            ("+", code(0)),
            ("-", code(1)),
            ("==", code(2)),
        ]).unwrap();

        let symbols = table.iter().map(|entry| entry.symbol.as_str()).collect::<Vec<_>>();
        assert_eq!(symbols, vec!["==", "+", "-"]);
    }

    #[test]
    fn test_invalid_tables() {
        assert_eq!(
            OperatorTable::new(vec![("+", code(0)), ("+", code(1))]).unwrap_err(),
            TableError::DuplicateSymbol("+".into()),
        );

        assert_eq!(
            OperatorTable::new(vec![("+", code(0)), ("-", code(0))]).unwrap_err(),
            TableError::DuplicateCode { first: "+".into(), second: "-".into() },
        );

        assert_eq!(
            OperatorTable::new(vec![("-", code(1))]).unwrap_err(),
            TableError::MissingCopyOperator,
        );

        assert_eq!(
            OperatorTable::new(vec![("+", code(0)), ("", code(1))]).unwrap_err(),
            TableError::EmptySymbol,
        );
    }

    #[test]
    fn test_operator_from_str() {
        assert_eq!("<=".parse::<Operator>(), Ok(Operator::LessOrEqual));
        assert_eq!("=".parse::<Operator>(), Err(()));
        assert_eq!(Operator::ShiftRight.to_string(), ">>");
    }
}
