//! Parsing of the right hand side of an instruction.

use crate::error::AssemblyError;
use crate::instruction::{Address, FunctionCode};
use crate::memory::ZERO_LOCATION;
use crate::operator::OperatorTable;
use crate::parsing::split_first;
use crate::resolver::SymbolResolver;

/// A parsed and resolved expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    /// `left OP right`
    Binary {
        function: FunctionCode,
        left: Address,
        right: Address,
    },

    /// A lone operand, assembled as `source + ZERO`.
    Copy {
        function: FunctionCode,
        source: Address,
        zero: Address,
    },
}

impl Expression {
    /// The function code and operand addresses as they are laid out in an instruction.
    pub fn fields(&self) -> (FunctionCode, Address, Address) {
        match *self {
            Expression::Binary { function, left, right } => (function, left, right),
            Expression::Copy { function, source, zero } => (function, source, zero),
        }
    }
}

/// Recognizes operators and resolves the operands around them.
#[derive(Clone, Copy, Debug)]
pub struct ExpressionParser<'t> {
    operators: &'t OperatorTable,
    resolver: SymbolResolver<'t>,
}

impl<'t> ExpressionParser<'t> {
    pub fn new(operators: &'t OperatorTable, resolver: SymbolResolver<'t>) -> ExpressionParser<'t> {
        ExpressionParser { operators, resolver }
    }

    /// Parses `input`, which appears on the 1-based source line `line`.
    ///
    /// The first operator of the table (longest symbols first) that occurs anywhere in the input
    /// wins, and the input is split at its first occurrence. Without any operator the whole input
    /// is a single operand.
    pub fn parse(&self, input: &str, line: usize) -> Result<Expression, AssemblyError> {
        for entry in self.operators.iter() {
            if let Some((left, right)) = split_first(input, &entry.symbol) {
                let left = self.resolver.resolve(left.trim(), line)?;
                let right = self.resolver.resolve(right.trim(), line)?;

                return Ok(Expression::Binary {
                    function: entry.function,
                    left,
                    right,
                });
            }
        }

        let source = self.resolver.resolve(input.trim(), line)?;
        let zero = self.resolver.resolve(ZERO_LOCATION, line)?;

        Ok(Expression::Copy {
            function: self.operators.copy_function(),
            source,
            zero,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTable;

    fn with_parser<F: FnOnce(ExpressionParser)>(f: F) {
        let memory = MemoryTable::new(vec!["ZERO", "ONE", "reg0", "reg1"]).unwrap();
        f(ExpressionParser::new(OperatorTable::standard(), SymbolResolver::new(&memory)))
    }

    fn address(value: usize) -> Address {
        Address::new(value).unwrap()
    }

    #[test]
    fn test_longest_match() {
        with_parser(|parser| {
            let cases = [
                ("reg0 <= reg1", "b110111"),
                ("reg0 < reg1", "b110101"),
                ("reg0 >= reg1", "b111101"),
                ("reg0 > reg1", "b111111"),
                ("reg0 << reg1", "b100000"),
                ("reg0 >> reg1", "b100001"),
                ("reg0 == reg1", "b110011"),
                ("reg0 != reg1", "b111011"),
            ];

            for (input, code) in cases.iter() {
                let (function, left, right) = parser.parse(input, 1).unwrap().fields();

                assert_eq!(function.to_string(), *code, "parsing '{}'", input);
                assert_eq!(left, address(2));
                assert_eq!(right, address(3));
            }
        });
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        with_parser(|parser| {
            assert_eq!(parser.parse("reg0-reg1", 1), parser.parse("  reg0   -\treg1 ", 1));
        });
    }

    #[test]
    fn test_copy() {
        with_parser(|parser| {
            let copy = parser.parse(" reg0 ", 1).unwrap();

            assert_eq!(copy, Expression::Copy {
                function: OperatorTable::standard().copy_function(),
                source: address(2),
                zero: address(0),
            });

            let sum = parser.parse("reg0 + ZERO", 1).unwrap();
            assert_eq!(copy.fields(), sum.fields());
        });
    }

    #[test]
    fn test_unresolved_operand() {
        with_parser(|parser| {
            match parser.parse("reg0 * nothing", 4) {
                Err(AssemblyError::UnresolvedMemoryReference { name, line, .. }) => {
                    assert_eq!(name, "nothing");
                    assert_eq!(line, 4);
                },
                other => panic!("unexpected result: {:?}", other),
            }
        });
    }

    #[test]
    fn test_copy_without_zero_location() {
        let memory = MemoryTable::new(vec!["ONE", "reg0"]).unwrap();
        let parser = ExpressionParser::new(OperatorTable::standard(), SymbolResolver::new(&memory));

        match parser.parse("reg0", 2) {
            Err(AssemblyError::UnresolvedMemoryReference { name, line, .. }) => {
                assert_eq!(name, ZERO_LOCATION);
                assert_eq!(line, 2);
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
