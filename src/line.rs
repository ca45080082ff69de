//! Parsing of single source lines into instructions.

use crate::error::AssemblyError;
use crate::expression::ExpressionParser;
use crate::instruction::Instruction;
use crate::memory::MemoryTable;
use crate::operator::OperatorTable;
use crate::parsing::{split_first, strip_comment, ASSIGNMENT_MARKER};
use crate::resolver::SymbolResolver;

/// Turns `destination = expression` lines into [Instructions](Instruction).
#[derive(Clone, Copy, Debug)]
pub struct LineParser<'t> {
    resolver: SymbolResolver<'t>,
    expressions: ExpressionParser<'t>,
}

impl<'t> LineParser<'t> {
    pub fn new(operators: &'t OperatorTable, memory: &'t MemoryTable) -> LineParser<'t> {
        let resolver = SymbolResolver::new(memory);

        LineParser {
            resolver,
            expressions: ExpressionParser::new(operators, resolver),
        }
    }

    /// Parses the 1-based source line number `line`.
    ///
    /// Returns `None` for lines without an assignment once the comment is removed. The
    /// expression is resolved before the destination, so an unknown operand is reported
    /// ahead of an unknown destination on the same line.
    pub fn parse(&self, text: &str, line: usize) -> Result<Option<Instruction>, AssemblyError> {
        let code = strip_comment(text);

        let (destination, expression) = match split_first(code, ASSIGNMENT_MARKER) {
            Some(parts) => parts,
            None => return Ok(None),
        };

        let expression = self.expressions.parse(expression, line)?;
        let destination = self.resolver.resolve(destination.trim(), line)?;

        Ok(Some(Instruction::new(expression, destination)))
    }
}
