//! Assembly of whole source files into ROM images.

use slog::{debug, o, trace, Discard, Logger};

use crate::error::AssemblyError;
use crate::line::LineParser;
use crate::memory::MemoryTable;
use crate::operator::OperatorTable;
use crate::rom::RomImage;

/// Assembles source programs with a fixed pair of tables.
///
/// The tables are only borrowed, so a single pair can be shared by any number of assemblers
/// and runs.
#[derive(Clone, Copy, Debug)]
pub struct Assembler<'t> {
    lines: LineParser<'t>,
}

impl Assembler<'static> {
    /// An assembler for the target machine's own operator and memory tables.
    pub fn standard() -> Assembler<'static> {
        Assembler::new(OperatorTable::standard(), MemoryTable::standard())
    }
}

impl<'t> Assembler<'t> {
    pub fn new(operators: &'t OperatorTable, memory: &'t MemoryTable) -> Assembler<'t> {
        Assembler {
            lines: LineParser::new(operators, memory),
        }
    }

    /// Assembles a complete source text.
    pub fn assemble(&self, source: &str) -> Result<RomImage, AssemblyError> {
        self.assemble_lines_with_logger(source.lines(), None::<Logger>)
    }

    pub fn assemble_with_logger<L>(&self, source: &str, logger: L) -> Result<RomImage, AssemblyError>
    where
        L: Into<Option<Logger>>,
    {
        self.assemble_lines_with_logger(source.lines(), logger)
    }

    pub fn assemble_lines<I, S>(&self, lines: I) -> Result<RomImage, AssemblyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.assemble_lines_with_logger(lines, None::<Logger>)
    }

    /// Assembles the given source lines.
    ///
    /// Lines are numbered from 1 for error reporting. The first unresolved name aborts the
    /// whole run, no partial image is returned.
    pub fn assemble_lines_with_logger<I, S, L>(&self, lines: I, logger: L) -> Result<RomImage, AssemblyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        L: Into<Option<Logger>>,
    {
        let logger = logger
            .into()
            .unwrap_or(Logger::root(Discard, o!()))
            .new(o!("stage" => "assembly"));

        let mut instructions = Vec::new();
        let mut line_count = 0;

        for (index, text) in lines.into_iter().enumerate() {
            let line = index + 1;
            line_count = line;

            match self.lines.parse(text.as_ref(), line)? {
                Some(ins) => {
                    trace!(logger, "append instruction"; "line" => line, "instruction" => %ins);
                    instructions.push(ins);
                },
                None => {
                    trace!(logger, "skip line"; "line" => line);
                },
            }
        }

        debug!(logger, "assembled source"; "lines" => line_count, "instructions" => instructions.len());

        Ok(RomImage::from_source_order(instructions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::FunctionCode;

    #[test]
    fn test_reverse_order() {
        let operators = OperatorTable::new(vec![
            ("+", FunctionCode::new(0).unwrap()),
            ("-", FunctionCode::new(1).unwrap()),
            ("*", FunctionCode::new(2).unwrap()),
        ]).unwrap();
        let memory = MemoryTable::new(vec!["ZERO", "ONE", "score"]).unwrap();
        let assembler = Assembler::new(&operators, &memory);

        let source = "score = score + ONE\n\n# comment\nscore = score - ONE\nONE = score * score\n";
        let image = assembler.assemble(source).unwrap();

        assert_eq!(image.to_string(), "{\n\
            {b000010, b000010, b000010, b000001},\n\
            {b000001, b000010, b000001, b000010},\n\
            {b000000, b000010, b000001, b000010}\n\
            };");
    }

    #[test]
    fn test_fail_fast() {
        let assembler = Assembler::standard();
        let source = "score = score + ONE\nscore = unknown_name + ONE\nscore = nothing";

        assert_eq!(
            assembler.assemble(source),
            Err(AssemblyError::UnresolvedMemoryReference {
                name: "unknown_name".into(),
                line: 2,
                suggestion: None,
            }),
        );
    }

    #[test]
    fn test_empty_source() {
        let image = Assembler::standard().assemble("").unwrap();

        assert!(image.is_empty());
        assert_eq!(image.to_string(), "{\n\n};");
    }

    #[test]
    fn test_assemble_lines() {
        let assembler = Assembler::standard();
        let lines = vec![String::from("reg0 = reg1 ^ reg2"), String::from("  # done")];

        assert_eq!(assembler.assemble_lines(&lines), assembler.assemble(&lines.join("\n")));
    }
}
