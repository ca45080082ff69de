use std::error::Error;
use std::fmt;

use crate::instruction::{Address, FunctionCode, Instruction};
use crate::memory::{MemoryTable, ZERO_LOCATION};
use crate::operator::OperatorTable;

use super::image::RomImage;

/// Reasons an instruction can not be turned back into source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisassembleError {
    UnknownFunctionCode {
        /// Position of the instruction in the ROM.
        entry: usize,
        function: FunctionCode,
    },
    UnknownAddress {
        /// Position of the instruction in the ROM.
        entry: usize,
        address: Address,
    },
}

impl fmt::Display for DisassembleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DisassembleError::UnknownFunctionCode { entry, function } =>
                write!(f, "ROM entry {}: no operator has the function code {}", entry, function),
            DisassembleError::UnknownAddress { entry, address } =>
                write!(f, "ROM entry {}: no memory location at address {}", entry, address),
        }
    }
}

impl Error for DisassembleError {}

fn disassemble_instruction(
    entry: usize,
    ins: &Instruction,
    operators: &OperatorTable,
    memory: &MemoryTable,
) -> Result<String, DisassembleError> {
    let name = |address: Address| memory.name_of(address)
        .ok_or(DisassembleError::UnknownAddress { entry, address });

    let destination = name(ins.destination)?;
    let left = name(ins.left)?;

    if ins.function == operators.copy_function() && memory.lookup(ZERO_LOCATION) == Some(ins.right) {
        return Ok(format!("{} = {}", destination, left));
    }

    let operator = operators.symbol_of(ins.function)
        .ok_or(DisassembleError::UnknownFunctionCode { entry, function: ins.function })?;

    Ok(format!("{} = {} {} {}", destination, left, operator, name(ins.right)?))
}

impl RomImage {
    /// Renders the image back into source lines, in source order.
    ///
    /// Additions of `ZERO` are rendered as plain copies. Assembling the returned lines with the
    /// same tables yields this image again.
    pub fn disassemble(&self, operators: &OperatorTable, memory: &MemoryTable) -> Result<Vec<String>, DisassembleError> {
        self.instructions()
            .iter()
            .enumerate()
            .rev()
            .map(|(entry, ins)| disassemble_instruction(entry, ins, operators, memory))
            .collect()
    }
}
