use std::fmt;

use itertools::Itertools;

use crate::instruction::Instruction;

use super::parser::{parse_rom_image, ParseError};

/// A complete ROM image: the assembled instructions in ROM order.
///
/// ROM order is the reverse of source order, the instruction of the last source line comes
/// first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RomImage {
    instructions: Vec<Instruction>,
}

impl RomImage {
    /// Creates an image from instructions that are already in ROM order.
    pub fn from_rom_order(instructions: Vec<Instruction>) -> RomImage {
        RomImage { instructions }
    }

    /// Creates an image from instructions in source order.
    pub fn from_source_order(mut instructions: Vec<Instruction>) -> RomImage {
        instructions.reverse();
        RomImage { instructions }
    }

    /// Reads a serialized image, such as one produced by the [Display](fmt::Display)
    /// implementation.
    pub fn parse(input: &str) -> Result<RomImage, ParseError> {
        parse_rom_image(input)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl fmt::Display for RomImage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{\n{}\n}};", self.instructions.iter().join(",\n"))
    }
}
