//! A crate for translating ALU assignment assembly into ROM images.
//!
//! The target machine is an ALU sitting next to a small, flat register/memory file. Every
//! instruction reads two memory locations, combines them with one ALU function and writes the
//! result into a third location. A program is a list of such assignments, one per line:
//!
//! ```text
//! # advance the score
//! score = score + ONE
//! is_le = doodle_pos <= MAX_HEIGHT
//! reg0 = score            # copy, assembled as `score + ZERO`
//! ```
//!
//! Currently this crate provides the functionality to:
//! - Assemble such programs into ROM images made of 6-bit binary fields.
//! - Serialize ROM images as array initializers for hardware description sources.
//! - Read serialized ROM images back and disassemble them.
//!
//! Names are resolved through a [MemoryTable](memory::MemoryTable) and operators through an
//! [OperatorTable](operator::OperatorTable). Both tables of the target machine are built in,
//! but any other pair of tables can be passed to an [Assembler](assembler::Assembler).
//!
//! # Example
//! ```
//! use alurom::assembler::Assembler;
//!
//! let source = r#"
//!     score = score + ONE   # increment
//!     reg0 = score
//! "#;
//!
//! let image = Assembler::standard()
//!     .assemble(source)
//!     .expect("could not assemble the program");
//!
//! // The last source line comes first in the ROM.
//! assert_eq!(image.to_string(), "{\n\
//!     {b000000, b011011, b100011, b011100},\n\
//!     {b000000, b011011, b100100, b011011}\n\
//!     };");
//! ```
//!
//! # Executables
//!
//! ## `alurom`
//!
//! Assembles the file given as its only argument and prints the ROM image to the standard
//! output. With `--disassemble` the file is read as a ROM image and printed as source instead.
//! Built with the `alurom` (or `tools`) feature.
pub mod parsing;
pub mod instruction;
pub mod operator;
pub mod memory;
pub mod resolver;
pub mod expression;
pub mod line;
pub mod assembler;
pub mod rom;
pub mod error;

pub use assembler::Assembler;
pub use error::AssemblyError;
pub use rom::RomImage;

/// Assembles `source` with the target machine's own tables.
pub fn assemble(source: &str) -> Result<RomImage, AssemblyError> {
    Assembler::standard().assemble(source)
}
