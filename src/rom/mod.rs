//! Serializing, reading and disassembling ROM images.

mod disassemble;
mod image;
mod parser;

pub use self::disassemble::DisassembleError;
pub use self::image::RomImage;
pub use self::parser::{ErrorKind, ParseError};
