//! Types for representing ROM instructions and their fixed-width fields.

use std::fmt;

use crate::error::FieldOverflow;
use crate::expression::Expression;

/// Number of bits in every instruction field.
pub const FIELD_WIDTH: usize = 6;

/// Number of distinct values a single field can hold.
pub const FIELD_CAPACITY: usize = 1 << FIELD_WIDTH;

macro_rules! impl_field_type {
    ( $(#[$meta:meta])* $name:ident ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u8);

        impl $name {
            /// Creates the field from a raw value. Fails if the value does not fit in
            /// [FIELD_WIDTH] bits.
            pub fn new(value: usize) -> Result<$name, FieldOverflow> {
                if value >= FIELD_CAPACITY {
                    return Err(FieldOverflow { value });
                }

                Ok($name(value as u8))
            }

            /// Creates the field from the low [FIELD_WIDTH] bits of `bits`.
            pub(crate) fn from_bits(bits: u8) -> $name {
                $name(bits & (FIELD_CAPACITY - 1) as u8)
            }

            /// The raw value of the field.
            pub fn value(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "b{:0width$b}", self.0, width = FIELD_WIDTH)
            }
        }
    };
}

impl_field_type!(
    /// Address of a memory location, i.e. its position in the
    /// [MemoryTable](crate::memory::MemoryTable).
    Address
);

impl_field_type!(
    /// Code selecting the operation the ALU performs.
    FunctionCode
);

/// A single ROM entry.
///
/// The ALU computes `function(left, right)` and stores the result into `destination`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub function: FunctionCode,
    pub left: Address,
    pub right: Address,
    pub destination: Address,
}

impl Instruction {
    /// Combines a parsed expression with the location its result is stored into.
    pub fn new(expression: Expression, destination: Address) -> Instruction {
        let (function, left, right) = expression.fields();

        Instruction {
            function,
            left,
            right,
            destination,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}, {}, {}, {}}}", self.function, self.left, self.right, self.destination)
    }
}
