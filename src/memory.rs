//! The memory table: symbolic names of the register/memory file and their addresses.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::TableError;
use crate::instruction::{Address, FIELD_CAPACITY};

/// Name of the memory location that always holds zero.
///
/// Single operand expressions use it as their implicit right operand.
pub const ZERO_LOCATION: &str = "ZERO";

const STANDARD_NAMES: [&str; 54] = [
    "game_running",
    "tick_period",
    "conditional",
    "doodle_pos",
    "doodle_dir",
    "is_le",
    "is_ge",
    "terrain_gen_counter",
    "cooldown",
    "input_correct",
    "qn2",
    "qn1",
    "qn0",
    "terrain3l",
    "terrain3r",
    "terrain2l",
    "terrain2r",
    "terrain1l",
    "terrain1r",
    "terrain0l",
    "terrain0r",
    "doodle5",
    "doodle4",
    "doodle3",
    "doodle2",
    "doodle1",
    "doodle0",
    "score",
    "reg0",
    "reg1",
    "reg2",
    "prng0",
    "prng1",
    "prng2",
    "input",
    "ZERO",
    "ONE",
    "THREE",
    "NINE",
    "FIFTEEN",
    "HUNDRED",
    "SHIFT_MASK",
    "PRNG_MASK",
    "COLLISION_MASK",
    "DOODLE_SPRITE5",
    "DOODLE_SPRITE4",
    "DOODLE_SPRITE3",
    "DOODLE_SPRITE2",
    "DOODLE_SPRITE1",
    "DOODLE_SPRITE0",
    "MAX_HEIGHT",
    "OBSTACLE_WIDTH",
    "OBSTACLE_SEPARATION",
    "MAX_COOLDOWN",
];

lazy_static! {
    static ref STANDARD: MemoryTable = MemoryTable::new(STANDARD_NAMES.iter().copied())
        .expect("the standard memory table is valid");
}

/// Ordered sequence of unique memory location names.
///
/// The address of a location is its zero-based position in the sequence.
#[derive(Clone, Debug, Default)]
pub struct MemoryTable {
    names: Vec<String>,
    addresses: HashMap<String, Address>,
}

impl MemoryTable {
    /// Builds a table from names in address order.
    ///
    /// Fails if a name is empty or repeated, or if there are more names than a 6-bit address
    /// can reach.
    pub fn new<I, S>(names: I) -> Result<MemoryTable, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();

        if names.len() > FIELD_CAPACITY {
            return Err(TableError::TooManyLocations { count: names.len() });
        }

        let mut addresses = HashMap::with_capacity(names.len());

        for (index, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(TableError::EmptyName);
            }

            let address = Address::new(index)
                .map_err(|_| TableError::TooManyLocations { count: names.len() })?;

            if addresses.insert(name.clone(), address).is_some() {
                return Err(TableError::DuplicateName(name.clone()));
            }
        }

        Ok(MemoryTable { names, addresses })
    }

    /// The memory table of the target machine.
    pub fn standard() -> &'static MemoryTable {
        &STANDARD
    }

    pub fn lookup(&self, name: &str) -> Option<Address> {
        self.addresses.get(name).copied()
    }

    pub fn name_of(&self, address: Address) -> Option<&str> {
        self.names.get(address.value()).map(String::as_str)
    }

    /// Finds the name closest to `name` by edit distance, if any is close enough to be a
    /// plausible typo.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let limit = std::cmp::max(1, name.chars().count() / 3);

        self.names.iter()
            .map(|candidate| (edit_distance::edit_distance(name, candidate), candidate))
            .filter(|(distance, _)| *distance <= limit)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, candidate)| candidate.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Address, &str)> {
        self.names.iter()
            .enumerate()
            .map(|(index, name)| (Address::from_bits(index as u8), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
