//! Resolution of memory location names into addresses.

use crate::error::AssemblyError;
use crate::instruction::Address;
use crate::memory::MemoryTable;

/// Maps names to addresses using a [MemoryTable].
#[derive(Clone, Copy, Debug)]
pub struct SymbolResolver<'t> {
    memory: &'t MemoryTable,
}

impl<'t> SymbolResolver<'t> {
    pub fn new(memory: &'t MemoryTable) -> SymbolResolver<'t> {
        SymbolResolver { memory }
    }

    pub fn memory(&self) -> &'t MemoryTable {
        self.memory
    }

    /// Resolves the trimmed name `name`, which appears on the 1-based source line `line`.
    pub fn resolve(&self, name: &str, line: usize) -> Result<Address, AssemblyError> {
        self.memory.lookup(name)
            .ok_or_else(|| AssemblyError::UnresolvedMemoryReference {
                name: name.to_string(),
                line,
                suggestion: self.memory.suggest(name).map(String::from),
            })
    }
}
