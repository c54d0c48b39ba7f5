//! Symbol interning for variable names.
//!
//! Variable names are stored once and referenced by `SymbolId`, so
//! comparisons inside the polynomial walkers are integer comparisons.

use std::collections::HashMap;

/// Identifier of an interned variable name (index into the table).
pub type SymbolId = usize;

/// Interning table owned by the `Context`.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    names: Vec<String>,
    lookup: HashMap<String, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a name, returning the existing id if already present.
    pub fn intern(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        id
    }

    /// Resolve an id back to its name.
    ///
    /// # Panics
    /// Panics if the id was not produced by this table.
    #[inline]
    pub fn resolve(&self, id: SymbolId) -> &str {
        &self.names[id]
    }

    /// Id for a name without interning it.
    #[inline]
    pub fn get_id(&self, name: &str) -> Option<SymbolId> {
        self.lookup.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_roundtrip() {
        let mut table = SymbolTable::new();
        let id = table.intern("x");
        assert_eq!(table.resolve(id), "x");
    }

    #[test]
    fn intern_deduplicates() {
        let mut table = SymbolTable::new();
        assert_eq!(table.intern("x"), table.intern("x"));
        assert_ne!(table.intern("x"), table.intern("y"));
    }

    #[test]
    fn get_id_does_not_intern() {
        let table = SymbolTable::new();
        assert_eq!(table.get_id("x"), None);
    }
}
