//! Symbol table for HLSL identifier classification
//!
//! The table groups the language's well-known names into six sets. It is
//! read-only once built: the process-wide instance is created lazily on first
//! use, and a derived table (with extra custom type names from configuration)
//! is an independent immutable value.
//!
//! A name may appear in more than one set. Resolving such overlaps is the
//! tokenizer's job, not the table's.

pub mod hlsl;

use std::collections::HashSet;
use std::sync::LazyLock;

/// The six name sets of the symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolSet {
    Keywords,
    Types,
    Semantics,
    Constants,
    BuiltinFunctions,
    CustomTypes,
}

static GLOBAL: LazyLock<SymbolTable> = LazyLock::new(SymbolTable::hlsl);

/// Immutable collection of HLSL name sets
#[derive(Debug, Clone)]
pub struct SymbolTable {
    keywords: HashSet<String>,
    types: HashSet<String>,
    semantics: HashSet<String>,
    constants: HashSet<String>,
    builtin_functions: HashSet<String>,
    custom_types: HashSet<String>,
}

fn to_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

impl SymbolTable {
    /// Build the built-in HLSL table
    fn hlsl() -> Self {
        Self {
            keywords: to_set(hlsl::KEYWORDS),
            types: to_set(hlsl::TYPES),
            semantics: to_set(hlsl::SEMANTICS),
            constants: to_set(hlsl::CONSTANTS),
            builtin_functions: to_set(hlsl::BUILTIN_FUNCTIONS),
            custom_types: to_set(hlsl::CUSTOM_TYPES),
        }
    }

    /// Process-wide built-in table
    pub fn global() -> &'static SymbolTable {
        &GLOBAL
    }

    /// Derive a table from the built-in one with additional custom type names
    ///
    /// # Arguments
    /// * `names` - Extra aggregate type names (e.g. project vertex structs)
    ///
    /// # Returns
    /// * `SymbolTable` - New table; the global table is left untouched
    pub fn with_custom_types<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::global().clone();
        table
            .custom_types
            .extend(names.into_iter().map(Into::into));
        table
    }

    /// Check whether `name` belongs to the given set
    pub fn contains(&self, set: SymbolSet, name: &str) -> bool {
        self.set(set).contains(name)
    }

    /// Number of names in the given set
    pub fn len(&self, set: SymbolSet) -> usize {
        self.set(set).len()
    }

    fn set(&self, set: SymbolSet) -> &HashSet<String> {
        match set {
            SymbolSet::Keywords => &self.keywords,
            SymbolSet::Types => &self.types,
            SymbolSet::Semantics => &self.semantics,
            SymbolSet::Constants => &self.constants,
            SymbolSet::BuiltinFunctions => &self.builtin_functions,
            SymbolSet::CustomTypes => &self.custom_types,
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::global().clone()
    }
}
