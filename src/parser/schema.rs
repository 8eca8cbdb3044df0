//! Core benchmark data types.
//!
//! Defines the benchmarked operations and structures, and the
//! size-indexed sample sets loaded from the input tables.

use crate::utils::config::{LIST_INPUT, MAP_INPUT, TREE_INPUT};
use crate::utils::error::ParseError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Benchmarked operation
///
/// Each operation owns one measurement column in the input tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Add,
    Lookup,
    Remove,
}

impl Operation {
    /// All operations, in report order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Lookup, Operation::Remove];

    /// Column index of this operation's measurement in an input table
    pub const fn column(self) -> usize {
        match self {
            Operation::Add => 1,
            Operation::Lookup => 2,
            Operation::Remove => 3,
        }
    }

    /// Lowercase identifier (`add`, `lookup`, `remove`)
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Lookup => "lookup",
            Operation::Remove => "remove",
        }
    }

    /// Capitalized label used in report headers
    pub const fn title(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Lookup => "Lookup",
            Operation::Remove => "Remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "lookup" => Ok(Operation::Lookup),
            "remove" => Ok(Operation::Remove),
            other => Err(ParseError::UnknownOperation(other.to_string())),
        }
    }
}

/// Resolve operation names, keeping order and dropping repeats
///
/// An empty list selects every operation.
pub fn parse_operations<S: AsRef<str>>(names: &[S]) -> Result<Vec<Operation>, ParseError> {
    if names.is_empty() {
        return Ok(Operation::ALL.to_vec());
    }

    let mut operations = Vec::with_capacity(names.len());
    for name in names {
        let operation = name.as_ref().parse::<Operation>()?;
        if !operations.contains(&operation) {
            operations.push(operation);
        }
    }
    Ok(operations)
}

/// Benchmarked data structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    List,
    Tree,
    Map,
}

impl Structure {
    pub const ALL: [Structure; 3] = [Structure::List, Structure::Tree, Structure::Map];

    /// Input table holding this structure's measurements
    pub const fn input_file(self) -> &'static str {
        match self {
            Structure::List => LIST_INPUT,
            Structure::Tree => TREE_INPUT,
            Structure::Map => MAP_INPUT,
        }
    }

    /// Label used in report headers
    pub const fn label(self) -> &'static str {
        match self {
            Structure::List => "List",
            Structure::Tree => "Tree",
            Structure::Map => "Map",
        }
    }
}

/// Measurements of one structure for one operation, keyed by size
///
/// Iteration is in ascending size order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    values: BTreeMap<i64, f64>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measurement, returning the one it replaced (if any)
    pub fn insert(&mut self, size: i64, value: f64) -> Option<f64> {
        self.values.insert(size, value)
    }

    pub fn get(&self, size: i64) -> Option<f64> {
        self.values.get(&size).copied()
    }

    pub fn contains(&self, size: i64) -> bool {
        self.values.contains_key(&size)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sizes(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.values.iter().map(|(size, value)| (*size, *value))
    }
}

impl FromIterator<(i64, f64)> for SampleSet {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// The three structures' sample sets for a single operation
#[derive(Debug, Clone, Default)]
pub struct StructureSamples {
    pub list: SampleSet,
    pub tree: SampleSet,
    pub map: SampleSet,
}

impl StructureSamples {
    pub fn get(&self, structure: Structure) -> &SampleSet {
        match structure {
            Structure::List => &self.list,
            Structure::Tree => &self.tree,
            Structure::Map => &self.map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_columns() {
        assert_eq!(Operation::Add.column(), 1);
        assert_eq!(Operation::Lookup.column(), 2);
        assert_eq!(Operation::Remove.column(), 3);
    }

    #[test]
    fn test_operation_from_str() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
        assert_eq!(
            "insert".parse::<Operation>(),
            Err(ParseError::UnknownOperation("insert".to_string()))
        );
        // Identifiers are case sensitive
        assert!("Add".parse::<Operation>().is_err());
    }

    #[test]
    fn test_parse_operations() {
        let none: [&str; 0] = [];
        assert_eq!(parse_operations(&none), Ok(Operation::ALL.to_vec()));
        assert_eq!(
            parse_operations(&["remove", "add", "remove"]),
            Ok(vec![Operation::Remove, Operation::Add])
        );
        assert_eq!(
            parse_operations(&["add", "insert"]),
            Err(ParseError::UnknownOperation("insert".to_string()))
        );
    }

    #[test]
    fn test_sample_set_orders_sizes() {
        let samples: SampleSet = vec![(100, 3.0), (10, 1.0), (50, 2.0)].into_iter().collect();
        let sizes: Vec<i64> = samples.sizes().collect();
        assert_eq!(sizes, vec![10, 50, 100]);
    }

    #[test]
    fn test_sample_set_insert_replaces() {
        let mut samples = SampleSet::new();
        assert_eq!(samples.insert(10, 1.0), None);
        assert_eq!(samples.insert(10, 2.0), Some(1.0));
        assert_eq!(samples.get(10), Some(2.0));
        assert_eq!(samples.len(), 1);
    }
}
