//! Configuration and constants for the aggregator.

use crate::parser::schema::Operation;

/// Field separator used by both the benchmark inputs and the reports
pub const FIELD_DELIMITER: u8 = b' ';

// Input files, one per benchmarked structure
pub const LIST_INPUT: &str = "list.dat";
pub const TREE_INPUT: &str = "tree.dat";
pub const MAP_INPUT: &str = "map.dat";

// Report naming: combined_<operation>_ratios.dat
pub const OUTPUT_PREFIX: &str = "combined_";
pub const OUTPUT_SUFFIX: &str = "_ratios.dat";

/// Column holding the size in every input table
pub const SIZE_COLUMN: usize = 0;

/// File name of the combined report for an operation
pub fn output_file_name(operation: Operation) -> String {
    format!("{}{}{}", OUTPUT_PREFIX, operation.name(), OUTPUT_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(Operation::Add), "combined_add_ratios.dat");
        assert_eq!(output_file_name(Operation::Lookup), "combined_lookup_ratios.dat");
        assert_eq!(output_file_name(Operation::Remove), "combined_remove_ratios.dat");
    }
}
