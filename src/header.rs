// header-name -> column-index table, shared by the mapping file
// (comma-delimited) and flow-log (whitespace-delimited) parsers

use std::collections::HashMap;

use crate::error::FlowTagError;

pub struct HeaderIndex {
    indexes: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn from_delimited(line: &str, delimiter: char) -> Self {
        let indexes = line
            .trim()
            .split(delimiter)
            .enumerate()
            .map(|(i, name)| (name.to_string(), i))
            .collect();
        HeaderIndex { indexes }
    }

    pub fn from_whitespace(line: &str) -> Self {
        let indexes = line
            .split_whitespace()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i))
            .collect();
        HeaderIndex { indexes }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indexes.contains_key(name)
    }

    /// Column index for `name`, or `MissingHeader` if the header row
    /// never declared it.
    pub fn require(&self, name: &str) -> Result<usize, FlowTagError> {
        self.indexes
            .get(name)
            .copied()
            .ok_or_else(|| FlowTagError::MissingHeader {
                name: name.to_string(),
            })
    }

}

/// Extract column `index` from a parsed record. A record too short for
/// the header is fatal for the whole run.
pub fn field<'a>(record: &'a [&'a str], index: usize, line: usize) -> Result<&'a str, FlowTagError> {
    record
        .get(index)
        .copied()
        .ok_or(FlowTagError::MalformedRecord { line })
}
