// src/resolver.rs
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::FlowTagError;
use crate::header::{self, HeaderIndex};

pub const UNTAGGED: &str = "Untagged";

/// Lookup table from (destination port, protocol) to a classification
/// tag, loaded once from a comma-delimited mapping file. Read-only
/// after construction; one resolver may serve any number of
/// sequential aggregation runs.
#[derive(Debug)]
pub struct TagResolver {
    // keys lowercased at load time; tags keep their original casing
    tag_map: HashMap<(String, String), String>,
}

impl TagResolver {
    /// Load the mapping file. The first line is a header row that must
    /// declare `dstport`, `protocol` and `tag`; extra columns are
    /// ignored and column order is irrelevant. On duplicate
    /// (port, protocol) keys the last row wins.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FlowTagError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| FlowTagError::io(path, e))?;
        let reader = BufReader::new(file);

        let mut tag_map = HashMap::new();
        let mut columns: Option<(usize, usize, usize)> = None;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| FlowTagError::io(path, e))?;
            match columns {
                None => {
                    let headers = HeaderIndex::from_delimited(&line, ',');
                    columns = Some((
                        headers.require("dstport")?,
                        headers.require("protocol")?,
                        headers.require("tag")?,
                    ));
                }
                Some((dstport_col, protocol_col, tag_col)) => {
                    let record: Vec<&str> = line.trim().split(',').collect();
                    let dstport = header::field(&record, dstport_col, line_no + 1)?;
                    let protocol = header::field(&record, protocol_col, line_no + 1)?;
                    let tag = header::field(&record, tag_col, line_no + 1)?;
                    tag_map.insert(
                        (dstport.to_lowercase(), protocol.to_lowercase()),
                        tag.to_string(),
                    );
                }
            }
        }

        debug!(entries = tag_map.len(), "loaded tag map");
        Ok(TagResolver { tag_map })
    }

    /// Tag for an exact (port, protocol) pair, or `"Untagged"` when no
    /// mapping entry matches. No case normalization happens here, so a
    /// flow-log value like `TCP` never matches the lowercased map keys.
    pub fn resolve(&self, port: &str, protocol: &str) -> &str {
        self.tag_map
            .get(&(port.to_string(), protocol.to_string()))
            .map(String::as_str)
            .unwrap_or(UNTAGGED)
    }

    pub fn is_empty(&self) -> bool {
        self.tag_map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tag_map.len()
    }
}
