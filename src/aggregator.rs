// src/aggregator.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;
use tracing::info;

use crate::error::FlowTagError;
use crate::header::{self, HeaderIndex};
use crate::resolver::TagResolver;

/// Consumes flow-log files record by record, classifying each record
/// through a shared `TagResolver` and accumulating two frequency
/// tables. Repeated `process` calls add into the same tables; callers
/// wanting per-file isolation construct a fresh aggregator.
pub struct FlowAggregator<'a> {
    resolver: &'a TagResolver,
    tag_counts: IndexMap<String, u64>,
    port_protocol_counts: IndexMap<(String, String), u64>,
}

impl<'a> FlowAggregator<'a> {
    pub fn new(resolver: &'a TagResolver) -> Self {
        FlowAggregator {
            resolver,
            tag_counts: IndexMap::new(),
            port_protocol_counts: IndexMap::new(),
        }
    }

    /// Classify every record in one flow-log file. The first line is a
    /// whitespace-delimited header that must carry a `version` column
    /// (sanity check that this is a flow log) plus `dstport` and
    /// `protocol`. Any malformed data line aborts the whole run.
    pub fn process(&mut self, path: impl AsRef<Path>) -> Result<(), FlowTagError> {
        if self.resolver.is_empty() {
            return Err(FlowTagError::InvalidConfiguration);
        }

        let path = path.as_ref();
        let file = File::open(path).map_err(|e| FlowTagError::io(path, e))?;
        let reader = BufReader::new(file);

        let mut columns: Option<(usize, usize)> = None;
        let mut records = 0u64;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| FlowTagError::io(path, e))?;
            match columns {
                None => {
                    let headers = HeaderIndex::from_whitespace(&line);
                    if !headers.contains("version") {
                        return Err(FlowTagError::InvalidHeader);
                    }
                    columns = Some((headers.require("dstport")?, headers.require("protocol")?));
                }
                Some((dstport_col, protocol_col)) => {
                    let record: Vec<&str> = line.split_whitespace().collect();
                    let dstport = header::field(&record, dstport_col, line_no + 1)?;
                    let protocol = header::field(&record, protocol_col, line_no + 1)?;

                    // flow-log values go in exactly as written, so a
                    // protocol differing in case from the mapping file
                    // counts as Untagged
                    let tag = self.resolver.resolve(dstport, protocol);
                    *self.tag_counts.entry(tag.to_string()).or_insert(0) += 1;
                    *self
                        .port_protocol_counts
                        .entry((dstport.to_string(), protocol.to_string()))
                        .or_insert(0) += 1;
                    records += 1;
                }
            }
        }

        info!(records, path = %path.display(), "flow log processed");
        Ok(())
    }

    /// tag -> count, keys in first-seen order.
    pub fn tag_counts(&self) -> &IndexMap<String, u64> {
        &self.tag_counts
    }

    /// (port, protocol) -> count, keys in first-seen order.
    pub fn port_protocol_counts(&self) -> &IndexMap<(String, String), u64> {
        &self.port_protocol_counts
    }
}
