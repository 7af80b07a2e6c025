// fixed-width two-section report, rows in first-seen order

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;

use crate::error::FlowTagError;

pub fn write_report<W: Write>(
    tag_counts: &IndexMap<String, u64>,
    port_protocol_counts: &IndexMap<(String, String), u64>,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "Tag Counts:")?;
    writeln!(out, "{:<15}{:<10}", "Tag", "Count")?;
    for (tag, count) in tag_counts {
        writeln!(out, "{:<15}{:<10}", tag, count)?;
    }

    writeln!(out)?;
    writeln!(out, "Port/Protocol Combination Counts:")?;
    writeln!(out, "{:<10}{:<10}{:<10}", "Port", "Protocol", "Count")?;
    for ((port, protocol), count) in port_protocol_counts {
        writeln!(out, "{:<10}{:<10}{:<10}", port, protocol, count)?;
    }
    Ok(())
}

pub fn write_report_file(
    tag_counts: &IndexMap<String, u64>,
    port_protocol_counts: &IndexMap<(String, String), u64>,
    path: impl AsRef<Path>,
) -> Result<(), FlowTagError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| FlowTagError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_report(tag_counts, port_protocol_counts, &mut out)
        .and_then(|_| out.flush())
        .map_err(|e| FlowTagError::io(path, e))
}
