//! JSON output formatting

use std::io::{self, Write};

use crate::scan::ResultSet;

/// Write records as a pretty-printed JSON array.
pub fn write_json(out: &mut dyn Write, results: &ResultSet) -> io::Result<()> {
    let json = serde_json::to_string_pretty(results.records())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(out, "{}", json)
}
