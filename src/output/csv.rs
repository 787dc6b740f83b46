//! CSV output formatting

use std::borrow::Cow;
use std::io::{self, Write};

use crate::scan::ResultSet;

/// Write records as CSV with a header row.
pub fn write_csv(out: &mut dyn Write, results: &ResultSet) -> io::Result<()> {
    writeln!(out, "version_path,version,depth")?;
    for record in results.records() {
        writeln!(
            out,
            "{},{},{}",
            escape(&record.version_path.to_string_lossy()),
            escape(&record.version),
            record.depth
        )?;
    }
    Ok(())
}

/// Quote a field when it contains a comma, quote, or newline.
fn escape<'a>(field: &'a str) -> Cow<'a, str> {
    if field.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
