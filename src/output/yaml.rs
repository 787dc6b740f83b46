//! YAML output formatting

use std::io::{self, Write};

use crate::scan::ResultSet;

/// Write records as a YAML sequence.
pub fn write_yaml(out: &mut dyn Write, results: &ResultSet) -> io::Result<()> {
    let yaml = serde_yaml::to_string(results.records())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    write!(out, "{}", yaml)
}
