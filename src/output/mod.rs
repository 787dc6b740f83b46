//! Result rendering
//!
//! Formatters for presenting the final result set:
//!
//! - `table` - aligned console output with optional color
//! - `json` - pretty-printed JSON array
//! - `csv` - header row plus minimally quoted record rows
//! - `yaml` - YAML sequence
//!
//! `render` dispatches on `OutputFormat` and writes to stdout; the
//! individual writers take a plain sink so tests can capture them.

mod config;
mod csv;
mod json;
mod table;
mod yaml;

// Re-export public types and functions
pub use config::OutputFormat;
pub use csv::write_csv;
pub use json::write_json;
pub use table::write_table;
pub use yaml::write_yaml;

use std::io::{self, Write};

use termcolor::{ColorChoice, StandardStream};

use crate::scan::ResultSet;

/// Render `results` to stdout in the requested format.
pub fn render(results: &ResultSet, format: OutputFormat, use_color: bool) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            let choice = if use_color {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            };
            let mut stdout = StandardStream::stdout(choice);
            write_table(&mut stdout, results)
        }
        OutputFormat::Json => write_json(&mut io::stdout().lock(), results),
        OutputFormat::Csv => write_csv(&mut io::stdout().lock(), results),
        OutputFormat::Yaml => write_yaml(&mut io::stdout().lock(), results),
        OutputFormat::Count => writeln!(io::stdout().lock(), "{}", results.len()),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::scan::FindRecord;

    use super::*;

    fn sample_results() -> ResultSet {
        let mut results = ResultSet::new();
        results.insert(FindRecord {
            version_path: PathBuf::from("/srv/www/a/wp-includes/version.php"),
            version: "4.8-alpha".to_string(),
            depth: 1,
        });
        results.insert(FindRecord {
            version_path: PathBuf::from("/srv/www/b/c/wp-includes/version.php"),
            version: String::new(),
            depth: 2,
        });
        results
    }

    #[test]
    fn test_json_round_trips_contract_fields() {
        let mut out = Vec::new();
        write_json(&mut out, &sample_results()).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let records = parsed.as_array().expect("JSON output should be an array");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get("version_path").and_then(|v| v.as_str()),
            Some("/srv/www/a/wp-includes/version.php")
        );
        assert_eq!(
            records[0].get("version").and_then(|v| v.as_str()),
            Some("4.8-alpha")
        );
        assert_eq!(records[0].get("depth").and_then(|v| v.as_i64()), Some(1));
        // A parse miss serializes as an empty string, not null.
        assert_eq!(records[1].get("version").and_then(|v| v.as_str()), Some(""));
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_record() {
        let mut out = Vec::new();
        write_csv(&mut out, &sample_results()).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "version_path,version,depth");
        assert_eq!(lines[1], "/srv/www/a/wp-includes/version.php,4.8-alpha,1");
        assert_eq!(lines[2], "/srv/www/b/c/wp-includes/version.php,,2");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_yaml_parses_back_to_records() {
        let mut out = Vec::new();
        write_yaml(&mut out, &sample_results()).unwrap();

        let parsed: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();
        let records = parsed.as_sequence().expect("YAML output should be a sequence");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get("version").and_then(|v| v.as_str()),
            Some("4.8-alpha")
        );
        assert_eq!(records[1].get("depth").and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn test_empty_set_serializes_as_empty_array() {
        let mut out = Vec::new();
        write_json(&mut out, &ResultSet::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");

        let mut out = Vec::new();
        write_csv(&mut out, &ResultSet::new()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "version_path,version,depth\n"
        );
    }
}
