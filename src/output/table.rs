//! Table output formatting

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::scan::ResultSet;

const HEADERS: [&str; 3] = ["VERSION PATH", "VERSION", "DEPTH"];

/// Write records as aligned columns with a bold header row, ending with an
/// installation count summary.
pub fn write_table(out: &mut dyn WriteColor, results: &ResultSet) -> io::Result<()> {
    let rows: Vec<[String; 3]> = results
        .records()
        .iter()
        .map(|record| {
            [
                record.version_path.display().to_string(),
                record.version.clone(),
                record.depth.to_string(),
            ]
        })
        .collect();

    let mut widths = [HEADERS[0].len(), HEADERS[1].len(), HEADERS[2].len()];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
    write!(
        out,
        "{:<path_w$}  {:<version_w$}  {}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        path_w = widths[0],
        version_w = widths[1]
    )?;
    out.reset()?;
    writeln!(out)?;

    for row in &rows {
        writeln!(
            out,
            "{:<path_w$}  {:<version_w$}  {}",
            row[0],
            row[1],
            row[2],
            path_w = widths[0],
            version_w = widths[1]
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{} installations", results.len())?;
    Ok(())
}
