//! Output configuration types

use clap::ValueEnum;

/// Presentation format for the final result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns with optional color
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
    /// Header row plus one quoted row per record
    Csv,
    /// YAML sequence of records
    Yaml,
    /// Bare number of installations
    Count,
}
