use clap::ValueEnum;

/// How hints are written to stdout.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// `<input>: <glyph> <breakdown>`, one hint per line.
    #[default]
    Line,
    /// One JSON object per line.
    Jsonl,
    /// Aligned columns.
    Table,
    /// Hint markup as the host would insert it.
    Html,
}
