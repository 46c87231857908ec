use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Input and output locations, relative to the working directory.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// BLS monthly private employment export.
    pub series_path: PathBuf,
    /// Presidential term list.
    pub terms_path: PathBuf,
    /// Markdown report written at the end of the run.
    pub report_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            series_path: PathBuf::from("BLS_private.csv"),
            terms_path: PathBuf::from("presidents.txt"),
            report_path: PathBuf::from("conclusions.md"),
        }
    }
}
