use std::fmt;

/// Counts gathered while building
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// HTML documents run through the pipeline
    pub processed: usize,
    /// Documents that received a table of contents
    pub indexed: usize,
    /// Other files copied verbatim
    pub copied: usize,
    /// Files that could not be read or written
    pub failed: usize,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} document(s) processed, {} indexed, {} file(s) copied, {} failed",
            self.processed, self.indexed, self.copied, self.failed
        )
    }
}

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileOutcome {
    Indexed,
    Unchanged,
    Copied,
    Failed,
}
