use crate::errors::{RepoTextError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    Content(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub path: String,
    pub body: RecordBody,
}

impl Record {
    pub fn render(&self) -> String {
        match &self.body {
            RecordBody::Content(content) => format!("\n{}\n\n{}\n", self.path, content),
            RecordBody::Error(message) => format!(
                "Error reading file: {}\nError: {}\n\n",
                self.path, message
            ),
        }
    }
}

/// Records in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDocument {
    pub records: Vec<Record>,
}

impl OutputDocument {
    pub fn render(&self) -> String {
        self.records.iter().map(Record::render).collect()
    }

    /// Every path that made it past the exclusion filters, read or not.
    pub fn included(&self) -> Vec<String> {
        self.records.iter().map(|r| r.path.clone()).collect()
    }

    pub fn failed(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| matches!(r.body, RecordBody::Error(_)))
            .map(|r| r.path.clone())
            .collect()
    }
}

/// Raw string-prefix match against directories, exact match against files.
/// `"src"` therefore also excludes `"src2/lib.rs"`.
pub fn is_excluded<F, D>(path: &str, excluded_files: F, excluded_dirs: D) -> bool
where
    F: IntoIterator,
    F::Item: AsRef<str>,
    D: IntoIterator,
    D::Item: AsRef<str>,
{
    excluded_dirs
        .into_iter()
        .any(|dir| path.starts_with(dir.as_ref()))
        || excluded_files.into_iter().any(|file| file.as_ref() == path)
}

/// Reads every non-excluded file into an [`OutputDocument`].
///
/// A file that cannot be read becomes an error record; it never aborts the run.
pub fn aggregate<F, D>(files: &[String], excluded_files: F, excluded_dirs: D) -> OutputDocument
where
    F: IntoIterator + Copy,
    F::Item: AsRef<str>,
    D: IntoIterator + Copy,
    D::Item: AsRef<str>,
{
    let mut document = OutputDocument::default();

    for file in files {
        if is_excluded(file, excluded_files, excluded_dirs) {
            trace!("Skipping excluded file: {}", file);
            continue;
        }

        let body = match fs::read_to_string(file) {
            Ok(content) => {
                debug!("Read content for file: {}", file);
                RecordBody::Content(content)
            }
            Err(e) => {
                warn!("Failed to read file {}: {}", file, e);
                RecordBody::Error(e.to_string())
            }
        };
        document.records.push(Record {
            path: file.clone(),
            body,
        });
    }

    info!(
        "Aggregated {} of {} files ({} unreadable)",
        document.records.len(),
        files.len(),
        document.failed().len()
    );
    document
}

/// Writes the rendered document, replacing any existing file.
pub fn write_document<P: AsRef<Path>>(document: &OutputDocument, output_file: P) -> Result<()> {
    let output_file = output_file.as_ref();
    debug!("Writing output document to {}", output_file.display());
    fs::write(output_file, document.render()).map_err(|e| {
        RepoTextError::OutputWriteError(format!("{}: {}", output_file.display(), e))
    })
}
