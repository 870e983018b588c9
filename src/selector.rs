use crate::errors::{RepoTextError, Result};
use crate::scan::ScanResult;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, trace, warn};

/// Names that are always excluded, whatever the user picks.
pub const PRESET_EXCLUDES: &[&str] = &[
    "node_modules",
    ".git",
    ".DS_Store",
    "dist",
    "__pycache__",
    "README.md",
];

pub const INVALID_INPUT_WARNING: &str = "Invalid input. Proceeding with all items included.";

pub fn preset_excludes() -> Vec<String> {
    PRESET_EXCLUDES.iter().map(|s| s.to_string()).collect()
}

/// Parses a line of space-separated, 1-based indices.
pub fn parse_indices(input: &str) -> Result<Vec<usize>> {
    input
        .split_whitespace()
        .filter_map(|token| match token.parse::<i64>() {
            // Zero and negative indices are valid integers that simply select nothing.
            Ok(index) if index < 1 => None,
            Ok(index) => Some(Ok(index as usize)),
            // Too large to be any item's position.
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                trace!("Dropping out-of-range index {}", token);
                None
            }
            Err(e) => Some(Err(RepoTextError::InvalidSelection(format!(
                "{}: {}",
                token, e
            )))),
        })
        .collect()
}

/// Merges `presets` with the items picked by `input`.
///
/// Empty input keeps the presets unchanged. Out-of-range indices are dropped.
/// Malformed input is logged and treated as an empty selection.
pub fn select_exclusions(input: &str, items: &[String], presets: &[String]) -> Vec<String> {
    let mut excluded = presets.to_vec();
    if input.trim().is_empty() {
        trace!("Empty selection, keeping presets only");
        return excluded;
    }

    match parse_indices(input) {
        Ok(indices) => {
            excluded.extend(
                indices
                    .into_iter()
                    .filter_map(|index| items.get(index - 1))
                    .cloned(),
            );
            debug!("Selected {} exclusions", excluded.len() - presets.len());
            excluded
        }
        Err(e) => {
            warn!("Ignoring selection '{}': {}", input.trim(), e);
            presets.to_vec()
        }
    }
}

pub trait ExclusionSelector {
    fn select(&mut self, prompt: &str, items: &[String], presets: &[String]) -> Result<Vec<String>>;
}

/// Prompts on a writer and reads the selection from a line-oriented reader.
pub struct InteractiveSelector<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InteractiveSelector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        InteractiveSelector { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> ExclusionSelector for InteractiveSelector<R, W> {
    fn select(&mut self, prompt: &str, items: &[String], presets: &[String]) -> Result<Vec<String>> {
        writeln!(self.writer, "{}", prompt)?;
        writeln!(self.writer, "Preset excludes: {}", presets.join(" "))?;
        for (idx, item) in items.iter().enumerate() {
            writeln!(self.writer, "{}. {}", idx + 1, item)?;
        }
        write!(
            self.writer,
            "\nEnter the numbers of the items to exclude (space-separated), or press Enter to include all: "
        )?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;

        if !line.trim().is_empty() && parse_indices(&line).is_err() {
            writeln!(self.writer, "{}", INVALID_INPUT_WARNING)?;
        }
        Ok(select_exclusions(&line, items, presets))
    }
}

/// Runs `selector` over the scanned files, then the scanned directories.
///
/// Returns `(excluded_files, excluded_dirs)`. An empty candidate list skips
/// its prompt and keeps the presets.
pub fn collect_exclusions<S: ExclusionSelector + ?Sized>(
    scan: &ScanResult,
    presets: &[String],
    selector: &mut S,
) -> Result<(Vec<String>, Vec<String>)> {
    let excluded_files = if scan.files.is_empty() {
        presets.to_vec()
    } else {
        selector.select("\nSelect files to exclude:", &scan.files, presets)?
    };

    let excluded_dirs = if scan.dirs.is_empty() {
        presets.to_vec()
    } else {
        selector.select("\nSelect directories to exclude:", &scan.dirs, presets)?
    };

    Ok((excluded_files, excluded_dirs))
}
