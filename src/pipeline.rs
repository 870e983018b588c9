use crate::aggregate::{aggregate, write_document};
use crate::clipboard::{publish_output_file, ClipboardPublisher};
use crate::errors::{RepoTextError, Result};
use crate::selector::{preset_excludes, PRESET_EXCLUDES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_OUTPUT_FILE: &str = "repo_content.txt";

/// Everything a run needs, with no interactive input involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub root: PathBuf,
    pub output_file: PathBuf,
    pub excluded_files: BTreeSet<String>,
    pub excluded_dirs: BTreeSet<String>,
    pub copy_to_clipboard: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            root: PathBuf::from("."),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            excluded_files: BTreeSet::new(),
            excluded_dirs: BTreeSet::new(),
            copy_to_clipboard: true,
        }
    }
}

impl PipelineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let raw = fs::read_to_string(path)
            .map_err(|e| RepoTextError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Adds the preset exclusions to both the file and directory sets.
    pub fn with_presets(mut self) -> Self {
        for preset in PRESET_EXCLUDES {
            self.excluded_files.insert(preset.to_string());
            self.excluded_dirs.insert(preset.to_string());
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(RepoTextError::ConfigError(format!(
                "Root directory not found: {}",
                self.root.display()
            )));
        }

        if let Some(parent) = self.output_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(RepoTextError::ConfigError(format!(
                    "Output directory not found: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}

/// Command-line choices layered over a [`PipelineConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub root: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub no_clipboard: bool,
    pub no_presets: bool,
}

impl CliOverrides {
    /// Without a config file the exclusions come from the prompts.
    pub fn is_interactive(&self) -> bool {
        self.config_file.is_none()
    }

    /// Presets offered to the interactive prompts.
    pub fn interactive_presets(&self) -> Vec<String> {
        if self.no_presets {
            Vec::new()
        } else {
            preset_excludes()
        }
    }

    /// Loads the config file (or defaults) and applies the overrides on top.
    ///
    /// Presets are merged here only for non-interactive runs; interactive
    /// runs get them through the prompts instead.
    pub fn build_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config_file {
            Some(path) => PipelineConfig::from_file(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(output) = &self.output_file {
            config.output_file = output.clone();
        }
        if self.no_clipboard {
            config.copy_to_clipboard = false;
        }
        if !self.is_interactive() && !self.no_presets {
            config = config.with_presets();
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub included: Vec<String>,
    pub failed: Vec<String>,
    pub copied_to_clipboard: bool,
}

fn is_output_file(file: &str, output: Option<&PathBuf>) -> bool {
    match output {
        Some(output) => fs::canonicalize(file).is_ok_and(|p| &p == output),
        None => false,
    }
}

/// Aggregates `files`, writes the output file and, when enabled, copies it
/// to the clipboard created by `make_publisher`.
pub fn run_pipeline<C, F>(
    config: &PipelineConfig,
    files: &[String],
    make_publisher: F,
) -> Result<PipelineReport>
where
    C: ClipboardPublisher,
    F: FnOnce() -> Result<C>,
{
    // A previous run's output inside the root must not feed back into this one.
    let output = fs::canonicalize(&config.output_file).ok();
    let files: Vec<String> = files
        .iter()
        .filter(|file| !is_output_file(file, output.as_ref()))
        .cloned()
        .collect();

    let document = aggregate(&files, &config.excluded_files, &config.excluded_dirs);
    write_document(&document, &config.output_file)?;
    info!(
        "Wrote {} records to {}",
        document.records.len(),
        config.output_file.display()
    );

    let mut report = PipelineReport {
        included: document.included(),
        failed: document.failed(),
        copied_to_clipboard: false,
    };

    if config.copy_to_clipboard {
        let mut publisher = make_publisher()?;
        publish_output_file(&config.output_file, &mut publisher)?;
        report.copied_to_clipboard = true;
    }

    Ok(report)
}

pub fn print_summary<W: Write>(writer: &mut W, report: &PipelineReport) -> Result<()> {
    writeln!(writer, "\nThe following files were saved:")?;
    for file in &report.included {
        writeln!(writer, "{}", file)?;
    }
    if report.copied_to_clipboard {
        writeln!(writer, "\nThe output has been copied to the clipboard.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{ "excluded_dirs": ["./target"] }"#).unwrap();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert!(config.copy_to_clipboard);
        assert!(config.excluded_dirs.contains("./target"));
        assert!(config.excluded_files.is_empty());
    }

    #[test]
    fn presets_merge_into_both_sets() {
        let config = PipelineConfig::default().with_presets();
        assert!(config.excluded_files.contains(".git"));
        assert!(config.excluded_dirs.contains("node_modules"));
    }

    #[test]
    fn summary_lists_paths_and_clipboard_line() {
        let report = PipelineReport {
            included: vec!["./a.txt".to_string(), "./sub/b.txt".to_string()],
            failed: Vec::new(),
            copied_to_clipboard: true,
        };
        let mut out = Vec::new();
        print_summary(&mut out, &report).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nThe following files were saved:\n./a.txt\n./sub/b.txt\n\nThe output has been copied to the clipboard.\n"
        );
    }
}
