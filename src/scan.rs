use crate::errors::Result;
use std::cmp::Ordering;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A path discovered under the scan root, rendered as the root joined with
/// its relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub files: Vec<String>,
    pub dirs: Vec<String>,
}

impl ScanResult {
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        let files = self.files.iter().map(|path| Entry {
            path: path.clone(),
            kind: EntryKind::File,
        });
        let dirs = self.dirs.iter().map(|path| Entry {
            path: path.clone(),
            kind: EntryKind::Directory,
        });
        files.chain(dirs)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }
}

// Symlinks to directories count as directories but are never descended into.
fn is_dir_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

// Files sort ahead of subdirectories so a directory's own files are listed
// before anything found deeper.
fn discovery_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    is_dir_entry(a)
        .cmp(&is_dir_entry(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Recursively lists every file and directory below `root`.
pub fn scan_directory<P: AsRef<Path>>(root: P) -> Result<ScanResult> {
    let root = root.as_ref();
    debug!("Scanning directory: {}", root.display());

    let mut result = ScanResult::default();
    for entry in WalkDir::new(root).min_depth(1).sort_by(discovery_order) {
        let entry = entry?;
        let path = entry.path().to_string_lossy().to_string();
        if is_dir_entry(&entry) {
            trace!("Found directory: {}", path);
            result.dirs.push(path);
        } else {
            trace!("Found file: {}", path);
            result.files.push(path);
        }
    }

    debug!(
        "Scan found {} files and {} directories",
        result.files.len(),
        result.dirs.len()
    );
    Ok(result)
}
