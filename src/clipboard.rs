use crate::errors::{RepoTextError, Result};
use arboard::Clipboard;
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace};

pub trait ClipboardPublisher {
    fn publish(&mut self, text: &str) -> Result<()>;
}

impl<T: ClipboardPublisher + ?Sized> ClipboardPublisher for &mut T {
    fn publish(&mut self, text: &str) -> Result<()> {
        (**self).publish(text)
    }
}

/// The system clipboard, backed by `arboard`.
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        debug!("Initializing clipboard");
        let clipboard =
            Clipboard::new().map_err(|e| RepoTextError::ClipboardInitError(e.to_string()))?;
        Ok(SystemClipboard { clipboard })
    }
}

impl ClipboardPublisher for SystemClipboard {
    fn publish(&mut self, text: &str) -> Result<()> {
        trace!("Publishing {} bytes to clipboard", text.len());
        self.clipboard
            .set_text(text.to_owned())
            .map_err(|e| RepoTextError::ClipboardWriteError(e.to_string()))
    }
}

/// Re-reads `output_file` in full and places its text on the clipboard.
pub fn publish_output_file<P, C>(output_file: P, publisher: &mut C) -> Result<()>
where
    P: AsRef<Path>,
    C: ClipboardPublisher + ?Sized,
{
    let output_file = output_file.as_ref();
    let content = fs::read_to_string(output_file).map_err(|e| {
        RepoTextError::FileReadError(format!("{}: {}", output_file.display(), e))
    })?;
    publisher.publish(&content)?;
    info!("Output copied to clipboard.");
    Ok(())
}
