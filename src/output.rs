//! Saving generated batches as plain newline-separated text.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Write `names` to `path`, one per line, with no trailing newline.
///
/// The file is written to a temporary sibling first and renamed into place,
/// so an existing file is never left half-written.
pub fn save_batch<P: AsRef<Path>>(path: P, names: &[String]) -> io::Result<()> {
    let path = path.as_ref();
    if names.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no usernames to save",
        ));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(names.join("\n").as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;

    info!(path = %path.display(), count = names.len(), "saved usernames");
    Ok(())
}

/// Read a file written by [`save_batch`] back into its names
pub fn load_batch<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    if text.is_empty() {
        return Ok(Vec::new());
    }
    Ok(text.split('\n').map(str::to_string).collect())
}
