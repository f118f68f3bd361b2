//! File sink for the assembled record list.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// `{SET}_cardlist.csv` (or a custom suffix) inside `dir`.
pub fn output_path(dir: &Path, set: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{set}{suffix}"))
}

/// Write the lines to `dest`, one record per line with a trailing newline.
///
/// The content goes to a temp file next to the destination first and is
/// renamed into place, so an interrupted run never leaves a truncated list
/// behind. Output is UTF-8 whatever the source API's encoding was.
pub fn write_lines(dest: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut body = String::new();
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }

    let tmp_dest = dest.with_extension(format!(
        "{}.tmp",
        dest.extension().and_then(|e| e.to_str()).unwrap_or("")
    ));

    let result = (|| -> Result<()> {
        fs::write(&tmp_dest, body.as_bytes())?;
        fs::rename(&tmp_dest, dest)?;
        Ok(())
    })();

    if result.is_err() {
        // Clean up partial temp file on any error
        let _ = fs::remove_file(&tmp_dest);
    }

    result
}
