//! File writing.

use crate::error::EmitError;
use crate::layout::BuildFile;
use std::fs;
use std::path::Path;

/// Writes generated files under the output directory, creating
/// intermediate directories as needed.
///
/// # Errors
/// Returns `EmitError::NotADirectory` when the output path exists but is
/// a file, or `EmitError::Io` for filesystem failures.
pub fn write_files(files: &[BuildFile], out_dir: &Path) -> Result<(), EmitError> {
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(EmitError::not_a_directory(out_dir.display().to_string()));
    }

    for file in files {
        let path = out_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.content)?;
        tracing::debug!("Wrote {}", path.display());
    }
    tracing::info!("Generated {} files into {}", files.len(), out_dir.display());

    Ok(())
}
