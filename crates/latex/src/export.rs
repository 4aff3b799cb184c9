use std::path::{Path, PathBuf};

use crate::error::{LatexError, Result};

const TEX_EXTENSION: &str = ".tex";

/// Turn a user-supplied name into the `.tex` file name to write.
///
/// Blank names are rejected. `.tex` is appended unless the name already ends
/// with it; a bare `".tex"` is treated as having no stem and gets a second one.
pub fn tex_file_name(name: &str) -> Result<PathBuf> {
    if name.trim().is_empty() {
        return Err(LatexError::InvalidFileName);
    }

    if name.len() <= TEX_EXTENSION.len() || !name.ends_with(TEX_EXTENSION) {
        Ok(PathBuf::from(format!("{name}{TEX_EXTENSION}")))
    } else {
        Ok(PathBuf::from(name))
    }
}

/// Write rendered lines to `<name>.tex`, replacing any existing file.
///
/// The name is validated before anything touches the filesystem.
/// Returns the path that was written.
pub fn export_tex<S: AsRef<str>>(lines: &[S], name: &str) -> Result<PathBuf> {
    let path = tex_file_name(name)?;
    write_lines(&path, lines)?;
    Ok(path)
}

fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let content = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), lines = lines.len(), "wrote tex file");
    Ok(())
}
