use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a Python file: {0}")]
    UnsupportedContent(PathBuf),
}

/// Read a source file and return its content
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a file after checking it is Python according to `is_python`.
pub fn read_python_source(
    path: &Path,
    is_python: impl Fn(&Path) -> bool,
) -> Result<String, IoError> {
    if !is_python(path) {
        return Err(IoError::UnsupportedContent(path.to_path_buf()));
    }
    read_source(path)
}
