use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Per-file errors render without the path; status lines already carry it
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Base directory not found: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("content is not valid UTF-8: {0}")]
    Encoding(#[source] FromUtf8Error),

    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenameError>;
