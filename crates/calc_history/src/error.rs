use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("history I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("{} is not a history file (header {found:?})", .path.display())]
    BadHeader { path: PathBuf, found: String },
}
