//! Application error types.
//!
//! Defines `AppError` for every failure the loader, renderer and writers can
//! surface. Structural errors carry the offending hash so they can be checked
//! against the repository with `git cat-file -p <hash>`.
//!
//! Nothing here is retried: all variants describe input or I/O problems.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    #[error("Cyclic history: commit {hash} can never become ready")]
    CyclicHistory { hash: String },

    #[error("Incomplete traversal: commit {hash} was never printed ({printed} of {total} commits printed)")]
    IncompleteTraversal {
        hash: String,
        printed: usize,
        total: usize,
    },

    #[error("Dangling reference: {referenced_by} points to missing commit {hash}")]
    DanglingReference { hash: String, referenced_by: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
