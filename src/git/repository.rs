use git2::Repository;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::graph::CommitGraph;

/// Read-only handle on a local repository.
pub struct GitRepository {
    pub repo: Repository,
    pub path: String,
}

impl GitRepository {
    /// Open the repository containing `path`, searching parent directories
    /// the way `git` itself does.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let repo = Repository::discover(&path).map_err(|_| AppError::RepoNotFound(path_str.clone()))?;

        tracing::debug!("Opened repository at {}", repo.path().display());

        Ok(Self {
            repo,
            path: path_str,
        })
    }

    /// Load every local branch and the commits reachable from them.
    pub fn load_graph(&self) -> Result<CommitGraph> {
        let branches = self.branches()?;
        let commits = self.commits(&branches)?;

        tracing::info!(
            "Loaded {} commits from {} branches in {}",
            commits.len(),
            branches.len(),
            self.path
        );

        CommitGraph::build(commits, branches)
    }
}
