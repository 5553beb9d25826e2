//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository whose commits are written directly
//! with git2, using fixed signature times so hashes and order are stable.

use std::path::PathBuf;

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    repo: Repository,
    dir: TempDir,
}

#[allow(dead_code)]
impl TestRepo {
    /// Create a new, empty repository in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init repository");
        Self { repo, dir }
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write a commit with an empty tree and return its id.
    ///
    /// No ref is updated; use `branch` to label it.
    pub fn commit(&self, message: &str, parents: &[Oid], time: i64) -> Oid {
        let sig = Signature::new("Test User", "test@example.com", &Time::new(time, 0))
            .expect("Failed to build signature");

        let tree_id = self
            .repo
            .treebuilder(None)
            .and_then(|builder| builder.write())
            .expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parents: Vec<git2::Commit> = parents
            .iter()
            .map(|id| self.repo.find_commit(*id).expect("Failed to find parent"))
            .collect();
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

        self.repo
            .commit(None, &sig, &sig, message, &tree, &parent_refs)
            .expect("Failed to write commit")
    }

    /// Point local branch `name` at `target`, creating it if needed.
    pub fn branch(&self, name: &str, target: Oid) {
        let commit = self.repo.find_commit(target).expect("Failed to find commit");
        self.repo
            .branch(name, &commit, true)
            .expect("Failed to create branch");
    }
}
