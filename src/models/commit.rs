use serde::Serialize;

/// One commit as read from repository storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    pub hash: String,
    /// Parent hashes in the order the commit lists them. Empty for a root.
    pub parents: Vec<String>,
    /// Committer time in seconds, only used to order ready commits.
    pub timestamp: i64,
}

impl CommitRecord {
    pub fn new(hash: impl Into<String>, parents: &[&str], timestamp: i64) -> Self {
        Self {
            hash: hash.into(),
            parents: parents.iter().map(|p| p.to_string()).collect(),
            timestamp,
        }
    }
}

/// A local branch name bound to its tip commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchRef {
    pub name: String,
    pub target: String,
}

impl BranchRef {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }
}
