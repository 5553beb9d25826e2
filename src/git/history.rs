use git2::{Oid, Sort};

use crate::error::Result;
use crate::git::repository::GitRepository;
use crate::models::{BranchRef, CommitRecord};

impl GitRepository {
    /// Every commit reachable from the given branch tips, each visited once.
    pub fn commits(&self, branches: &[BranchRef]) -> Result<Vec<CommitRecord>> {
        if branches.is_empty() {
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        for branch in branches {
            revwalk.push(Oid::from_str(&branch.target)?)?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            commits.push(CommitRecord {
                hash: commit.id().to_string(),
                parents: commit.parent_ids().map(|id| id.to_string()).collect(),
                timestamp: commit.time().seconds(),
            });
        }

        Ok(commits)
    }
}
