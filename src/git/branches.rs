use git2::BranchType;

use crate::error::Result;
use crate::git::repository::GitRepository;
use crate::models::BranchRef;

impl GitRepository {
    /// All local branches (`refs/heads/**`), sorted by name.
    ///
    /// Branches that cannot be labelled (non-UTF-8 names) or whose target
    /// is not a commit are skipped.
    pub fn branches(&self) -> Result<Vec<BranchRef>> {
        let mut branches = Vec::new();

        for entry in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;

            let name = match branch.name()? {
                Some(name) => name.to_string(),
                None => {
                    tracing::warn!("Skipping branch with non UTF-8 name");
                    continue;
                }
            };

            match branch.get().peel_to_commit() {
                Ok(commit) => branches.push(BranchRef::new(name, commit.id().to_string())),
                Err(e) => tracing::warn!("Skipping branch {}: {}", name, e),
            }
        }

        branches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(branches)
    }
}
