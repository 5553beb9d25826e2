//! In-memory commit graph.
//!
//! Commits live in an arena (`Vec<CommitNode>`) addressed by index, with a
//! hash -> index map for lookups. Parent and child links are index lists, so
//! the graph has no shared ownership and is read-only once built.
//!
//! Built once per run from the loader's records. Used by: `render::Renderer`.

use std::collections::{HashMap, HashSet};

use crate::error::{AppError, Result};
use crate::models::{BranchRef, CommitRecord};
use crate::render::queue::Priority;

#[derive(Debug, Clone)]
pub struct CommitNode {
    pub hash: String,
    pub timestamp: i64,
    /// Parent indices in commit order, without duplicates.
    pub parents: Vec<usize>,
    /// Child indices in priority order (newest first, then by hash).
    pub children: Vec<usize>,
    /// Branch names pointing at this commit, sorted.
    pub branches: Vec<String>,
}

impl CommitNode {
    pub fn priority(&self) -> Priority {
        Priority::new(self.timestamp, &self.hash)
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CommitGraph {
    nodes: Vec<CommitNode>,
    index: HashMap<String, usize>,
}

impl CommitGraph {
    /// Build the graph from loaded commits and branch refs.
    ///
    /// Only commits reachable from a branch tip are kept. Any parent or
    /// branch target missing from `commits` is a `DanglingReference`.
    pub fn build(commits: Vec<CommitRecord>, branches: Vec<BranchRef>) -> Result<Self> {
        let mut records: HashMap<String, CommitRecord> = HashMap::with_capacity(commits.len());
        for record in commits {
            records.entry(record.hash.clone()).or_insert(record);
        }

        for branch in &branches {
            if !records.contains_key(&branch.target) {
                return Err(AppError::DanglingReference {
                    hash: branch.target.clone(),
                    referenced_by: format!("refs/heads/{}", branch.name),
                });
            }
        }

        // Walk parent edges from every tip; this is also where missing
        // parents are caught.
        let mut reachable: HashSet<&str> = HashSet::with_capacity(records.len());
        let mut stack: Vec<&str> = branches.iter().map(|b| b.target.as_str()).collect();
        while let Some(hash) = stack.pop() {
            if !reachable.insert(hash) {
                continue;
            }
            let record = &records[hash];
            for parent in &record.parents {
                if !records.contains_key(parent) {
                    return Err(AppError::DanglingReference {
                        hash: parent.clone(),
                        referenced_by: record.hash.clone(),
                    });
                }
                if !reachable.contains(parent.as_str()) {
                    stack.push(parent);
                }
            }
        }

        let pruned = records.len() - reachable.len();
        if pruned > 0 {
            tracing::debug!("Pruned {} commits unreachable from any branch", pruned);
        }

        // Sorted hashes give every node a stable index independent of
        // HashMap iteration order.
        let mut hashes: Vec<&str> = reachable.into_iter().collect();
        hashes.sort_unstable();

        let index: HashMap<String, usize> = hashes
            .iter()
            .enumerate()
            .map(|(i, hash)| (hash.to_string(), i))
            .collect();

        let mut nodes: Vec<CommitNode> = hashes
            .iter()
            .map(|hash| {
                let record = &records[*hash];
                let mut parents: Vec<usize> = Vec::with_capacity(record.parents.len());
                for parent in &record.parents {
                    let idx = index[parent.as_str()];
                    if !parents.contains(&idx) {
                        parents.push(idx);
                    }
                }
                CommitNode {
                    hash: record.hash.clone(),
                    timestamp: record.timestamp,
                    parents,
                    children: Vec::new(),
                    branches: Vec::new(),
                }
            })
            .collect();

        for child in 0..nodes.len() {
            for p in 0..nodes[child].parents.len() {
                let parent = nodes[child].parents[p];
                nodes[parent].children.push(child);
            }
        }

        let priorities: Vec<Priority> = nodes.iter().map(CommitNode::priority).collect();
        for node in &mut nodes {
            // Highest priority first.
            node.children.sort_by(|a, b| priorities[*b].cmp(&priorities[*a]));
        }

        for branch in branches {
            let idx = index[branch.target.as_str()];
            nodes[idx].branches.push(branch.name);
        }
        for node in &mut nodes {
            node.branches.sort();
            node.branches.dedup();
        }

        tracing::debug!("Built commit graph with {} commits", nodes.len());

        Ok(Self { nodes, index })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[CommitNode] {
        &self.nodes
    }

    pub fn node(&self, idx: usize) -> &CommitNode {
        &self.nodes[idx]
    }

    pub fn index_of(&self, hash: &str) -> Option<usize> {
        self.index.get(hash).copied()
    }

    pub fn get(&self, hash: &str) -> Option<&CommitNode> {
        self.index_of(hash).map(|idx| &self.nodes[idx])
    }

    pub fn hashes<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = String> + 'a {
        indices.iter().map(|&idx| self.nodes[idx].hash.clone())
    }
}
