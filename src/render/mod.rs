//! Fragment renderer - turns a commit graph into a linear annotated stream.
//!
//! Commits are printed children-first. Each pop from the ready queue starts
//! a fragment, which keeps following first parents for as long as the next
//! parent has no unprinted children left. Where a fragment stops short of a
//! root, a sticky-end line lists the parents it jumped away from, and the
//! next fragment opens with a sticky-start line listing the children it
//! continues from.
//!
//! - `queue`: ReadyQueue and the Priority key
//! - `output`: text / NDJSON writers for `Line`

pub mod output;
pub mod queue;

use crate::error::{AppError, Result};
use crate::graph::CommitGraph;
use crate::models::Line;

use queue::ReadyQueue;

/// Summary of a finished render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub commits: usize,
    pub fragments: usize,
}

pub struct Renderer<'g> {
    graph: &'g CommitGraph,
    printed: Vec<bool>,
    /// Unprinted children per commit; zero means ready.
    pending: Vec<usize>,
    queue: ReadyQueue,
    stats: RenderStats,
    after_sticky_end: bool,
}

impl<'g> Renderer<'g> {
    pub fn new(graph: &'g CommitGraph) -> Self {
        let pending: Vec<usize> = graph.nodes().iter().map(|n| n.children.len()).collect();

        let mut queue = ReadyQueue::new();
        for (idx, node) in graph.nodes().iter().enumerate() {
            if pending[idx] == 0 {
                queue.push(idx, node.priority());
            }
        }

        Self {
            graph,
            printed: vec![false; graph.len()],
            pending,
            queue,
            stats: RenderStats::default(),
            after_sticky_end: false,
        }
    }

    /// Render the whole graph, handing each line to `emit` as soon as it is
    /// decided. An error from `emit` stops rendering and is returned as is.
    pub fn render<F>(mut self, mut emit: F) -> Result<RenderStats>
    where
        F: FnMut(Line) -> Result<()>,
    {
        let graph = self.graph;

        while let Some(start) = self.queue.pop() {
            if self.printed[start] {
                continue;
            }

            if self.after_sticky_end {
                let node = graph.node(start);
                emit(Line::StickyStart {
                    children: graph.hashes(&node.children).collect(),
                })?;
                self.after_sticky_end = false;
            }

            self.stats.fragments += 1;
            tracing::debug!("Fragment {} starts at {}", self.stats.fragments, graph.node(start).hash);

            let mut current = start;
            loop {
                self.print(current, &mut emit)?;
                match graph.node(current).parents.first() {
                    Some(&parent) if self.is_ready(parent) => current = parent,
                    _ => break,
                }
            }

            let last = graph.node(current);
            if !last.is_root() {
                emit(Line::StickyEnd {
                    parents: graph.hashes(&last.parents).collect(),
                })?;
                emit(Line::Blank)?;
                self.after_sticky_end = true;
            }
        }

        self.check_complete()?;

        tracing::debug!(
            "Rendered {} commits in {} fragments",
            self.stats.commits,
            self.stats.fragments
        );
        Ok(self.stats)
    }

    fn is_ready(&self, idx: usize) -> bool {
        !self.printed[idx] && self.pending[idx] == 0
    }

    fn print<F>(&mut self, idx: usize, emit: &mut F) -> Result<()>
    where
        F: FnMut(Line) -> Result<()>,
    {
        let graph = self.graph;
        let node = graph.node(idx);

        emit(Line::Commit {
            hash: node.hash.clone(),
            branches: node.branches.clone(),
        })?;
        self.printed[idx] = true;
        self.stats.commits += 1;

        for &parent in &node.parents {
            self.pending[parent] -= 1;
            if self.pending[parent] == 0 {
                self.queue.push(parent, graph.node(parent).priority());
            }
        }
        Ok(())
    }

    /// Runs once the ready queue is empty. Anything still unprinted is
    /// either stuck behind a cycle or was lost by the queue.
    fn check_complete(&self) -> Result<()> {
        if self.stats.commits == self.graph.len() {
            return Ok(());
        }

        if let Some(idx) = self.unprinted().find(|&idx| self.pending[idx] == 0) {
            return Err(AppError::IncompleteTraversal {
                hash: self.graph.node(idx).hash.clone(),
                printed: self.stats.commits,
                total: self.graph.len(),
            });
        }

        // Node indices follow hash order, so this is the smallest hash.
        match self.unprinted().next() {
            Some(idx) => Err(AppError::CyclicHistory {
                hash: self.graph.node(idx).hash.clone(),
            }),
            None => Ok(()),
        }
    }

    fn unprinted(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.graph.len()).filter(move |&idx| !self.printed[idx])
    }
}

/// Render `graph` into memory.
pub fn render_lines(graph: &CommitGraph) -> Result<Vec<Line>> {
    let mut lines = Vec::new();
    Renderer::new(graph).render(|line| {
        lines.push(line);
        Ok(())
    })?;
    Ok(lines)
}
