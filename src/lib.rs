//! topo-order - print local git history as a linear, topologically ordered
//! text stream.
//!
//! Children always print before their parents. Consecutive commits form
//! fragments along first-parent edges; where the printed order jumps away
//! from the true graph, sticky-end / sticky-start lines record the edges
//! that were skipped.
//!
//! ```no_run
//! use topo_order::git::GitRepository;
//! use topo_order::render::output::{OutputFormat, render_to_stdout};
//!
//! let repo = GitRepository::open(".")?;
//! let graph = repo.load_graph()?;
//! render_to_stdout(&graph, OutputFormat::Text)?;
//! # Ok::<(), topo_order::error::AppError>(())
//! ```

pub mod error;
pub mod git;
pub mod graph;
pub mod models;
pub mod render;

pub use error::{AppError, Result};
pub use graph::{CommitGraph, CommitNode};
pub use models::{BranchRef, CommitRecord, Line};
pub use render::{RenderStats, Renderer, render_lines};
