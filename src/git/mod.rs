//! Graph loader over git2.
//!
//! - `repository`: open/discover a repository and build the full graph
//! - `branches`: local branch tips
//! - `history`: commits reachable from those tips

pub mod branches;
pub mod history;
pub mod repository;

pub use repository::GitRepository;
