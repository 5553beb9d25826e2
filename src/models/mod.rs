//! Plain data records passed between the loader, graph and renderer.
//!
//! - `commit`: CommitRecord, BranchRef as produced by the loader
//! - `line`: Line, one entry of the rendered output stream

pub mod commit;
pub mod line;

pub use commit::*;
pub use line::*;
