use serde::Serialize;
use std::fmt;

/// A single line of rendered history.
///
/// `Display` produces the text grammar:
/// - `Commit`: `<hash>( <branch>)*`
/// - `StickyEnd`: `<hash>( <hash>)*=`
/// - `StickyStart`: `=( <hash>)*`
/// - `Blank`: empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Line {
    Commit { hash: String, branches: Vec<String> },
    StickyEnd { parents: Vec<String> },
    StickyStart { children: Vec<String> },
    Blank,
}

impl Line {
    pub fn is_blank(&self) -> bool {
        matches!(self, Line::Blank)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Commit { hash, branches } => {
                write!(f, "{}", hash)?;
                for branch in branches {
                    write!(f, " {}", branch)?;
                }
                Ok(())
            }
            Line::StickyEnd { parents } => write!(f, "{}=", parents.join(" ")),
            Line::StickyStart { children } => {
                write!(f, "=")?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                Ok(())
            }
            Line::Blank => Ok(()),
        }
    }
}
