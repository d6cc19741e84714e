//! Error types for grid construction, editing and searching.
use core::fmt;
use grid_util::point::Point;
use thiserror::Error;

/// Why a start/goal pair was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointIssue {
    OutOfBounds,
    Coincident,
    Wall,
}

impl fmt::Display for EndpointIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            EndpointIssue::OutOfBounds => "endpoint lies outside the grid",
            EndpointIssue::Coincident => "start and goal are the same cell",
            EndpointIssue::Wall => "endpoint is a wall",
        };
        write!(f, "{s}")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Rejected before any traversal work is done.
    #[error("invalid endpoints (start {start}, goal {goal}): {reason}")]
    InvalidEndpoints {
        start: Point,
        goal: Point,
        reason: EndpointIssue,
    },

    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Point),

    /// The predecessor links did not lead back to the start. This is an engine bug, not a
    /// property of the grid, and should not be retried.
    #[error("predecessor chain did not reach the start after {steps} steps")]
    MalformedPredecessorChain { steps: usize },

    #[error("search was cancelled")]
    Cancelled,

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("invalid map: {0}")]
    InvalidMap(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
