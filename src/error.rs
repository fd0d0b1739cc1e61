//! Error types for quadratum operations.

use thiserror::Error;

/// Errors that can occur while decomposing a rectilinear polygon.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecomposeError {
    /// A loop of the input is malformed. Detected before any geometry runs.
    #[error("invalid input in loop {loop_index}: {issue}")]
    InvalidInput {
        /// Index of the offending loop in the input collection.
        loop_index: usize,
        /// What is wrong with it.
        issue: InputIssue,
    },

    /// The polygon is internally inconsistent (self-intersecting or wrongly
    /// wound loops), so no exact decomposition exists.
    #[error("geometry inconsistency: {0}")]
    GeometryInconsistency(&'static str),
}

/// The specific problem found in an input loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputIssue {
    /// A point does not have exactly two coordinates.
    #[error("point {point_index} has {len} coordinates, expected 2")]
    MalformedPoint {
        /// Index of the point within its loop.
        point_index: usize,
        /// Number of coordinates actually supplied.
        len: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("point {point_index} has a non-finite coordinate")]
    NonFinite {
        /// Index of the point within its loop.
        point_index: usize,
    },

    /// The edge leaving this point is neither horizontal nor vertical.
    #[error("edge starting at point {point_index} is not axis-aligned")]
    NotAxisAligned {
        /// Index of the edge's first point within its loop.
        point_index: usize,
    },

    /// Fewer than four corners remain once duplicate and collinear points are
    /// collapsed.
    #[error("loop has {count} corners after cleanup, need at least 4")]
    TooFewVertices {
        /// Number of corners left.
        count: usize,
    },
}

impl DecomposeError {
    pub(crate) fn invalid(loop_index: usize, issue: InputIssue) -> Self {
        DecomposeError::InvalidInput { loop_index, issue }
    }
}
