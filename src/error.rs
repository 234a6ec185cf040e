//! Insertion diagnostics.

use thiserror::Error;

/// Reasons a value was not stored by [`crate::QuadTree::try_insert`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum QuadTreeError {
    /// The point is finite but outside the tree bounds
    #[error("Point ({x}, {y}) lies outside the tree bounds")]
    OutOfBounds {
        /// Rejected x coordinate
        x: f64,
        /// Rejected y coordinate
        y: f64,
    },

    /// At least one coordinate is NaN or infinite
    #[error("Point ({x}, {y}) has a non-finite coordinate")]
    NonFinitePoint {
        /// Rejected x coordinate
        x: f64,
        /// Rejected y coordinate
        y: f64,
    },
}
