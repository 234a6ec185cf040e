//! # Quadtree - Point Quadtree Spatial Index
//!
//! A Rust library providing a point quadtree: store 2D points with an
//! arbitrary payload and retrieve every point inside an axis-aligned query
//! rectangle without scanning all of them.
//!
//! ## Features
//!
//! - **Incremental Insertion**: No build step, values are queryable as soon as they are inserted
//! - **Inclusive Range Queries**: Points on a query edge are part of the result
//! - **Typed Payload**: Any `T` can be attached to a point, the tree never inspects it
//! - **Structure Introspection**: Node rectangles and depth for visualization and debugging
//!
//! ## Quick Start
//!
//! ```rust
//! use quadtree::prelude::*;
//!
//! // Create a tree covering the whole data domain
//! let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
//!
//! // Insert points with a payload (here an id)
//! tree.insert(Value::new(Point::new(10.0, 10.0), 0));
//! tree.insert(Value::new(Point::new(20.0, 30.0), 1));
//! tree.insert(Value::new(Point::new(75.0, 80.0), 2));
//!
//! // Query for points inside a region
//! let results = tree.intersect(Rect::new(0.0, 0.0, 50.0, 50.0));
//! let mut ids: Vec<i32> = results.iter().map(|v| v.data).collect();
//! ids.sort();
//! assert_eq!(ids, vec![0, 1]);
//!
//! // Points outside the tree bounds are dropped
//! assert!(!tree.insert(Value::new(Point::new(150.0, 10.0), 3)));
//! assert_eq!(tree.size(), 3);
//! ```
//!
//! ## How It Works
//!
//! Every node covers a rectangle. A node stores the first value that
//! reaches it and splits into four equal quadrants right away, so later
//! values are pushed down into the quadrant their point falls in. Points
//! lying on a midpoint line belong to the top/left quadrant.
//!
//! A query visits each node's value and descends into every quadrant the
//! query may overlap, then filters candidates with an exact, inclusive
//! containment test.
//!
//! Deleting a value empties its node but never merges or rebalances the
//! tree, so the structure only grows until [`QuadTree::clear`] is called.

pub mod error;
pub mod geometry;
pub mod node;
pub mod prelude;
pub mod quadtree;

pub use error::QuadTreeError;
pub use geometry::{Point, Quadrant, Rect};
pub use node::{Node, Value};
pub use quadtree::QuadTree;
