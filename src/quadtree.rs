//! Tree façade: owns the root node and the fixed external bounds.

use tracing::{debug, trace};

use crate::error::QuadTreeError;
use crate::geometry::{Point, Rect};
use crate::node::{Node, Value};

/// Point quadtree over a fixed bounding rectangle
///
/// Values whose point lies outside the bounds given at construction are
/// **silently dropped** by [`QuadTree::insert`]; size the bounds to cover
/// every point you will ever insert, or use [`QuadTree::try_insert`] to be
/// told about dropped values.
///
/// # Examples
/// ```
/// use quadtree::{Point, QuadTree, Rect, Value};
///
/// let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
/// tree.insert(Value::new(Point::new(10.0, 10.0), "a"));
/// tree.insert(Value::new(Point::new(60.0, 20.0), "b"));
/// tree.insert(Value::new(Point::new(90.0, 90.0), "c"));
///
/// let found = tree.intersect(Rect::new(0.0, 0.0, 70.0, 50.0));
/// assert_eq!(found.len(), 2);
/// assert_eq!(tree.size(), 3);
/// ```
#[derive(Debug)]
pub struct QuadTree<T> {
    /// External bounds, fixed for the lifetime of the tree
    bounds: Rect,
    /// Root node, level 0
    root: Node<T>,
}

impl<T> QuadTree<T> {
    /// Creates an empty tree covering `bounds`
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            root: Node::new(bounds, 0),
        }
    }

    /// Creates a tree and inserts `values` in iteration order
    pub fn from_values<I>(bounds: Rect, values: I) -> Self
    where
        I: IntoIterator<Item = Value<T>>,
    {
        let mut tree = Self::new(bounds);
        for value in values {
            let _ = tree.insert(value);
        }
        tree
    }

    /// Bounds given at construction
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Root node, for read-only inspection of the structure
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Inserts a value, returning whether it was stored.
    ///
    /// Values outside the tree bounds (or with non-finite coordinates) are
    /// dropped without any other signal.
    pub fn insert(&mut self, value: Value<T>) -> bool {
        match self.try_insert(value) {
            Ok(()) => true,
            Err(err) => {
                trace!(%err, "dropping value");
                false
            }
        }
    }

    /// Inserts a value, reporting why it was dropped.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::NonFinitePoint`] when a coordinate is NaN or
    /// infinite, and [`QuadTreeError::OutOfBounds`] when the point lies
    /// outside the tree bounds. The tree is unchanged in both cases.
    pub fn try_insert(&mut self, value: Value<T>) -> Result<(), QuadTreeError> {
        let Point { x, y } = value.point;
        if !value.point.is_finite() {
            return Err(QuadTreeError::NonFinitePoint { x, y });
        }
        if !self.bounds.contains(value.point) {
            return Err(QuadTreeError::OutOfBounds { x, y });
        }
        if self.root.insert(value) {
            Ok(())
        } else {
            Err(QuadTreeError::OutOfBounds { x, y })
        }
    }

    /// Returns every value whose point lies inside `query`, edges included.
    ///
    /// Result order is unspecified.
    pub fn intersect(&self, query: Rect) -> Vec<&Value<T>> {
        let mut results = Vec::new();
        self.intersect_into(query, &mut results);
        results
    }

    /// Like [`QuadTree::intersect`], reusing a result buffer.
    ///
    /// The buffer is cleared first.
    pub fn intersect_into<'a>(&'a self, query: Rect, results: &mut Vec<&'a Value<T>>) {
        results.clear();
        self.root.retrieve(&query, results);
        results.retain(|value| query.contains(value.point));
    }

    /// Deletes one stored value at `value.point`, ignoring the payload.
    ///
    /// Returns `false` when nothing is stored at that point. The emptied
    /// node remains in the tree; nothing is merged or rebalanced.
    pub fn delete(&mut self, value: &Value<T>) -> bool {
        self.remove(value.point).is_some()
    }

    /// Removes and returns one stored value at `point`
    pub fn remove(&mut self, point: Point) -> Option<Value<T>> {
        let removed = self.root.remove_where(point, &|_: &Value<T>| true);
        if removed.is_some() {
            trace!(x = point.x, y = point.y, "removed value");
        }
        removed
    }

    /// Deletes one stored value equal to `value` in both point and payload
    pub fn delete_matching(&mut self, value: &Value<T>) -> bool
    where
        T: PartialEq,
    {
        let removed = self
            .root
            .remove_where(value.point, &|stored: &Value<T>| stored.data == value.data);
        if removed.is_some() {
            trace!(x = value.point.x, y = value.point.y, "removed matching value");
        }
        removed.is_some()
    }

    /// Number of stored values
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Same as [`QuadTree::size`]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns whether the tree stores no values
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Deepest node level in the tree (0 while the root is unsplit)
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Removes every value and child node, keeping the bounds
    pub fn clear(&mut self) {
        debug!(size = self.size(), "clearing quadtree");
        self.root.clear();
    }

    /// Bounds of every node created by a split, for visualization.
    ///
    /// Children are created in groups of four, so the length is always a
    /// multiple of four.
    pub fn node_rects(&self) -> Vec<Rect> {
        let mut rects = Vec::new();
        self.root.collect_rects(&mut rects);
        rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_insert_out_of_bounds() {
        let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(
            tree.try_insert(Value::new(Point::new(11.0, 5.0), ())),
            Err(QuadTreeError::OutOfBounds { x: 11.0, y: 5.0 })
        );
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0, "dropped value must not split the root");
    }

    #[test]
    fn test_try_insert_non_finite() {
        let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let err = tree
            .try_insert(Value::new(Point::new(f64::INFINITY, 5.0), ()))
            .unwrap_err();
        assert!(matches!(err, QuadTreeError::NonFinitePoint { .. }));
        assert!(!tree.insert(Value::new(Point::new(f64::NAN, 5.0), ())));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_error_messages() {
        let err = QuadTreeError::OutOfBounds { x: 1.5, y: -2.0 };
        assert_eq!(err.to_string(), "Point (1.5, -2) lies outside the tree bounds");
    }

    #[test]
    fn test_insert_on_bounds_edge() {
        let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(tree.insert(Value::new(Point::new(10.0, 10.0), ())));
        assert!(tree.insert(Value::new(Point::new(0.0, 0.0), ())));
        assert_eq!(tree.size(), 2);
    }

    #[test]
    fn test_intersect_into_clears_buffer() {
        let tree = QuadTree::from_values(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            [Value::new(Point::new(1.0, 1.0), 1), Value::new(Point::new(9.0, 9.0), 2)],
        );
        let mut results = Vec::new();
        tree.intersect_into(Rect::new(0.0, 0.0, 2.0, 2.0), &mut results);
        assert_eq!(results.len(), 1);
        tree.intersect_into(Rect::new(8.0, 8.0, 2.0, 2.0), &mut results);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].data, 2);
    }
}
