//! Tree node and the stored value type.
//!
//! A node is a leaf until it receives its first value. At that moment it
//! keeps the value and immediately splits into four children, so every
//! later insertion reaching the node passes through to a child. Each node
//! therefore holds at most one value over its lifetime (until deleted or
//! cleared), and the shape of the tree follows insertion order.
//!
//! Repeated points build chains as deep as the number of repeats, so every
//! walk over the tree (including drop) uses a loop or an explicit stack
//! instead of recursion.

use std::fmt;

use crate::geometry::{Point, Quadrant, Rect};

/// A point with an attached caller payload
///
/// The tree never inspects or mutates `data`.
#[derive(Clone, Debug, PartialEq)]
pub struct Value<T> {
    /// Position used for indexing and queries
    pub point: Point,
    /// Caller payload, stored and returned as is
    pub data: T,
}

impl<T> Value<T> {
    /// Creates a new value
    pub fn new(point: Point, data: T) -> Self {
        Self { point, data }
    }
}

/// A quadtree node
///
/// Children are allocated together, four at a time, in [`Quadrant`] slot
/// order. Each node exclusively owns its children.
pub struct Node<T> {
    bounds: Rect,
    level: usize,
    value: Option<Value<T>>,
    children: Option<Box<[Node<T>; 4]>>,
}

impl<T> Node<T> {
    /// Creates an empty leaf
    pub(crate) fn new(bounds: Rect, level: usize) -> Self {
        Self {
            bounds,
            level,
            value: None,
            children: None,
        }
    }

    /// Bounding rectangle of this node
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Distance from the root (root = 0)
    pub fn level(&self) -> usize {
        self.level
    }

    /// Value stored directly at this node
    pub fn value(&self) -> Option<&Value<T>> {
        self.value.as_ref()
    }

    /// The four children in slot order, once the node has split
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// Child covering one quadrant, once the node has split
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|children| &children[quadrant.index()])
    }

    /// True when the node has never split (or was cleared)
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Depth-first walk over this node and all of its descendants
    fn nodes(&self) -> Nodes<'_, T> {
        Nodes { stack: vec![self] }
    }

    /// Inserts a value into this subtree.
    ///
    /// The value walks down to the leaf its point classifies into; that
    /// leaf stores it and splits. A point that cannot be classified is
    /// dropped and `false` is returned.
    pub(crate) fn insert(&mut self, value: Value<T>) -> bool {
        let mut node = self;
        while let Some(ref mut children) = node.children {
            let Some(quadrant) = Quadrant::of(&node.bounds, value.point) else {
                return false;
            };
            node = &mut children[quadrant.index()];
        }

        node.value = Some(value);
        node.split();
        true
    }

    /// Replaces this node's capacity to hold further values with four
    /// children covering its quadrants.
    fn split(&mut self) {
        let bounds = self.bounds;
        let next_level = self.level + 1;
        let children = Quadrant::ALL.map(|quadrant| Self::new(bounds.quadrant(quadrant), next_level));
        self.children = Some(Box::new(children));
    }

    /// Collects candidate values for `query` into `results`.
    ///
    /// Each visited node's own value is always included; children are
    /// visited when their quadrant may overlap the query. Candidates are not
    /// filtered.
    pub(crate) fn retrieve<'a>(&'a self, query: &Rect, results: &mut Vec<&'a Value<T>>) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Some(value) = &node.value {
                results.push(value);
            }
            if let Some(children) = node.children.as_deref() {
                stack.extend(
                    Quadrant::overlapping(&node.bounds, query).map(move |quadrant| &children[quadrant.index()]),
                );
            }
        }
    }

    /// Removes the shallowest value at `point` accepted by `matches`.
    ///
    /// A value can only sit on the classification path of its point, so
    /// only that path is walked. The emptied node stays in place.
    pub(crate) fn remove_where<F>(&mut self, point: Point, matches: &F) -> Option<Value<T>>
    where
        F: Fn(&Value<T>) -> bool,
    {
        let mut node = self;
        loop {
            if node
                .value
                .as_ref()
                .is_some_and(|value| value.point == point && matches(value))
            {
                return node.value.take();
            }

            let quadrant = Quadrant::of(&node.bounds, point)?;
            node = match node.children {
                Some(ref mut children) => &mut children[quadrant.index()],
                None => return None,
            };
        }
    }

    /// Number of nodes in this subtree holding a value
    pub fn size(&self) -> usize {
        self.nodes().filter(|node| node.value.is_some()).count()
    }

    /// Deepest level reached by any node in this subtree
    pub fn depth(&self) -> usize {
        self.nodes().map(|node| node.level).max().unwrap_or(self.level)
    }

    /// Drops the stored value and every child, leaving an empty leaf
    pub(crate) fn clear(&mut self) {
        self.value = None;
        self.children = None;
    }

    /// Appends the bounds of every child created by a split in this subtree.
    ///
    /// Each split contributes its four children in slot order.
    pub(crate) fn collect_rects(&self, rects: &mut Vec<Rect>) {
        for node in self.nodes() {
            if let Some(children) = node.children.as_deref() {
                rects.extend(children.iter().map(|child| child.bounds));
            }
        }
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Detach grandchildren before each group of children is freed, so
        // dropping a deep chain never nests drop calls.
        let mut pending: Vec<Box<[Self; 4]>> = self.children.take().into_iter().collect();
        while let Some(mut children) = pending.pop() {
            for child in children.iter_mut() {
                if let Some(grandchildren) = child.children.take() {
                    pending.push(grandchildren);
                }
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("bounds", &self.bounds)
            .field("level", &self.level)
            .field("value", &self.value)
            .field("is_leaf", &self.is_leaf())
            .finish_non_exhaustive()
    }
}

/// Depth-first iterator over a subtree
struct Nodes<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children.as_deref() {
            self.stack.extend(children.iter());
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(x: f64, y: f64) -> Value<u32> {
        Value::new(Point::new(x, y), 0)
    }

    #[test]
    fn test_new_node_is_empty_leaf() {
        let node: Node<u32> = Node::new(Rect::new(0.0, 0.0, 10.0, 10.0), 0);
        assert!(node.is_leaf());
        assert!(node.value().is_none());
        assert_eq!(node.size(), 0);
        assert_eq!(node.depth(), 0);
    }

    #[test]
    fn test_first_insert_stores_and_splits() {
        let mut node = Node::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0);
        assert!(node.insert(value(10.0, 10.0)));

        assert_eq!(node.value().map(|v| v.point), Some(Point::new(10.0, 10.0)));
        let children = node.children().expect("node should split on first insert");
        for (quadrant, child) in Quadrant::ALL.iter().zip(children.iter()) {
            assert_eq!(child.level(), 1);
            assert!(child.value().is_none());
            assert!(child.is_leaf());
            assert_eq!(child.bounds(), node.bounds().quadrant(*quadrant));
        }
    }

    #[test]
    fn test_second_insert_goes_to_child() {
        let mut node = Node::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0);
        node.insert(value(10.0, 10.0));
        node.insert(value(80.0, 20.0));

        let top_right = node.child(Quadrant::TopRight).unwrap();
        assert_eq!(top_right.value().map(|v| v.point), Some(Point::new(80.0, 20.0)));
        assert!(!top_right.is_leaf());
        assert_eq!(node.value().map(|v| v.point), Some(Point::new(10.0, 10.0)));
        assert_eq!(node.size(), 2);
    }

    #[test]
    fn test_unclassifiable_point_is_dropped() {
        let mut node = Node::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0);
        node.insert(value(10.0, 10.0));
        assert!(!node.insert(value(f64::NAN, 10.0)));
        assert_eq!(node.size(), 1);
    }

    #[test]
    fn test_duplicate_points_chain_downwards() {
        let mut node = Node::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0);
        for _ in 0..5 {
            node.insert(value(30.0, 30.0));
        }
        assert_eq!(node.size(), 5);
        assert_eq!(node.depth(), 5);
    }

    #[test]
    fn test_remove_where_keeps_structure() {
        let mut node = Node::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0);
        node.insert(value(10.0, 10.0));
        node.insert(value(80.0, 80.0));
        let rects_before = {
            let mut rects = Vec::new();
            node.collect_rects(&mut rects);
            rects.len()
        };

        let removed = node.remove_where(Point::new(80.0, 80.0), &|_: &Value<u32>| true);
        assert_eq!(removed.map(|v| v.point), Some(Point::new(80.0, 80.0)));
        assert_eq!(node.size(), 1);

        let mut rects = Vec::new();
        node.collect_rects(&mut rects);
        assert_eq!(rects.len(), rects_before);
        assert!(!node.child(Quadrant::BottomRight).unwrap().is_leaf());
    }

    #[test]
    fn test_remove_where_missing_point() {
        let mut node = Node::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0);
        node.insert(value(10.0, 10.0));
        assert!(node.remove_where(Point::new(11.0, 10.0), &|_: &Value<u32>| true).is_none());
        assert!(node.remove_where(Point::new(10.0, 10.0), &|_: &Value<u32>| false).is_none());
        assert_eq!(node.size(), 1);
    }

    #[test]
    fn test_clear_resets_to_leaf() {
        let mut node = Node::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0);
        node.insert(value(10.0, 10.0));
        node.insert(value(60.0, 60.0));
        node.clear();
        assert!(node.is_leaf());
        assert_eq!(node.size(), 0);
        assert_eq!(node.depth(), 0);
    }

    #[test]
    fn test_collect_rects_order() {
        let mut node = Node::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0);
        node.insert(value(10.0, 10.0));
        node.insert(value(80.0, 20.0));

        let mut rects = Vec::new();
        node.collect_rects(&mut rects);
        assert_eq!(rects.len(), 8);
        // The root's split comes first, in slot order, then the top-right child's.
        let top_right = Rect::new(50.0, 0.0, 50.0, 50.0);
        assert_eq!(rects[0], top_right);
        assert_eq!(rects[1], Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(rects[4], top_right.quadrant(Quadrant::TopRight));
    }

    #[test]
    fn test_debug_is_shallow() {
        let mut node = Node::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0);
        node.insert(value(10.0, 10.0));
        let text = format!("{:?}", node);
        assert!(text.starts_with("Node {"), "unexpected debug output: {}", text);
        assert!(text.contains("is_leaf: false"), "unexpected debug output: {}", text);
    }
}
