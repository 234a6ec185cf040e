//! Find points that lie inside a query rectangle.
use quadtree::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 10.0, 10.0));
    let _ = tree.insert(Value::new(Point::new(1.0, 1.0), "a")); // inside query
    let _ = tree.insert(Value::new(Point::new(6.0, 6.0), "b")); // outside query
    let _ = tree.insert(Value::new(Point::new(3.0, 3.0), "c")); // on the query edge
    let _ = tree.insert(Value::new(Point::new(12.0, 1.0), "d")); // outside the tree, dropped

    let results = tree.intersect(Rect::new(0.5, 0.5, 2.5, 2.5));
    let names: Vec<&str> = results.iter().map(|v| v.data).collect();
    println!("Intersecting: {:?}", names);

    // Query rectangle (0.5, 0.5)-(3, 3) holds "a" and "c" (edges are inclusive)
    assert_eq!(results.len(), 2, "Expected 2 intersecting points");
    assert!(names.contains(&"a"), "a should intersect");
    assert!(names.contains(&"c"), "c should intersect");
    assert_eq!(tree.size(), 3, "d lies outside the tree bounds");
}
