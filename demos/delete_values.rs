//! Delete values and observe that the tree structure is kept.
use quadtree::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    let values: Vec<Value<u32>> = (0..5)
        .map(|i| Value::new(Point::new(i as f64 * 10.0, 10.0), i))
        .collect();
    for value in &values {
        let _ = tree.insert(value.clone());
    }
    println!(
        "size {} depth {} node rects {}",
        tree.size(),
        tree.depth(),
        tree.node_rects().len()
    );

    // Point match only: the payload is ignored
    assert!(tree.delete(&Value::new(values[2].point, 999)));
    // Point and payload must match
    assert!(!tree.delete_matching(&Value::new(values[3].point, 999)));
    assert!(tree.delete_matching(&values[3]));
    // Nothing left at this point
    assert!(!tree.delete(&values[3]));

    println!(
        "size {} depth {} node rects {}",
        tree.size(),
        tree.depth(),
        tree.node_rects().len()
    );
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.depth(), 4, "deleted nodes are never compacted");

    tree.clear();
    println!("after clear: size {} depth {}", tree.size(), tree.depth());
}
