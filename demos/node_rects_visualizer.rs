//! Quadtree SVG visualizer
//! Generates an SVG showing every node rectangle and the stored points

use quadtree::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use std::fs::File;
use std::io::Write;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let width = 1280.0;
    let height = 640.0;
    let margin = 50.0;
    let bounds = Rect::new(0.0, 0.0, width - 2.0 * margin, height - 2.0 * margin);

    // Parameter: number of random points
    let num_points = 300;

    let mut rng = rand::rngs::StdRng::seed_from_u64(95756739);
    let mut tree = QuadTree::new(bounds);
    for i in 0..num_points {
        // Cluster half of the points to show uneven subdivision
        let point = if i % 2 == 0 {
            Point::new(rng.random_range(0.0..bounds.width), rng.random_range(0.0..bounds.height))
        } else {
            Point::new(rng.random_range(100.0..300.0), rng.random_range(100.0..250.0))
        };
        let _ = tree.insert(Value::new(point, i));
    }

    let rects = tree.node_rects();
    let points = tree.intersect(bounds);

    // Generate SVG
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
        width as i32, height as i32, width as i32, height as i32
    ));

    svg.push_str("  <defs>\n");
    svg.push_str("    <style>\n");
    svg.push_str("      .node-rect { fill: none; stroke: #CCCCCC; stroke-width: 1; }\n");
    svg.push_str("      .point { fill: #FF6B35; }\n");
    svg.push_str("      .tree-box { fill: none; stroke: #333333; stroke-width: 2; }\n");
    svg.push_str("    </style>\n");
    svg.push_str("  </defs>\n\n");

    // Tree bounds
    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" class=\"tree-box\"/>\n\n",
        margin as i32, margin as i32, bounds.width as i32, bounds.height as i32
    ));

    // Node rectangles
    svg.push_str("  <g id=\"nodes\">\n");
    for rect in &rects {
        svg.push_str(&format!(
            "    <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" class=\"node-rect\"/>\n",
            margin + rect.x,
            margin + rect.y,
            rect.width,
            rect.height
        ));
    }
    svg.push_str("  </g>\n\n");

    // Stored points
    svg.push_str("  <g id=\"points\">\n");
    for value in &points {
        svg.push_str(&format!(
            "    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"2\" class=\"point\"/>\n",
            margin + value.point.x,
            margin + value.point.y
        ));
    }
    svg.push_str("  </g>\n");

    svg.push_str("</svg>\n");

    // Write to file
    let mut file = File::create("quadtree_nodes.svg")?;
    file.write_all(svg.as_bytes())?;

    println!("✓ Generated: quadtree_nodes.svg");
    println!("  - Node rects: {}", rects.len());
    println!("  - Points: {}", points.len());
    println!("  - Depth: {}", tree.depth());
    Ok(())
}
