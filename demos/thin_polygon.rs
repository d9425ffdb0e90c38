//! Print a regular polygon's outline, axis and thinned paths.
//!
//! Run with: cargo run --example thin_polygon --features tracing -- 5

use glam::DVec2;
use sat_thin::Config;
use sat_thin::app::{PolygonBuilder, PolygonSpec, ThinningDemo};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let sides = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(5);
    let polygon = PolygonSpec::new(sides, DVec2::ZERO, 75.0);

    let mut demo = ThinningDemo::new(Config::default(), PolygonBuilder)?;
    demo.select_shape(vec![polygon])?;

    if let Some(shape) = demo.shape() {
        println!("viewBox: {}", shape.view_box);
        println!("thickest: {}", shape.thickest);
    }
    println!("outline: {}", polygon.path());
    println!("axis:    {}", demo.axis_input()?);
    for percent in [0.0, 25.0, 50.0, 75.0, 100.0] {
        println!(
            "{percent:>3}%: {}  (erode radius {})",
            demo.thin_input(percent)?,
            demo.erode_input(percent)
        );
    }
    Ok(())
}
