//! Renders the preset shapes and a morph sequence as an SVG document on
//! stdout.
//!
//! ```text
//! cargo run --example outline_svg > shapes.svg
//! ```
//!
//! Top two rows: the rounded outline of every preset shape. Bottom row:
//! the star skeleton morphing into the puffy square.

use scallop::geometry::RoundedPolygon;
use scallop::math::Point2;
use scallop::morph::Morph;
use scallop::presets::{self, PresetShape};

const CELL: f64 = 120.0;
const SHAPE: f64 = 100.0;
const MARGIN: f64 = 10.0;

#[allow(clippy::cast_precision_loss)]
fn main() -> scallop::Result<()> {
    let shapes: [(&str, fn(f64) -> PresetShape); 10] = [
        ("puffy_square", presets::puffy_square),
        ("shield", presets::shield),
        ("clover_flower", presets::clover_flower),
        ("star", presets::star),
        ("pill", presets::pill),
        ("organic_blob", presets::organic_blob),
        ("concave_rectangle", presets::concave_rectangle),
        ("cookie_12", presets::cookie_12),
        ("cookie_8", presets::cookie_8),
        ("fan", presets::fan),
    ];

    let width = 5.0 * CELL;
    let height = 3.0 * CELL;
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {width} {height}\">\n"
    );

    for (i, (name, make)) in shapes.iter().enumerate() {
        let outline = make(SHAPE).outline()?;
        let x = (i % 5) as f64 * CELL + MARGIN;
        let y = (i / 5) as f64 * CELL + MARGIN;
        svg.push_str(&format!(
            "  <g transform=\"translate({x} {y})\"><title>{name}</title>\
             <path d=\"{}\" fill=\"none\" stroke=\"black\"/></g>\n",
            path_data(&outline)
        ));
    }

    let star = to_points(presets::star(SHAPE).vertices());
    let square = to_points(presets::puffy_square(SHAPE).vertices());
    let morph = Morph::new(&star, &square)?;
    for (i, alpha) in [0.0, 0.25, 0.5, 0.75, 1.0].into_iter().enumerate() {
        let frame = morph.sample(alpha);
        let x = i as f64 * CELL + MARGIN;
        let y = 2.0 * CELL + MARGIN;
        svg.push_str(&format!(
            "  <g transform=\"translate({x} {y})\">\
             <polygon points=\"{}\" fill=\"none\" stroke=\"gray\"/></g>\n",
            polygon_points(&frame)
        ));
    }

    svg.push_str("</svg>");
    println!("{svg}");
    Ok(())
}

fn path_data(outline: &RoundedPolygon) -> String {
    let mut d = String::new();
    for cubic in outline.curves() {
        if d.is_empty() {
            d.push_str(&format!("M {:.3} {:.3} ", cubic.p0.x, cubic.p0.y));
        }
        d.push_str(&format!(
            "C {:.3} {:.3}, {:.3} {:.3}, {:.3} {:.3} ",
            cubic.p1.x, cubic.p1.y, cubic.p2.x, cubic.p2.y, cubic.p3.x, cubic.p3.y
        ));
    }
    d.push('Z');
    d
}

fn to_points(flat: &[f64]) -> Vec<Point2> {
    flat.chunks_exact(2)
        .map(|pair| Point2::new(pair[0], pair[1]))
        .collect()
}

fn polygon_points(points: &[Point2]) -> String {
    points
        .iter()
        .map(|p| format!("{:.3},{:.3}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
