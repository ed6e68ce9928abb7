//! Render a triangle to stdout as SVG.
//!
//! ```text
//! cargo run --example triangle --features tracing -- sides 3 4 5 circuncentro altura:2
//! cargo run --example triangle --features tracing -- angles 50 60 70 baricentro mediana:0
//! ```
//!
//! Set `RUST_LOG=figura=debug` to see construction details on stderr.

use figura::{
    NotablePoint, Placement, SpecialLineConfig, SpecialLineKind, TriangleFigure, TriangleOptions,
    build_triangle_from_angles, build_triangle_from_sides,
};
use miette::{IntoDiagnostic, miette};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (mode, rest) = match args.split_first() {
        Some((mode, rest)) => (mode.as_str(), rest),
        None => ("sides", &[][..]),
    };

    let numbers: Vec<f64> = rest
        .iter()
        .take(3)
        .map(|s| s.parse::<f64>().into_diagnostic())
        .collect::<miette::Result<_>>()?;
    let triple: [f64; 3] = match numbers.as_slice() {
        [a, b, c] => [*a, *b, *c],
        [] => [3.0, 4.0, 5.0],
        _ => return Err(miette!("expected three numbers after `{mode}`")),
    };

    let mut options = TriangleOptions::default().with_side_labels(true).with_angle_values(true);
    for extra in rest.iter().skip(3) {
        options = match extra.split_once(':') {
            Some((kind, vertex)) => {
                let kind: SpecialLineKind = kind.parse()?;
                let vertex: usize = vertex.parse().into_diagnostic()?;
                options.with_special_line(SpecialLineConfig::new(kind, vertex))
            }
            None => options.with_notable_point(extra.parse::<NotablePoint>()?),
        };
    }

    let (triangle, unit) = match mode {
        "sides" => (build_triangle_from_sides(triple, &Placement::new(40.0))?, 40.0),
        "angles" => (build_triangle_from_angles(triple, &Placement::default())?, 1.0),
        other => return Err(miette!("unknown mode `{other}`, expected `sides` or `angles`")),
    };
    tracing::info!(kind = ?triangle.classify(), "built triangle");

    let figure = TriangleFigure::new(triangle).with_options(options).with_unit_scale(unit);
    println!("{}", figure.to_svg()?);
    Ok(())
}
