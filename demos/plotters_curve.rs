//! Chart both evaluation strategies over the same control points.
//!
//! A quick visual check that the closed-form Bernstein evaluator and the
//! iterative de Casteljau reduction trace the same path. Writes
//! `curve_strategies.png`.

extern crate plotters;
use plotters::prelude::*;

extern crate daub;
use daub::de_casteljau;
use daub::CubicBezier;
use daub::Point;
use daub::PointN;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // control points for the cubic bezier curve
    let cpoints = vec![
        (100.0, 100.0),
        (100.0, 300.0),
        (300.0, 300.0),
        (300.0, 100.0),
    ];

    let bezier = CubicBezier::new(
        PointN::new([100.0, 100.0]),
        PointN::new([100.0, 300.0]),
        PointN::new([300.0, 300.0]),
        PointN::new([300.0, 100.0]),
    );
    let control_points = bezier.control_points();

    // render the paths of the curve to desired accuracy
    let nsteps: usize = 1000;
    let mut bernstein_graph: Vec<(f64, f64)> = Vec::with_capacity(nsteps + 1);
    let mut casteljau_graph: Vec<(f64, f64)> = Vec::with_capacity(nsteps + 1);
    for t in 0..=nsteps {
        let t = t as f64 * 1f64 / (nsteps as f64);
        let p = bezier.eval(t);
        bernstein_graph.push((p.axis(0), p.axis(1)));
        let q = de_casteljau(&control_points, t)?;
        casteljau_graph.push((q.axis(0), q.axis(1)));
    }

    let root = BitMapBackend::new("curve_strategies.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    // setup the chart
    let mut chart = ChartBuilder::on(&root)
        .caption("Cubic Bezier, both evaluators", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(80.0..320.0, 80.0..320.0)?;

    chart.configure_mesh().draw()?;

    // draw the control points of B(t)
    chart
        .draw_series(PointSeries::of_element(
            cpoints.clone(),
            5,
            &BLUE,
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?
        .label("Control Points of B(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // the two strategies, drawn over one another
    chart
        .draw_series(LineSeries::new(bernstein_graph, &RED))?
        .label("Bernstein eval")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(LineSeries::new(casteljau_graph, &GREEN))?
        .label("de Casteljau eval")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
