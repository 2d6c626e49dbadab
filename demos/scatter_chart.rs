//! Writes a small scatter chart to stdout.
//!
//! Run with `--features tracing` and `RUST_LOG=svgraph=debug` to see the
//! layout decisions.

use glam::dvec2;
use svgraph::chart::{ErrorBars, Graph, Icon, ScatterLines};
use svgraph::scene::{Circle, LinearGradient, Rect, Style, Text};
use svgraph::text::Font;
use svgraph::Rgb;
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let xs = vec![1.0, 4.0, 2.0, 3.0, 5.0];
    let ys = vec![12.0, 70.0, 35.0, 48.0, 90.0];

    let mut graph = Graph::new(640.0, 480.0);
    graph.set_plot_extrema(0.0, 6.0, 0.0, 100.0)?;

    let mut fade = LinearGradient::new("fade").with_orientation(0.0, 0.0, 0.0, 1.0);
    fade.add_stop(0.0, Rgb(230, 240, 255), 1.0);
    fade.add_stop(1.0, Rgb::WHITE, 1.0);
    graph.add_def(fade);
    graph.plot.background = Rect::default().with_style(Style::new().with_gradient("fade").with_fill_opacity(1.0));

    let font = Font::new("sans-serif", 12.0);
    graph.title = Some(Text::new("Throughput").with_font(font.clone().with_weight("bold")).at(320, 24));

    let label = Text::new("").with_font(font.clone());
    for v in 0..=6 {
        graph.frame.x_axis.add_tick(f64::from(v), v.to_string());
    }
    for v in (0..=100).step_by(25) {
        graph.frame.y_axis.add_tick(f64::from(v), v.to_string());
    }
    graph.frame.x_axis.tick_text = Some(label.clone());
    graph.frame.y_axis.tick_text = Some(label);
    graph.frame.x_axis.title = Some(Text::new("batch").with_font(font.clone()));
    graph.frame.y_axis.title = Some(Text::new("ops / s").with_font(font));
    graph.plot.edges.top = false;
    graph.plot.edges.right = false;
    graph.plot.edges.bottom = false;

    let dot = Icon::new(
        Circle::new(4.0, 4.0, 4.0).with_style(Style::new().with_fill(Rgb(31, 119, 180))),
        8.0,
        8.0,
    );
    graph.legend.add_item("measured", dot.clone());
    graph.plot.add_series(ScatterLines::new(xs.clone(), ys.clone(), dot));
    for (x, y) in xs.into_iter().zip(ys) {
        let mut bar = ErrorBars::new(dvec2(x, y), 4.0);
        bar.width = 0.2;
        graph.plot.add_series(bar);
    }

    println!("{}", graph.render());
    Ok(())
}
