use glam::dvec2;
use regex_lite::Regex;
use svgraph::chart::{Edges, ErrorWhisker, Graph, Icon, PlotBox, Scatter, ScatterLines};
use svgraph::scene::{Circle, Container, Node, Text, Viewport};
use svgraph::text::Font;

/// 600 x 400 graph: plot area at (100, 40), 480 x 260
fn graph() -> Graph {
    let mut graph = Graph::new(600.0, 400.0);
    graph.set_plot_extrema(0.0, 10.0, 0.0, 100.0).unwrap();
    graph
}

fn dot() -> Icon {
    Icon::new(Circle::new(2.0, 2.0, 2.0), 4.0, 4.0)
}

fn path_data(svg: &str) -> Vec<String> {
    let re = Regex::new(r#"<path d="([^"]+)""#).unwrap();
    re.captures_iter(svg).map(|c| c[1].to_string()).collect()
}

// ============================================================================
// Frame
// ============================================================================

#[test]
fn left_only_plot_merges_both_y_corners() {
    let mut graph = graph();
    graph.plot.edges = Edges { left: true, ..Edges::NONE };
    for v in [50.0, 0.0, 100.0] {
        graph.frame.y_axis.add_tick(v, format!("{v}"));
    }
    let svg = graph.render();

    let frame = path_data(&svg).pop().unwrap();
    insta::assert_snapshot!(frame, @"M 96 300 L 100 300 L 100 40 L 96 40 M 96 170 L 100 170");
}

#[test]
fn fully_boxed_plot_draws_four_edges() {
    let mut graph = graph();
    graph.frame.x_axis.add_tick(5.0, "5");
    let svg = graph.render();

    let frame = path_data(&svg).pop().unwrap();
    insta::assert_snapshot!(
        frame,
        @"M 340 304 L 340 300 M 100 40 L 580 40 M 580 40 L 580 300 M 580 300 L 100 300 M 100 300 L 100 40"
    );
}

#[test]
fn tick_labels_are_rendered_for_every_in_range_tick() {
    let mut graph = graph();
    graph.frame.x_axis.tick_text = Some(Text::new("").with_font(Font::default()));
    for v in [0.0, 2.5, 10.0, 12.0] {
        graph.frame.x_axis.add_tick(v, format!("x={v}"));
    }
    let svg = graph.render();

    let re = Regex::new(r#"<text x="([^"]+)" y="309"[^>]*>(x=[^<]+)</text>"#).unwrap();
    let labels: Vec<(String, String)> = re
        .captures_iter(&svg)
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("100".to_string(), "x=0".to_string()),
            ("220".to_string(), "x=2.5".to_string()),
            ("580".to_string(), "x=10".to_string()),
        ]
    );
}

// ============================================================================
// Series
// ============================================================================

#[test]
fn line_series_path_runs_left_to_right() {
    let mut graph = graph();
    graph
        .plot
        .add_series(ScatterLines::new(vec![3.0, 1.0, 2.0], vec![10.0, 30.0, 20.0], dot()));
    let svg = graph.render();

    let paths = path_data(&svg);
    assert_eq!(paths[0], "M 48 182 L 96 208 L 144 234");
    assert_eq!(svg.matches("<circle").count(), 3);
}

#[test]
fn scatter_markers_are_centred_sections() {
    let mut graph = graph();
    graph.plot.add_series(Scatter::new(vec![5.0], vec![50.0], dot()));
    let svg = graph.render();

    // marker origin is the mapped point minus half the icon size
    let re = Regex::new(r#"<g transform="matrix\(1,0,0,1,238,128\)">\s*<svg width="4" height="4">"#).unwrap();
    assert!(re.is_match(&svg), "{}", svg);
}

#[test]
fn box_and_whisker_series() {
    let mut graph = graph();
    graph.plot.add_series(PlotBox::new(dvec2(5.0, 0.0), dvec2(0.0, 50.0)));
    graph.plot.add_series(ErrorWhisker::new(dvec2(5.0, 50.0), 0.0));
    let svg = graph.render();

    let re = Regex::new(r#"<rect x="0" y="0" width="240" height="130""#).unwrap();
    assert!(re.is_match(&svg), "{}", svg);
    assert!(path_data(&svg).contains(&"M 0 65 L 240 65".to_string()));
}

// ============================================================================
// Document
// ============================================================================

#[test]
fn title_without_font_is_dropped_quietly() {
    let mut graph = graph();
    graph.title = Some(Text::new("untitled"));
    let svg = graph.render();
    assert!(!svg.contains("untitled"));
    assert!(graph.title.as_ref().is_some_and(|t| svgraph::Render::is_active(t)));
}

#[test]
fn graph_embeds_in_a_larger_document() {
    let mut page = Viewport::document(1200, 400);
    page.add_child(graph().to_node());
    page.add_child(graph().to_node());
    let svg = Node::from(page).render(0);

    assert_eq!(svg.matches("xmlns=").count(), 1);
    assert_eq!(svg.matches("<!--Frame-->").count(), 2);
}

#[test]
fn rendering_twice_gives_the_same_document() {
    let mut graph = graph();
    graph.legend.add_item("points", dot());
    graph.plot.add_series(Scatter::new(vec![1.0, 2.0], vec![3.0, 4.0], dot()));
    assert_eq!(graph.render(), graph.render());
}
