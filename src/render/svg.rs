use super::{END_MARKER_RADIUS, RenderFrame};
use itertools::Itertools;

const EDGE_COLOR: &str = "#64748b";
const HEADER_HEIGHT: f64 = 36.0;

/// Formats a complete frame as a standalone SVG document, for debugging and
/// snapshots outside a browser.
pub fn visualize_frame(frame: &RenderFrame) -> String {
    let (width, height) = canvas_extent(frame);
    let mut output = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        width, height, width, height
    );

    for connection in &frame.connections {
        output.push_str(&format!(
            "  <path d=\"{}\" stroke=\"{}\" stroke-width=\"3\" fill=\"none\"/>\n",
            connection.path, EDGE_COLOR
        ));
        output.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
            connection.end_marker.x, connection.end_marker.y, END_MARKER_RADIUS, EDGE_COLOR
        ));
    }

    if let Some(draft) = &frame.draft {
        output.push_str(&format!(
            "  <path d=\"{}\" stroke=\"{}\" stroke-width=\"2\" stroke-dasharray=\"4 2\" fill=\"none\"/>\n",
            draft.path, EDGE_COLOR
        ));
    }

    let size = frame.node_size;
    for node in &frame.nodes {
        let outline = if node.selected {
            " stroke=\"#0f172a\" stroke-width=\"2\""
        } else {
            ""
        };
        output.push_str(&format!(
            "  <g id=\"node-{}\" data-type=\"{}\">\n",
            node.id, node.node_type
        ));
        output.push_str(&format!(
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"8\" fill=\"#ffffff\"{}/>\n",
            node.position.x, node.position.y, size.width, size.height, outline
        ));
        output.push_str(&format!(
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"8\" fill=\"{}\"/>\n",
            node.position.x, node.position.y, size.width, HEADER_HEIGHT, node.color
        ));
        output.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" fill=\"#ffffff\">{}</text>\n",
            node.position.x + 12.0,
            node.position.y + HEADER_HEIGHT / 2.0 + 5.0,
            escape(&node.title)
        ));
        output.push_str("  </g>\n");
    }

    output.push_str("</svg>\n");
    output
}

/// Smallest box from the origin that contains every node and the draft cursor.
fn canvas_extent(frame: &RenderFrame) -> (f64, f64) {
    let size = frame.node_size;
    let corners = frame
        .nodes
        .iter()
        .map(|n| (n.position.x + size.width, n.position.y + size.height))
        .chain(frame.draft.iter().map(|d| (d.cursor.x, d.cursor.y)));
    let (max_x, max_y) = corners.fold((0.0_f64, 0.0_f64), |(mx, my), (x, y)| {
        (mx.max(x), my.max(y))
    });
    (max_x.ceil(), max_y.ceil())
}

fn escape(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&apos;".to_string(),
            other => other.to_string(),
        })
        .join("")
}
