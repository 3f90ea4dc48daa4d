//! SVG renderer: draws a laid-out genome as circles, arrows and labels.
//!
//! Layout units are scaled uniformly to fit the canvas and the y axis is
//! flipped, so depth 0 (the inputs) ends up at the bottom of the image.

use super::{RenderInput, Renderer};
use crate::config::RenderConfig;
use crate::layout::types::Point;
use crate::syntax::types::{ComputedKind, NodeKind};

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_FAMILY: &str = "sans-serif";
const STROKE: &str = r#"stroke="black" stroke-width="1.5""#;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn font(size: u32) -> String {
    format!(r#"font-family="{FONT_FAMILY}" font-size="{size}""#)
}

fn kind_class(kind: Option<&NodeKind>) -> &'static str {
    match kind {
        Some(NodeKind::Input) => "input",
        Some(NodeKind::Computed(ComputedKind::Hidden)) => "hidden",
        Some(NodeKind::Computed(ComputedKind::Output)) => "output",
        None => "node",
    }
}

/// Maps layout units to canvas pixels.
struct Viewport {
    scale: f64,
    centre: Point,
    width: f64,
    height: f64,
}

impl Viewport {
    fn fit(points: impl Iterator<Item = Point>, config: &RenderConfig) -> Self {
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let width = f64::from(config.width);
        let height = f64::from(config.height);
        let usable_w = (width - 2.0 * config.margin).max(1.0);
        let usable_h = (height - 2.0 * config.margin).max(1.0);

        let span_x = max_x - min_x;
        let span_y = max_y - min_y;
        let fit = |usable: f64, span: f64| {
            if span > 0.0 {
                usable / span
            } else {
                f64::INFINITY
            }
        };
        let mut scale = fit(usable_w, span_x).min(fit(usable_h, span_y));
        if !scale.is_finite() {
            // A single point, or a single row and column.
            scale = usable_w.min(usable_h) / 2.0;
        }

        let centre = if min_x.is_finite() {
            Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
        } else {
            Point::default()
        };

        Self {
            scale,
            centre,
            width,
            height,
        }
    }

    fn project(&self, p: Point) -> (f64, f64) {
        (
            self.width / 2.0 + (p.x - self.centre.x) * self.scale,
            self.height / 2.0 - (p.y - self.centre.y) * self.scale,
        )
    }
}

// ── SvgRenderer ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    pub config: RenderConfig,
}

impl SvgRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn render_edge(&self, from: (f64, f64), to: (f64, f64), label: &str) -> String {
        let r = self.config.node_radius;
        let f = font(self.config.edge_font_size);

        if from == to {
            // Recurrent self-link: a loop above the node.
            let (x, y) = from;
            let top = y - r;
            let d = format!(
                "M {:.2} {:.2} C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
                x - r / 2.0,
                top + r / 8.0,
                x - r,
                top - 1.5 * r,
                x + r,
                top - 1.5 * r,
                x + r / 2.0,
                top + r / 8.0,
            );
            return format!(
                "<path d=\"{d}\" fill=\"none\" {STROKE} marker-end=\"url(#arrowhead)\"/>\n\
                 <text x=\"{x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" {f}>{}</text>",
                top - 1.2 * r,
                escape(label)
            );
        }

        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let length = dx.hypot(dy);
        let (x1, y1, x2, y2) = if length > 2.0 * r {
            let (ux, uy) = (dx / length, dy / length);
            (from.0 + ux * r, from.1 + uy * r, to.0 - ux * r, to.1 - uy * r)
        } else {
            (from.0, from.1, to.0, to.1)
        };
        let (mx, my) = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);

        format!(
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" {STROKE} marker-end=\"url(#arrowhead)\"/>\n\
             <text x=\"{mx:.2}\" y=\"{my:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" {f} paint-order=\"stroke\" stroke=\"white\" stroke-width=\"3\">{}</text>",
            escape(label)
        )
    }

    fn render_node(&self, at: (f64, f64), label: &str, class: &str) -> String {
        let (cx, cy) = at;
        let r = self.config.node_radius;
        let fill = escape(&self.config.node_fill);
        let f = font(self.config.font_size);
        format!(
            "<g class=\"{class}\">\n\
             <circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"{fill}\" {STROKE}/>\n\
             <text x=\"{cx:.2}\" y=\"{cy:.2}\" dominant-baseline=\"central\" text-anchor=\"middle\" {f}>{}</text>\n\
             </g>",
            escape(label)
        )
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, input: &RenderInput) -> String {
        let w = self.config.width;
        let h = self.config.height;
        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
            ),
            "<defs>".to_string(),
            r#"  <marker id="arrowhead" markerWidth="10" markerHeight="7" refX="10" refY="3.5" orient="auto">"#.to_string(),
            r#"    <polygon points="0 0, 10 3.5, 0 7" fill="black"/>"#.to_string(),
            "  </marker>".to_string(),
            "</defs>".to_string(),
            format!(r#"<rect width="{w}" height="{h}" fill="white"/>"#),
        ];

        if input.is_empty() {
            parts.push("</svg>".to_string());
            return parts.join("\n");
        }

        let view = Viewport::fit(input.positions.values().copied(), &self.config);

        // Edges first so nodes cover their ends; sorted for stable output.
        let mut edges: Vec<_> = input.edges.iter().collect();
        edges.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        for edge in edges {
            let (Some(&from), Some(&to)) =
                (input.positions.get(&edge.from), input.positions.get(&edge.to))
            else {
                continue;
            };
            let label = input
                .edge_labels
                .get(&(edge.from.clone(), edge.to.clone()))
                .cloned()
                .unwrap_or_else(|| edge.weight.edge_label());
            parts.push(self.render_edge(view.project(from), view.project(to), &label));
        }

        for (id, &point) in &input.positions {
            let label = input
                .node_labels
                .get(id)
                .map(String::as_str)
                .unwrap_or(id.as_str());
            let class = kind_class(input.node_kinds.get(id));
            parts.push(self.render_node(view.project(point), label, class));
        }

        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
