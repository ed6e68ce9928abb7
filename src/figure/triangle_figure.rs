//! Triangle figure: the polygon plus its decorations.
//!
//! Decorations are drawn in a fixed order (circles and special lines under
//! the angle marks, labels on top) so later elements are never hidden.

use glam::dvec2;

use super::{Figure, FigureKind, FrameContext, format_measure};
use crate::defaults;
use crate::errors::FigureError;
use crate::path::{describe_angle_arc, describe_right_angle_marker};
use crate::svg::{Document, Element, Style, TextAnchor};
use crate::triangle::{
    NotablePoint, SpecialLineConfig, Triangle, ViewBox, calculate_angle_label_position,
    calculate_side_label_position, calculate_special_line_endpoints,
    calculate_vertex_label_position, circumcenter, circumradius, find_right_angle_vertex, incenter,
    inradius,
};
use crate::types::BBox;

/// What to draw around a triangle. All distances are pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleOptions {
    pub show_vertex_labels: bool,
    /// Side lengths, in the triangle's own units
    pub show_side_labels: bool,
    pub show_angle_arcs: bool,
    /// Angle measures along the bisectors (`"60°"`)
    pub show_angle_values: bool,
    /// Square glyph instead of an arc at a right angle
    pub mark_right_angle: bool,
    pub notable_points: Vec<NotablePoint>,
    pub special_lines: Vec<SpecialLineConfig>,
    pub show_incircle: bool,
    pub show_circumcircle: bool,
    pub arc_radius: f64,
    pub label_offset: f64,
    /// Canvas margin when rendered standalone
    pub padding: f64,
    pub style: Style,
}

impl Default for TriangleOptions {
    fn default() -> Self {
        TriangleOptions {
            show_vertex_labels: true,
            show_side_labels: false,
            show_angle_arcs: true,
            show_angle_values: false,
            mark_right_angle: true,
            notable_points: Vec::new(),
            special_lines: Vec::new(),
            show_incircle: false,
            show_circumcircle: false,
            arc_radius: defaults::ARC_RADIUS,
            label_offset: defaults::LABEL_OFFSET,
            padding: defaults::VIEW_PADDING,
            style: Style::default().with_fill(defaults::TRIANGLE_FILL),
        }
    }
}

impl TriangleOptions {
    pub fn with_side_labels(mut self, show: bool) -> Self {
        self.show_side_labels = show;
        self
    }

    pub fn with_vertex_labels(mut self, show: bool) -> Self {
        self.show_vertex_labels = show;
        self
    }

    pub fn with_angle_arcs(mut self, show: bool) -> Self {
        self.show_angle_arcs = show;
        self
    }

    pub fn with_angle_values(mut self, show: bool) -> Self {
        self.show_angle_values = show;
        self
    }

    pub fn with_right_angle_mark(mut self, show: bool) -> Self {
        self.mark_right_angle = show;
        self
    }

    pub fn with_notable_point(mut self, kind: NotablePoint) -> Self {
        self.notable_points.push(kind);
        self
    }

    pub fn with_special_line(mut self, config: SpecialLineConfig) -> Self {
        self.special_lines.push(config);
        self
    }

    pub fn with_incircle(mut self, show: bool) -> Self {
        self.show_incircle = show;
        self
    }

    pub fn with_circumcircle(mut self, show: bool) -> Self {
        self.show_circumcircle = show;
        self
    }

    pub fn with_arc_radius(mut self, radius: f64) -> Self {
        self.arc_radius = radius;
        self
    }

    pub fn with_label_offset(mut self, offset: f64) -> Self {
        self.label_offset = offset;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Plain outline: no labels, arcs or marks
    pub fn bare() -> Self {
        TriangleOptions {
            show_vertex_labels: false,
            show_angle_arcs: false,
            mark_right_angle: false,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TriangleFigure {
    triangle: Triangle,
    options: TriangleOptions,
    /// Drawing units per triangle unit, used to print side lengths
    unit_scale: f64,
    embedded: bool,
}

impl TriangleFigure {
    /// Figure over `triangle`, whose vertices are taken as drawing-space
    /// coordinates until the figure is embedded in a frame
    pub fn new(triangle: Triangle) -> Self {
        TriangleFigure {
            triangle,
            options: TriangleOptions::default(),
            unit_scale: 1.0,
            embedded: false,
        }
    }

    pub fn with_options(mut self, options: TriangleOptions) -> Self {
        self.options = options;
        self
    }

    /// Pixels per unit for side-length labels of a standalone figure
    pub fn with_unit_scale(mut self, unit_scale: f64) -> Self {
        self.unit_scale = unit_scale;
        self
    }

    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    pub fn options(&self) -> &TriangleOptions {
        &self.options
    }

    /// View box that fits the figure with `options.padding` on every side
    pub fn view_box(&self) -> ViewBox {
        ViewBox::from_bbox(&self.bounds().padded(self.options.padding))
    }

    /// Standalone document sized to [`Self::view_box`]
    pub fn document(&self) -> Result<Document, FigureError> {
        let mut doc = Document::fitted(self.view_box());
        doc.extend(self.elements()?);
        Ok(doc)
    }

    pub fn to_svg(&self) -> Result<String, FigureError> {
        Ok(self.document()?.to_string())
    }

    fn circles(&self, aux: &Style) -> Result<Vec<Element>, FigureError> {
        let mut out = Vec::new();
        if self.options.show_incircle {
            let r = inradius(&self.triangle);
            if r > 0.0 {
                out.push(Element::circle(incenter(&self.triangle)?, r, aux));
            }
        }
        if self.options.show_circumcircle {
            let center = circumcenter(&self.triangle)?;
            out.push(Element::circle(center, circumradius(&self.triangle)?, aux));
        }
        Ok(out)
    }

    fn special_lines(&self, aux: &Style) -> Result<Vec<Element>, FigureError> {
        self.options
            .special_lines
            .iter()
            .map(|config| -> Result<Element, FigureError> {
                let line = calculate_special_line_endpoints(&self.triangle, config)?;
                Ok(Element::line(line.start, line.end, aux))
            })
            .collect()
    }

    fn angle_marks(&self) -> Vec<Element> {
        let opts = &self.options;
        let mark_style = self.options.style.clone().with_fill("none").with_stroke_width(1.0);
        let right = if opts.mark_right_angle {
            find_right_angle_vertex(&self.triangle)
        } else {
            None
        };
        let [p0, p1, p2] = self.triangle.points();
        let corners = [(p0, p1, p2), (p1, p2, p0), (p2, p0, p1)];
        let angles = self.triangle.angles();

        let mut out = Vec::new();
        for (i, (vertex, a, b)) in corners.into_iter().enumerate() {
            let d = if right == Some(i) {
                describe_right_angle_marker(vertex, a, b, defaults::RIGHT_ANGLE_SIZE)
            } else if opts.show_angle_arcs {
                describe_angle_arc(vertex, a, b, opts.arc_radius)
            } else {
                continue;
            };
            if !d.is_empty() {
                out.push(Element::path(d, &mark_style));
            }
        }
        if opts.show_angle_values {
            for (i, (vertex, a, b)) in corners.into_iter().enumerate() {
                let distance = opts.arc_radius + opts.label_offset;
                let at = calculate_angle_label_position(vertex, a, b, distance);
                let text = format!("{}°", format_measure(angles[i].raw()));
                out.push(Element::text(at, text, &opts.style));
            }
        }
        out
    }

    fn notable_points(&self) -> Result<Vec<Element>, FigureError> {
        let style = self.options.style.clone().with_stroke(defaults::NOTABLE_STROKE);
        let dot = style.clone().with_fill(defaults::NOTABLE_STROKE);
        let nudge = self.options.label_offset * 0.6;
        let mut out = Vec::new();
        for &kind in &self.options.notable_points {
            let p = self.triangle.notable_point(kind)?;
            out.push(Element::circle(p, defaults::DOT_RADIUS, &dot));
            out.push(
                Element::text(p + dvec2(nudge, -nudge), kind.symbol(), &style)
                    .anchored(TextAnchor::Start),
            );
        }
        Ok(out)
    }

    fn labels(&self) -> Vec<Element> {
        let opts = &self.options;
        let style = &opts.style;
        let mut out = Vec::new();
        if opts.show_side_labels {
            let lengths = self.triangle.side_lengths();
            for (i, len) in lengths.into_iter().enumerate() {
                let Ok((a, b)) = self.triangle.side_endpoints(i) else {
                    continue;
                };
                let at = calculate_side_label_position(a, b, &self.triangle, opts.label_offset);
                out.push(Element::text(at, format_measure(len / self.unit_scale), style));
            }
        }
        if opts.show_vertex_labels {
            for vertex in self.triangle.vertices() {
                if let Some(label) = &vertex.label {
                    let at =
                        calculate_vertex_label_position(vertex, &self.triangle, opts.label_offset);
                    out.push(Element::text(at, label.as_str(), style));
                }
            }
        }
        out
    }
}

impl Figure for TriangleFigure {
    fn embed(&self, frame: &FrameContext) -> FigureKind {
        if self.embedded {
            return self.clone().into();
        }
        let triangle = self.triangle.map_points(|p| frame.to_svg(p));
        crate::log::debug!(
            from = ?self.triangle.points(),
            to = ?triangle.points(),
            "embedding triangle"
        );
        TriangleFigure {
            triangle,
            options: self.options.clone(),
            unit_scale: frame.scale(),
            embedded: true,
        }
        .into()
    }

    fn is_embedded(&self) -> bool {
        self.embedded
    }

    fn elements(&self) -> Result<Vec<Element>, FigureError> {
        let aux = self.options.style.auxiliary().with_stroke(defaults::AUX_STROKE);
        let mut children = vec![Element::polygon(self.triangle.points(), &self.options.style)];
        children.extend(self.circles(&aux)?);
        children.extend(self.special_lines(&aux)?);
        children.extend(self.angle_marks());
        children.extend(self.notable_points()?);
        children.extend(self.labels());
        Ok(vec![Element::group("triangle", children)])
    }

    /// Vertices, plus any circle the options draw
    fn bounds(&self) -> BBox {
        let mut bb = BBox::from_points(self.triangle.points());
        if self.options.show_circumcircle {
            if let (Ok(center), Ok(r)) =
                (circumcenter(&self.triangle), circumradius(&self.triangle))
            {
                bb.expand_circle(center, r);
            }
        }
        bb
    }
}
