//! SVG generation
//!
//! Figures produce [`Element`]s; a [`Document`] wraps them in the root
//! `<svg>` tag and serializes through the `svg` crate. Every coordinate
//! written here is already in drawing space.

use std::fmt;

use ::svg::node::Node;
use ::svg::node::element;

use crate::defaults;
use crate::path::{PathData, fmt_num};
use crate::triangle::ViewBox;
use crate::types::Point;

/// Presentation attributes shared by every drawable element
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub stroke: String,
    pub fill: String,
    pub stroke_width: f64,
    pub dashed: bool,
    pub font_size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            stroke: defaults::STROKE.to_string(),
            fill: defaults::FILL.to_string(),
            stroke_width: defaults::STROKE_WIDTH,
            dashed: false,
            font_size: defaults::FONT_SIZE,
        }
    }
}

impl Style {
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_dashed(mut self, dashed: bool) -> Self {
        self.dashed = dashed;
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Thin dashed variant used for auxiliary constructions
    pub fn auxiliary(&self) -> Style {
        Style {
            stroke_width: (self.stroke_width / 2.0).max(1.0),
            dashed: true,
            fill: "none".to_string(),
            ..self.clone()
        }
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("stroke", self.stroke.clone()),
            ("stroke-width", fmt_num(self.stroke_width)),
            ("fill", self.fill.clone()),
        ];
        if self.dashed {
            attrs.push(("stroke-dasharray", "6,4".to_string()));
        }
        attrs
    }

    /// Set the presentation attributes on a shape element
    fn apply<E: Styled>(&self, element: E) -> E {
        self.attributes()
            .into_iter()
            .fold(element, |element, (name, value)| element.with_attr(name, value))
    }
}

/// Shape elements that take presentation attributes
trait Styled: Sized {
    fn with_attr(self, name: &'static str, value: String) -> Self;
}

macro_rules! styled {
    ($($ty:ident),*) => {
        $(
            impl Styled for element::$ty {
                fn with_attr(self, name: &'static str, value: String) -> Self {
                    self.set(name, value)
                }
            }
        )*
    };
}

styled!(Line, Path, Polygon, Circle);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// One node of the output tree
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Line {
        from: Point,
        to: Point,
        style: Style,
    },
    Path {
        d: PathData,
        style: Style,
    },
    Polygon {
        points: Vec<Point>,
        style: Style,
    },
    Circle {
        center: Point,
        r: f64,
        style: Style,
    },
    Text {
        at: Point,
        content: String,
        anchor: TextAnchor,
        font_size: f64,
        fill: String,
    },
    Group {
        class: Option<String>,
        children: Vec<Element>,
    },
}

impl Element {
    pub fn line(from: Point, to: Point, style: &Style) -> Self {
        Element::Line {
            from,
            to,
            style: style.clone(),
        }
    }

    pub fn path(d: PathData, style: &Style) -> Self {
        Element::Path {
            d,
            style: style.clone(),
        }
    }

    pub fn polygon(points: impl IntoIterator<Item = Point>, style: &Style) -> Self {
        Element::Polygon {
            points: points.into_iter().collect(),
            style: style.clone(),
        }
    }

    pub fn circle(center: Point, r: f64, style: &Style) -> Self {
        Element::Circle {
            center,
            r,
            style: style.clone(),
        }
    }

    /// Centered label in the style's stroke color
    pub fn text(at: Point, content: impl Into<String>, style: &Style) -> Self {
        Element::Text {
            at,
            content: content.into(),
            anchor: TextAnchor::Middle,
            font_size: style.font_size,
            fill: style.stroke.clone(),
        }
    }

    pub fn group(class: impl Into<String>, children: Vec<Element>) -> Self {
        Element::Group {
            class: Some(class.into()),
            children,
        }
    }

    /// Replace the anchor of a text element; other elements pass through
    pub fn anchored(mut self, new_anchor: TextAnchor) -> Self {
        if let Element::Text { anchor, .. } = &mut self {
            *anchor = new_anchor;
        }
        self
    }

    /// Number of leaf elements, descending into groups
    pub fn leaf_count(&self) -> usize {
        match self {
            Element::Group { children, .. } => children.iter().map(Element::leaf_count).sum(),
            _ => 1,
        }
    }

    /// The element as an `svg` crate node
    pub fn to_node(&self) -> Box<dyn Node> {
        match self {
            Element::Line { from, to, style } => Box::new(style.apply(
                element::Line::new()
                    .set("x1", fmt_num(from.x))
                    .set("y1", fmt_num(from.y))
                    .set("x2", fmt_num(to.x))
                    .set("y2", fmt_num(to.y)),
            )),
            Element::Path { d, style } => {
                Box::new(style.apply(element::Path::new().set("d", d.to_string())))
            }
            Element::Polygon { points, style } => {
                let points = points
                    .iter()
                    .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                Box::new(style.apply(element::Polygon::new().set("points", points)))
            }
            Element::Circle { center, r, style } => Box::new(
                style.apply(
                    element::Circle::new()
                        .set("cx", fmt_num(center.x))
                        .set("cy", fmt_num(center.y))
                        .set("r", fmt_num(*r)),
                ),
            ),
            Element::Text {
                at,
                content,
                anchor,
                font_size,
                fill,
            } => Box::new(
                element::Text::new(content.as_str())
                    .set("x", fmt_num(at.x))
                    .set("y", fmt_num(at.y))
                    .set("text-anchor", anchor.as_str())
                    .set("dominant-baseline", "middle")
                    .set("font-size", fmt_num(*font_size))
                    .set("fill", fill.as_str()),
            ),
            Element::Group { class, children } => {
                let mut group = element::Group::new();
                if let Some(class) = class {
                    group = group.set("class", class.as_str());
                }
                Box::new(children.iter().fold(group, |group, child| group.add(child.to_node())))
            }
        }
    }
}

/// Root `<svg>` element
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub view_box: ViewBox,
    pub children: Vec<Element>,
}

impl Document {
    /// Canvas of `width` x `height` with a view box starting at the origin
    pub fn new(width: f64, height: f64) -> Self {
        Document {
            width,
            height,
            view_box: ViewBox {
                min_x: 0.0,
                min_y: 0.0,
                width,
                height,
            },
            children: Vec::new(),
        }
    }

    /// Canvas sized to `view_box`
    pub fn fitted(view_box: ViewBox) -> Self {
        Document {
            width: view_box.width,
            height: view_box.height,
            view_box,
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.children.push(element);
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.children.extend(elements);
    }
}

impl Document {
    /// Assemble the `svg` crate document for this canvas
    pub fn to_svg_document(&self) -> ::svg::Document {
        let vb = &self.view_box;
        let root = ::svg::Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", fmt_num(self.width))
            .set("height", fmt_num(self.height))
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    fmt_num(vb.min_x),
                    fmt_num(vb.min_y),
                    fmt_num(vb.width),
                    fmt_num(vb.height)
                ),
            );
        self.children.iter().fold(root, |doc, child| doc.add(child.to_node()))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_document())
    }
}
