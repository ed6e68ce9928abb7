//! Simple frame children: labeled dots and segments.

use glam::dvec2;

use super::{Figure, FigureKind, FrameContext};
use crate::defaults;
use crate::errors::FigureError;
use crate::svg::{Element, Style, TextAnchor};
use crate::types::{BBox, LabeledPoint, Point};

/// Dot with an optional label up and to the right
#[derive(Clone, Debug, PartialEq)]
pub struct PointMarker {
    point: LabeledPoint,
    style: Style,
    embedded: bool,
}

impl PointMarker {
    pub fn new(x: f64, y: f64) -> Self {
        PointMarker {
            point: LabeledPoint::new(x, y),
            style: Style::default(),
            embedded: false,
        }
    }

    pub fn labeled(x: f64, y: f64, label: impl Into<String>) -> Self {
        PointMarker {
            point: LabeledPoint::labeled(x, y, label),
            ..Self::new(x, y)
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn point(&self) -> &LabeledPoint {
        &self.point
    }
}

impl Figure for PointMarker {
    fn embed(&self, frame: &FrameContext) -> FigureKind {
        if self.embedded {
            return self.clone().into();
        }
        PointMarker {
            point: self.point.moved_to(frame.to_svg(self.point.point())),
            style: self.style.clone(),
            embedded: true,
        }
        .into()
    }

    fn is_embedded(&self) -> bool {
        self.embedded
    }

    fn elements(&self) -> Result<Vec<Element>, FigureError> {
        let at = self.point.point();
        let dot = self.style.clone().with_fill(self.style.stroke.clone());
        let mut out = vec![Element::circle(at, defaults::DOT_RADIUS, &dot)];
        if let Some(label) = &self.point.label {
            let offset = defaults::LABEL_OFFSET * 0.6;
            out.push(
                Element::text(at + dvec2(offset, -offset), label.as_str(), &self.style)
                    .anchored(TextAnchor::Start),
            );
        }
        Ok(vec![Element::group("point", out)])
    }

    fn bounds(&self) -> BBox {
        let mut bb = BBox::new();
        bb.expand_circle(self.point.point(), defaults::DOT_RADIUS);
        bb
    }
}

/// Straight segment between two points, optionally labeled at its midpoint
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    from: Point,
    to: Point,
    label: Option<String>,
    style: Style,
    embedded: bool,
}

impl Segment {
    pub fn new(from: impl Into<Point>, to: impl Into<Point>) -> Self {
        Segment {
            from: from.into(),
            to: to.into(),
            label: None,
            style: Style::default(),
            embedded: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn endpoints(&self) -> (Point, Point) {
        (self.from, self.to)
    }
}

impl Figure for Segment {
    fn embed(&self, frame: &FrameContext) -> FigureKind {
        if self.embedded {
            return self.clone().into();
        }
        Segment {
            from: frame.to_svg(self.from),
            to: frame.to_svg(self.to),
            label: self.label.clone(),
            style: self.style.clone(),
            embedded: true,
        }
        .into()
    }

    fn is_embedded(&self) -> bool {
        self.embedded
    }

    fn elements(&self) -> Result<Vec<Element>, FigureError> {
        let mut out = vec![Element::line(self.from, self.to, &self.style)];
        if let Some(label) = &self.label {
            let at = self.from.midpoint(self.to) + dvec2(0.0, -defaults::LABEL_OFFSET * 0.6);
            out.push(Element::text(at, label.as_str(), &self.style));
        }
        Ok(vec![Element::group("segment", out)])
    }

    fn bounds(&self) -> BBox {
        BBox::from_points([self.from, self.to])
    }
}
