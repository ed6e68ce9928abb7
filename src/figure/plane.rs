//! Cartesian plane: a coordinate frame with grid, axes and ticks that hosts
//! child figures declared in math space.

use glam::dvec2;

use super::{Figure, FigureKind, FrameContext};
use crate::defaults;
use crate::errors::{FigureError, Result};
use crate::path::fmt_num;
use crate::svg::{Document, Element, Style, TextAnchor};
use crate::transform::{AxisRange, CoordinateTransform, Dimensions};
use crate::types::Point;

/// Math window, scale and canvas of a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameConfig {
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    /// Pixels per math unit
    pub scale: f64,
    pub padding: f64,
    /// Explicit canvas width; computed from the ranges when `None`
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        FrameConfig {
            x_range: AxisRange::default(),
            y_range: AxisRange::default(),
            scale: defaults::SCALE,
            padding: defaults::PADDING,
            width: None,
            height: None,
        }
    }
}

impl FrameConfig {
    pub fn new(x_range: AxisRange, y_range: AxisRange) -> Self {
        FrameConfig {
            x_range,
            y_range,
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Validated transform for this configuration
    pub fn transform(&self) -> Result<CoordinateTransform> {
        let transform =
            CoordinateTransform::new(self.x_range, self.y_range, self.scale, self.padding)?;
        if self.width.is_none() && self.height.is_none() {
            return Ok(transform);
        }
        let computed = transform.dimensions();
        transform.with_canvas(Dimensions {
            width: self.width.unwrap_or(computed.width),
            height: self.height.unwrap_or(computed.height),
        })
    }
}

/// Which background layers a plane draws
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneOptions {
    pub show_grid: bool,
    pub grid_step: f64,
    pub show_axes: bool,
    pub show_arrows: bool,
    pub show_tick_labels: bool,
    pub tick_step: f64,
    /// Dot at `(0, 0)`, drawn only when the origin is visible
    pub show_origin: bool,
    /// Axis style; the grid derives a lighter one from it
    pub style: Style,
}

impl Default for PlaneOptions {
    fn default() -> Self {
        PlaneOptions {
            show_grid: true,
            grid_step: defaults::GRID_STEP,
            show_axes: true,
            show_arrows: true,
            show_tick_labels: true,
            tick_step: defaults::GRID_STEP,
            show_origin: true,
            style: Style::default()
                .with_stroke(defaults::AXIS_STROKE)
                .with_stroke_width(1.5)
                .with_font_size(11.0),
        }
    }
}

impl PlaneOptions {
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    pub fn with_grid_step(mut self, step: f64) -> Self {
        self.grid_step = step;
        self
    }

    pub fn with_axes(mut self, show: bool) -> Self {
        self.show_axes = show;
        self
    }

    pub fn with_arrows(mut self, show: bool) -> Self {
        self.show_arrows = show;
        self
    }

    pub fn with_tick_labels(mut self, show: bool) -> Self {
        self.show_tick_labels = show;
        self
    }

    pub fn with_tick_step(mut self, step: f64) -> Self {
        self.tick_step = step;
        self
    }

    pub fn with_origin(mut self, show: bool) -> Self {
        self.show_origin = show;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// No background at all
    pub fn empty() -> Self {
        PlaneOptions {
            show_grid: false,
            show_axes: false,
            show_arrows: false,
            show_tick_labels: false,
            show_origin: false,
            ..Default::default()
        }
    }
}

/// Pixel extents of the visible math window
#[derive(Clone, Copy, Debug)]
struct Window {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Window {
    fn of(frame: &FrameContext) -> Self {
        let (x, y) = (frame.x_range(), frame.y_range());
        let low = frame.to_svg(Point::new(x.min(), y.min()));
        let high = frame.to_svg(Point::new(x.max(), y.max()));
        Window {
            left: low.x,
            right: high.x,
            top: high.y,
            bottom: low.y,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartesianPlane {
    config: FrameConfig,
    options: PlaneOptions,
}

impl CartesianPlane {
    pub fn new(config: FrameConfig) -> Self {
        CartesianPlane {
            config,
            options: PlaneOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PlaneOptions) -> Self {
        self.options = options;
        self
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    pub fn options(&self) -> &PlaneOptions {
        &self.options
    }

    /// Read-only frame handed to children
    pub fn frame(&self) -> Result<FrameContext> {
        Ok(FrameContext::new(self.config.transform()?))
    }

    /// Error when there is neither a background nor a child to draw
    pub fn validate_non_empty(&self, children: &[FigureKind]) -> Result<(), FigureError> {
        if !self.options.show_grid && !self.options.show_axes && children.is_empty() {
            return Err(FigureError::EmptyFrame);
        }
        Ok(())
    }

    /// Grid, axes, ticks and origin, back to front
    pub fn background(&self, frame: &FrameContext) -> Result<Vec<Element>> {
        let mut out = Vec::new();
        if self.options.show_grid {
            out.push(Element::group("grid", self.grid(frame)?));
        }
        if self.options.show_axes {
            out.push(Element::group("axes", self.axes(frame)?));
        }
        if self.options.show_origin && frame.contains_math(Point::ORIGIN) {
            out.push(Element::group("origin", self.origin(frame)));
        }
        Ok(out)
    }

    /// Full document: background then each child embedded in this frame.
    ///
    /// Fails with [`FigureError::EmptyFrame`] when there is nothing to draw.
    pub fn render(&self, children: &[FigureKind]) -> Result<Document, FigureError> {
        self.validate_non_empty(children)?;
        let frame = self.frame()?;
        let size = frame.dimensions();
        crate::log::debug!(
            width = size.width,
            height = size.height,
            children = children.len(),
            "rendering plane"
        );

        let mut doc = Document::new(size.width, size.height);
        doc.extend(self.background(&frame)?);
        for child in children {
            let embedded = child.embed(&frame);
            doc.extend(embedded.elements()?);
        }
        Ok(doc)
    }

    pub fn to_svg(&self, children: &[FigureKind]) -> Result<String, FigureError> {
        Ok(self.render(children)?.to_string())
    }

    fn grid(&self, frame: &FrameContext) -> Result<Vec<Element>> {
        let style = self
            .options
            .style
            .clone()
            .with_stroke(defaults::GRID_STROKE)
            .with_stroke_width(1.0);
        let w = Window::of(frame);
        let transform = frame.transform();
        let xs = transform.x_ticks(self.options.grid_step)?;
        let ys = transform.y_ticks(self.options.grid_step)?;
        crate::log::debug!(vertical = xs.len(), horizontal = ys.len(), "grid lines");

        let vertical = xs.map(|t| {
            Element::line(Point::new(t.position, w.top), Point::new(t.position, w.bottom), &style)
        });
        let horizontal = ys.map(|t| {
            Element::line(Point::new(w.left, t.position), Point::new(w.right, t.position), &style)
        });
        Ok(vertical.chain(horizontal).collect())
    }

    /// Axis lines through the origin, clamped into the padded canvas when
    /// the origin is off-screen
    fn axis_positions(&self, frame: &FrameContext) -> Point {
        let size = frame.dimensions();
        let pad = self.config.padding;
        let origin = frame.to_svg(Point::ORIGIN);
        Point::new(
            origin.x.clamp(pad, (size.width - pad).max(pad)),
            origin.y.clamp(pad, (size.height - pad).max(pad)),
        )
    }

    fn axes(&self, frame: &FrameContext) -> Result<Vec<Element>> {
        let style = &self.options.style;
        let w = Window::of(frame);
        let axis = self.axis_positions(frame);

        let mut out = vec![
            Element::line(Point::new(w.left, axis.y), Point::new(w.right, axis.y), style),
            Element::line(Point::new(axis.x, w.bottom), Point::new(axis.x, w.top), style),
        ];

        if self.options.show_arrows {
            let filled = style.clone().with_fill(style.stroke.clone());
            let a = defaults::ARROW_SIZE;
            out.push(Element::polygon(
                [
                    Point::new(w.right, axis.y),
                    Point::new(w.right - a, axis.y - a / 2.0),
                    Point::new(w.right - a, axis.y + a / 2.0),
                ],
                &filled,
            ));
            out.push(Element::polygon(
                [
                    Point::new(axis.x, w.top),
                    Point::new(axis.x - a / 2.0, w.top + a),
                    Point::new(axis.x + a / 2.0, w.top + a),
                ],
                &filled,
            ));
        }

        let transform = frame.transform();
        let half = defaults::TICK_HALF;
        let label_gap = half + style.font_size * 0.8;
        for tick in transform.x_ticks(self.options.tick_step)? {
            out.push(Element::line(
                Point::new(tick.position, axis.y - half),
                Point::new(tick.position, axis.y + half),
                style,
            ));
            if self.options.show_tick_labels && tick.value != 0.0 {
                out.push(Element::text(
                    Point::new(tick.position, axis.y + label_gap),
                    fmt_num(tick.value),
                    style,
                ));
            }
        }
        for tick in transform.y_ticks(self.options.tick_step)? {
            out.push(Element::line(
                Point::new(axis.x - half, tick.position),
                Point::new(axis.x + half, tick.position),
                style,
            ));
            if self.options.show_tick_labels && tick.value != 0.0 {
                let at = Point::new(axis.x - half - 3.0, tick.position);
                out.push(Element::text(at, fmt_num(tick.value), style).anchored(TextAnchor::End));
            }
        }
        Ok(out)
    }

    fn origin(&self, frame: &FrameContext) -> Vec<Element> {
        let style = &self.options.style;
        let at = frame.to_svg(Point::ORIGIN);
        let dot = style.clone().with_fill(style.stroke.clone());
        let nudge = defaults::TICK_HALF + 3.0;
        vec![
            Element::circle(at, defaults::DOT_RADIUS, &dot),
            Element::text(at + dvec2(-nudge, nudge + style.font_size * 0.5), "O", style)
                .anchored(TextAnchor::End),
        ]
    }
}
