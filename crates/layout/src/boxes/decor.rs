//! Decorator boxes: each wraps one child and changes how it is painted.

use super::{BoxRef, Metrics};
use mathbox_render::guard::{ColorGuard, RotateGuard, ScaleGuard, StrokeGuard, TranslateGuard};
use mathbox_render::{CapStyle, Graphics, JoinStyle, Stroke};
use mathbox_types::{Color, Point};

/// Scales the child by independent horizontal and vertical factors.
/// Negative factors mirror; a negative vertical factor swaps what counts
/// as ascent and descent.
#[derive(Debug)]
pub struct ScaleBox {
    pub metrics: Metrics,
    pub child: BoxRef,
    sx: f32,
    sy: f32,
}

impl ScaleBox {
    pub fn new(child: BoxRef, sx: f32, sy: f32) -> Self {
        let sx = if sx.is_finite() { sx } else { 1.0 };
        let sy = if sy.is_finite() { sy } else { 1.0 };
        let m = child.metrics();
        let metrics = Metrics {
            width: m.width * sx.abs(),
            height: if sy > 0.0 { m.height * sy } else { -m.depth * sy },
            depth: if sy > 0.0 { m.depth * sy } else { -m.height * sy },
            shift: m.shift * sy,
        };
        Self { metrics, child, sx, sy }
    }

    pub fn uniform(child: BoxRef, factor: f32) -> Self {
        Self::new(child, factor, factor)
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        if self.sx == 0.0 || self.sy == 0.0 {
            return;
        }
        // A mirrored child is drawn from its right edge.
        let dec = if self.sx < 0.0 { self.metrics.width } else { 0.0 };
        let mut g = TranslateGuard::new(g, x + dec, y);
        let mut g = ScaleGuard::new(&mut *g, self.sx, self.sy);
        self.child.draw(&mut *g, 0.0, 0.0);
    }
}

/// Mirrors the child horizontally in place; metrics are unchanged.
#[derive(Debug)]
pub struct ReflectBox {
    pub metrics: Metrics,
    pub child: BoxRef,
}

impl ReflectBox {
    pub fn new(child: BoxRef) -> Self {
        Self { metrics: *child.metrics(), child }
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        let mut g = TranslateGuard::new(g, x, y);
        let mut g = ScaleGuard::new(&mut *g, -1.0, 1.0);
        self.child.draw(&mut *g, -self.metrics.width, 0.0);
    }
}

/// Reference point for a rotation, named relative to the child's box.
/// The `Baseline*` anchors sit on the baseline itself; `Bottom*` sit on
/// the bottom edge (baseline plus depth).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anchor {
    BottomLeft,
    BottomCenter,
    BottomRight,
    CenterLeft,
    Center,
    CenterRight,
    TopLeft,
    TopCenter,
    TopRight,
    #[default]
    BaselineLeft,
    BaselineCenter,
    BaselineRight,
}

impl Anchor {
    /// Parse a two-letter anchor code: one of `lcr` crossed with one of
    /// `bct`, in either order, case-insensitive except that a capital `B`
    /// selects the baseline row. A single letter implies `c` for the
    /// other axis; anything unrecognized is the baseline-left default.
    pub fn parse(code: &str) -> Self {
        if code.is_empty() {
            return Self::BaselineLeft;
        }
        let mut code = code.to_string();
        if code.len() == 1 {
            code.push('c');
        }
        let baseline = code.contains('B');
        let lowered = code.to_lowercase();
        if baseline {
            return if lowered.contains('l') {
                Self::BaselineLeft
            } else if lowered.contains('r') {
                Self::BaselineRight
            } else if lowered.contains('c') {
                Self::BaselineCenter
            } else {
                Self::BaselineLeft
            };
        }

        let chars: Vec<char> = lowered.chars().collect();
        if chars.len() != 2 {
            return Self::BaselineLeft;
        }
        let mut horizontal = None;
        let mut vertical = None;
        for &ch in &chars {
            match ch {
                'l' | 'r' if horizontal.is_none() => horizontal = Some(ch),
                'b' | 't' if vertical.is_none() => vertical = Some(ch),
                'c' => {}
                _ => return Self::BaselineLeft,
            }
        }
        match (horizontal.unwrap_or('c'), vertical.unwrap_or('c')) {
            ('l', 'b') => Self::BottomLeft,
            ('c', 'b') => Self::BottomCenter,
            ('r', 'b') => Self::BottomRight,
            ('l', 't') => Self::TopLeft,
            ('c', 't') => Self::TopCenter,
            ('r', 't') => Self::TopRight,
            ('l', 'c') => Self::CenterLeft,
            ('r', 'c') => Self::CenterRight,
            _ => Self::Center,
        }
    }

    /// The anchor's position relative to the child's baseline origin,
    /// y growing upward.
    fn position(self, m: &Metrics) -> Point {
        match self {
            Self::BottomLeft => Point::new(0.0, -m.depth),
            Self::BottomCenter => Point::new(m.width / 2.0, -m.depth),
            Self::BottomRight => Point::new(m.width, -m.depth),
            Self::TopLeft => Point::new(0.0, m.height),
            Self::TopCenter => Point::new(m.width / 2.0, m.height),
            Self::TopRight => Point::new(m.width, m.height),
            Self::BaselineLeft => Point::new(0.0, 0.0),
            Self::BaselineCenter => Point::new(m.width / 2.0, 0.0),
            Self::BaselineRight => Point::new(m.width, 0.0),
            Self::CenterLeft => Point::new(0.0, (m.height - m.depth) / 2.0),
            Self::Center => Point::new(m.width / 2.0, (m.height - m.depth) / 2.0),
            Self::CenterRight => Point::new(m.width, (m.height - m.depth) / 2.0),
        }
    }
}

/// Rotates the child counter-clockwise around an anchor point. Metrics
/// grow to the bounding box of the rotated child so neighbours never
/// overlap it.
#[derive(Debug)]
pub struct RotateBox {
    pub metrics: Metrics,
    pub child: BoxRef,
    angle: f32,
    shift_x: f32,
    shift_y: f32,
    x_min: f32,
}

impl RotateBox {
    /// `angle` is in degrees; `origin` is the rotation center relative to
    /// the child's baseline origin, y growing upward.
    pub fn new(child: BoxRef, angle: f32, origin: Point) -> Self {
        let m = *child.metrics();
        let angle = angle.to_radians();
        let (s, c) = angle.sin_cos();
        let shift_x = origin.x * (1.0 - c) + origin.y * s;
        let shift_y = origin.y * (1.0 - c) - origin.x * s;

        let corners_x = [
            -m.height * s,
            m.depth * s,
            m.width * c + m.depth * s,
            m.width * c - m.height * s,
        ];
        let corners_y = [
            m.height * c,
            -m.depth * c,
            m.width * s - m.depth * c,
            m.width * s + m.height * c,
        ];
        let x_max = corners_x.iter().fold(f32::MIN, |a, &v| a.max(v)) + shift_x;
        let x_min = corners_x.iter().fold(f32::MAX, |a, &v| a.min(v)) + shift_x;
        let y_max = corners_y.iter().fold(f32::MIN, |a, &v| a.max(v));
        let y_min = corners_y.iter().fold(f32::MAX, |a, &v| a.min(v));

        let metrics = Metrics {
            width: x_max - x_min,
            height: y_max + shift_y,
            depth: -y_min - shift_y,
            shift: m.shift,
        };
        Self { metrics, child, angle, shift_x, shift_y, x_min }
    }

    pub fn with_anchor(child: BoxRef, angle: f32, anchor: Anchor) -> Self {
        let origin = anchor.position(child.metrics());
        Self::new(child, angle, origin)
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        let y = y - self.shift_y;
        let x = x + self.shift_x - self.x_min;
        // Screen y grows downward, so a counter-clockwise rotation is
        // negative for the backend.
        let mut g = RotateGuard::new(g, -self.angle, x, y);
        self.child.draw(&mut *g, x, y);
    }
}

/// Recolors the child, optionally painting a background behind it. The
/// child's shift is not propagated.
#[derive(Debug)]
pub struct ColorBox {
    pub metrics: Metrics,
    pub child: BoxRef,
    foreground: Option<Color>,
    background: Option<Color>,
}

impl ColorBox {
    pub fn new(child: BoxRef, foreground: Option<Color>, background: Option<Color>) -> Self {
        let m = child.metrics();
        Self {
            metrics: Metrics::new(m.width, m.height, m.depth),
            child,
            foreground,
            background,
        }
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        let mut g = ColorGuard::new(g);
        if let Some(bg) = self.background {
            g.set_color(bg);
            g.fill_rect(
                x,
                y - self.metrics.height,
                self.metrics.width,
                self.metrics.vertical_extent(),
            );
        }
        let fg = self.foreground.unwrap_or(g.saved());
        g.set_color(fg);
        self.child.draw(&mut *g, x, y);
    }
}

/// Dimensions shared by the framed decorators: border thickness and the
/// padding between border and child.
#[derive(Debug, Clone, Copy)]
struct FrameDims {
    thickness: f32,
    space: f32,
}

fn framed_metrics(child: &Metrics, dims: FrameDims) -> Metrics {
    Metrics {
        width: child.width + 2.0 * dims.thickness + 2.0 * dims.space,
        height: child.height + dims.thickness + dims.space,
        depth: child.depth + dims.thickness + dims.space,
        shift: child.shift,
    }
}

/// A rectangular border around the child, with optional line and
/// background colors.
#[derive(Debug)]
pub struct FrameBox {
    pub metrics: Metrics,
    pub child: BoxRef,
    dims: FrameDims,
    line: Option<Color>,
    background: Option<Color>,
}

impl FrameBox {
    pub fn new(child: BoxRef, thickness: f32, space: f32) -> Self {
        let dims = FrameDims { thickness, space };
        Self {
            metrics: framed_metrics(child.metrics(), dims),
            child,
            dims,
            line: None,
            background: None,
        }
    }

    pub fn with_line(mut self, color: Color) -> Self {
        self.line = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        let th = self.dims.thickness / 2.0;
        let m = &self.metrics;
        {
            let mut g = StrokeGuard::new(g);
            g.set_stroke(Stroke::new(
                self.dims.thickness,
                CapStyle::Butt,
                JoinStyle::Miter,
            ));
            let mut g = ColorGuard::new(&mut *g);
            if let Some(bg) = self.background {
                g.set_color(bg);
                g.fill_rect(
                    x + th,
                    y - m.height + th,
                    m.width - self.dims.thickness,
                    m.vertical_extent() - self.dims.thickness,
                );
                let saved = g.saved();
                g.set_color(saved);
            }
            if let Some(line) = self.line {
                g.set_color(line);
            }
            g.draw_rect(
                x + th,
                y - m.height + th,
                m.width - self.dims.thickness,
                m.vertical_extent() - self.dims.thickness,
            );
        }
        self.child
            .draw(g, x + self.dims.space + self.dims.thickness, y);
    }
}

/// A rounded-corner border. Corner radius is either the explicit diameter
/// or a fraction of the frame's smaller dimension.
#[derive(Debug)]
pub struct OvalBox {
    pub metrics: Metrics,
    pub child: BoxRef,
    dims: FrameDims,
    multiplier: f32,
    diameter: f32,
}

impl OvalBox {
    pub fn new(child: BoxRef, thickness: f32, space: f32, multiplier: f32, diameter: f32) -> Self {
        let dims = FrameDims { thickness, space };
        Self {
            metrics: framed_metrics(child.metrics(), dims),
            child,
            dims,
            multiplier,
            diameter,
        }
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        self.child
            .draw(g, x + self.dims.space + self.dims.thickness, y);
        let mut g = StrokeGuard::new(g);
        g.set_stroke(Stroke::new(
            self.dims.thickness,
            CapStyle::Butt,
            JoinStyle::Miter,
        ));
        let th = self.dims.thickness / 2.0;
        let m = &self.metrics;
        let r = if self.diameter != 0.0 {
            self.diameter
        } else {
            self.multiplier
                * (m.width - self.dims.thickness).min(m.vertical_extent() - self.dims.thickness)
        };
        g.draw_round_rect(
            x + th,
            y - m.height + th,
            m.width - self.dims.thickness,
            m.vertical_extent() - self.dims.thickness,
            r,
            r,
        );
    }
}

/// A border with a drop shadow along the right and bottom edges. The
/// shadow bars extend the metrics so following material clears them.
#[derive(Debug)]
pub struct ShadowBox {
    pub metrics: Metrics,
    pub child: BoxRef,
    dims: FrameDims,
    shadow_rule: f32,
}

impl ShadowBox {
    pub fn new(child: BoxRef, thickness: f32, space: f32, shadow_rule: f32) -> Self {
        let dims = FrameDims { thickness, space };
        let mut metrics = framed_metrics(child.metrics(), dims);
        metrics.width += shadow_rule;
        metrics.depth += shadow_rule;
        Self { metrics, child, dims, shadow_rule }
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        let th = self.dims.thickness / 2.0;
        let m = &self.metrics;
        self.child
            .draw(g, x + self.dims.space + self.dims.thickness, y);
        let mut g = StrokeGuard::new(g);
        g.set_stroke(Stroke::new(
            self.dims.thickness,
            CapStyle::Butt,
            JoinStyle::Miter,
        ));
        g.draw_rect(
            x + th,
            y - m.height + th,
            m.width - self.shadow_rule - self.dims.thickness,
            m.vertical_extent() - self.shadow_rule - self.dims.thickness,
        );
        // Hairline pen for the filled bars, compensated for the current
        // scale so the fill edges stay crisp.
        let pen = (1.0 / g.scale_x()).abs();
        g.set_stroke(Stroke::new(pen, CapStyle::Butt, JoinStyle::Miter));
        g.fill_rect(
            x + self.shadow_rule - pen,
            y + m.depth - self.shadow_rule - pen,
            m.width - self.shadow_rule,
            self.shadow_rule,
        );
        g.fill_rect(
            x + m.width - self.shadow_rule - pen,
            y - m.height + th + self.shadow_rule,
            self.shadow_rule,
            m.vertical_extent() - 2.0 * self.shadow_rule - th,
        );
    }
}
