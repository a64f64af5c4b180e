//! Group boxes: horizontal rows and vertical stacks.

use super::{Alignment, BoxRef, LayoutBox, Metrics};
use crate::boxes::leaf::StrutBox;
use mathbox_render::Graphics;
use std::rc::Rc;

/// A row of boxes sharing one baseline. Width accumulates; height and
/// depth are maxima over the children with each child's shift applied
/// (a shifted child moves down, enlarging depth and reducing its claim
/// on height).
#[derive(Debug, Default)]
pub struct HBox {
    pub metrics: Metrics,
    pub children: Vec<BoxRef>,
    breaks: Vec<usize>,
}

impl HBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_child(child: BoxRef) -> Self {
        let mut hbox = Self::new();
        hbox.add(child);
        hbox
    }

    /// A row of the given width with `child` aligned inside it by padding
    /// struts. A width no larger than the child leaves the row tight.
    pub fn with_alignment(child: BoxRef, width: f32, alignment: Alignment) -> Self {
        let mut hbox = Self::new();
        let rest = width - child.width();
        if !width.is_finite() || rest <= 0.0 {
            hbox.add(child);
            return hbox;
        }
        match alignment {
            Alignment::Center | Alignment::None => {
                let pad: BoxRef = Rc::new(LayoutBox::Strut(StrutBox::wide(rest / 2.0)));
                hbox.add(pad.clone());
                hbox.add(child);
                hbox.add(pad);
            }
            Alignment::Left => {
                hbox.add(child);
                hbox.add(Rc::new(LayoutBox::Strut(StrutBox::wide(rest))));
            }
            Alignment::Right => {
                hbox.add(Rc::new(LayoutBox::Strut(StrutBox::wide(rest))));
                hbox.add(child);
            }
            _ => hbox.add(child),
        }
        hbox
    }

    fn recalculate(&mut self, child: &LayoutBox) {
        let m = child.metrics();
        self.metrics.width += m.width;
        let height = if self.children.is_empty() {
            f32::NEG_INFINITY
        } else {
            self.metrics.height
        };
        self.metrics.height = height.max(m.height - m.shift);
        let depth = if self.children.is_empty() {
            f32::NEG_INFINITY
        } else {
            self.metrics.depth
        };
        self.metrics.depth = depth.max(m.depth + m.shift);
    }

    pub fn add(&mut self, child: BoxRef) {
        self.recalculate(&child);
        self.children.push(child);
    }

    pub fn add_at(&mut self, index: usize, child: BoxRef) {
        self.recalculate(&child);
        self.children.insert(index, child);
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Declare that a line break is allowed after child `index`.
    pub fn add_break_position(&mut self, index: usize) {
        self.breaks.push(index);
    }

    pub fn break_positions(&self) -> &[usize] {
        &self.breaks
    }

    /// The last declared break position strictly before child `index`.
    pub fn nearest_break_before(&self, index: usize) -> Option<usize> {
        self.breaks
            .iter()
            .copied()
            .filter(|&p| p < index)
            .max()
    }

    fn clone_empty(&self) -> Self {
        let mut hbox = Self::new();
        hbox.metrics.shift = self.metrics.shift;
        hbox
    }

    /// Split into `[0..left_count)` and `[right_start..]`, re-deriving
    /// metrics and renumbering declared break positions into each half.
    fn split_parts(&self, left_count: usize, right_start: usize) -> (HBox, HBox) {
        let mut left = self.clone_empty();
        let mut right = self.clone_empty();
        for child in &self.children[..left_count] {
            left.add(child.clone());
        }
        for child in &self.children[right_start..] {
            right.add(child.clone());
        }
        for &b in &self.breaks {
            if b + 1 < left_count {
                left.add_break_position(b);
            } else if b >= right_start {
                right.add_break_position(b - right_start);
            }
        }
        (left, right)
    }

    /// Split after child `index`; the child stays in the left half.
    pub fn split(&self, index: usize) -> (HBox, HBox) {
        self.split_parts(index + 1, index + 1)
    }

    /// Split around child `index`, dropping it from both halves.
    pub fn split_remove(&self, index: usize) -> (HBox, HBox) {
        self.split_parts(index, index + 1)
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        let mut x_pos = x;
        for child in &self.children {
            child.draw(g, x_pos, y + child.shift());
            x_pos += child.width();
        }
    }
}

/// A column of boxes. The baseline is the first child's baseline: height
/// is the first child's height and every further child extends the depth
/// by its full vertical extent. Width spans the children's horizontal
/// extents with each child's shift applied rightward.
#[derive(Debug)]
pub struct VBox {
    pub metrics: Metrics,
    pub children: Vec<BoxRef>,
    leftmost: f32,
    rightmost: f32,
}

impl Default for VBox {
    fn default() -> Self {
        Self {
            metrics: Metrics::default(),
            children: Vec::new(),
            leftmost: f32::MAX,
            rightmost: f32::MIN,
        }
    }
}

impl VBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// A column holding `child` with `rest` extra vertical room
    /// distributed by alignment. The padding struts bypass the stacking
    /// rules; metrics are adjusted directly.
    pub fn with_alignment(child: BoxRef, rest: f32, alignment: Alignment) -> Self {
        let mut vbox = Self::new();
        vbox.add(child);
        if rest <= 0.0 {
            return vbox;
        }
        match alignment {
            Alignment::Center => {
                let pad: BoxRef = Rc::new(LayoutBox::Strut(StrutBox::new(0.0, rest / 2.0, 0.0)));
                vbox.children.insert(0, pad.clone());
                vbox.children.push(pad);
                vbox.metrics.height += rest / 2.0;
                vbox.metrics.depth += rest / 2.0;
            }
            Alignment::Top => {
                vbox.children
                    .push(Rc::new(LayoutBox::Strut(StrutBox::new(0.0, rest, 0.0))));
                vbox.metrics.depth += rest;
            }
            Alignment::Bottom => {
                vbox.children
                    .insert(0, Rc::new(LayoutBox::Strut(StrutBox::new(0.0, rest, 0.0))));
                vbox.metrics.height += rest;
            }
            _ => {}
        }
        vbox
    }

    fn update_width(&mut self, child: &LayoutBox) {
        let m = child.metrics();
        self.leftmost = self.leftmost.min(m.shift);
        self.rightmost = self.rightmost.max(m.shift + m.width.max(0.0));
        self.metrics.width = self.rightmost - self.leftmost;
    }

    pub fn add(&mut self, child: BoxRef) {
        self.update_width(&child);
        if self.children.is_empty() {
            self.metrics.height = child.height();
            self.metrics.depth = child.depth();
        } else {
            self.metrics.depth += child.vertical_extent();
        }
        self.children.push(child);
    }

    /// Add with `interline` of space above, once the column is non-empty.
    pub fn add_with_interline(&mut self, child: BoxRef, interline: f32) {
        if !self.children.is_empty() {
            self.add(Rc::new(LayoutBox::Strut(StrutBox::new(0.0, interline, 0.0))));
        }
        self.add(child);
    }

    /// Insert at `index`. Inserting at the top re-bases the column's
    /// baseline onto the new child.
    pub fn add_at(&mut self, index: usize, child: BoxRef) {
        self.update_width(&child);
        if index == 0 {
            self.metrics.depth += child.depth() + self.metrics.height;
            self.metrics.height = child.height();
        } else {
            self.metrics.depth += child.vertical_extent();
        }
        self.children.insert(index, child);
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        let mut y_pos = y - self.metrics.height;
        for child in &self.children {
            y_pos += child.height();
            child.draw(g, x + child.shift() - self.leftmost, y_pos);
            y_pos += child.depth();
        }
    }
}
