//! Recursive line breaking of horizontal boxes.
//!
//! A row declares where it may be broken (after a given child); the
//! splitter finds the deepest declared break that fits the target width,
//! splits every enclosing row around it, and stacks the resulting lines
//! into a vertical box. A row that fits, or declares no usable break,
//! comes back untouched as the same shared node.

use crate::boxes::group::{HBox, VBox};
use crate::boxes::{BoxRef, LayoutBox};
use std::rc::Rc;

/// One break candidate: a row and the child index to break after. The
/// stack built during the search runs outermost row first, so popping
/// yields the innermost candidate.
struct Position {
    index: usize,
    hbox: BoxRef,
}

impl Position {
    fn hbox(&self) -> &HBox {
        match &*self.hbox {
            LayoutBox::Horizontal(h) => h,
            _ => unreachable!("break candidates only reference horizontal boxes"),
        }
    }
}

pub struct BoxSplitter;

impl BoxSplitter {
    /// Break `boxed` into lines no wider than `width`, separated by
    /// `line_space`. Anything other than an overfull horizontal box is
    /// returned unchanged, sharing the input node.
    pub fn split(boxed: &BoxRef, width: f32, line_space: f32) -> BoxRef {
        let result = match &**boxed {
            LayoutBox::Horizontal(_) => Self::split_hbox(boxed, width, line_space),
            _ => boxed.clone(),
        };
        if log::log_enabled!(log::Level::Trace) {
            if Rc::ptr_eq(&result, boxed) {
                log::trace!("box tree:\n{}", result.dump());
            } else {
                log::trace!("before split:\n{}", boxed.dump());
                log::trace!("after split:\n{}", result.dump());
            }
        }
        result
    }

    fn split_hbox(source: &BoxRef, width: f32, line_space: f32) -> BoxRef {
        if width <= 0.0 || source.width() <= width {
            return source.clone();
        }

        let mut vbox = VBox::new();
        let mut current = source.clone();
        let mut emitted = false;

        loop {
            let mut positions = Vec::new();
            if current.width() <= width
                || Self::can_break(&mut positions, &current, width) == current.width()
            {
                break;
            }

            let innermost = positions.pop().unwrap_or_else(|| {
                unreachable!("a break width below the row width implies a candidate")
            });
            let (mut first, mut second) = innermost.hbox().split(innermost.index);
            while let Some(pos) = positions.pop() {
                let (mut left, mut right) = pos.hbox().split_remove(pos.index);
                left.add(Rc::new(LayoutBox::Horizontal(first)));
                right.add_at(0, Rc::new(LayoutBox::Horizontal(second)));
                first = left;
                second = right;
            }

            vbox.add_with_interline(Rc::new(LayoutBox::Horizontal(first)), line_space);
            current = Rc::new(LayoutBox::Horizontal(second));
            emitted = true;
        }

        if emitted {
            vbox.add_with_interline(current, line_space);
            Rc::new(LayoutBox::Vertical(vbox))
        } else {
            source.clone()
        }
    }

    /// Find where `boxed` can be broken to fit `width`, filling `stack`
    /// with the candidate in every row along the path. Returns the width
    /// of the material left of the chosen break, or the row's full width
    /// when no break is usable.
    fn can_break(stack: &mut Vec<Position>, boxed: &BoxRef, width: f32) -> f32 {
        let LayoutBox::Horizontal(hbox) = &**boxed else {
            return boxed.width();
        };

        let mut cum = 0.0;
        for (i, child) in hbox.children.iter().enumerate() {
            let next = cum + child.width();
            if next <= width {
                cum = next;
                continue;
            }

            // This child overflows. Prefer a break inside it when it is
            // itself a breakable row and that break either fits or is the
            // only option.
            let declared = hbox.nearest_break_before(i);
            if matches!(&**child, LayoutBox::Horizontal(_)) {
                let mut sub = Vec::new();
                let w = Self::can_break(&mut sub, child, width - cum);
                if w != child.width() && (cum + w <= width || declared.is_none()) {
                    stack.push(Position { index: i, hbox: boxed.clone() });
                    stack.append(&mut sub);
                    return cum + w;
                }
            }

            if let Some(p) = declared {
                let left_width: f32 = hbox.children[..=p].iter().map(|c| c.width()).sum();
                stack.push(Position { index: p, hbox: boxed.clone() });
                return left_width;
            }

            cum = next;
        }

        hbox.metrics.width
    }
}
